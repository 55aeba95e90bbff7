//! Delivery Bot - campus food ordering with robot pickup
//!
//! Customers order from a fixed menu and receive a single-use QR access code
//! by email. The delivery robot scans the code at pickup; the code is
//! consumed on first scan and expires after a short TTL otherwise.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
