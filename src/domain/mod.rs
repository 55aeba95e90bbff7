//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `access_code` - Single-use, short-lived pickup codes
//! - `ordering` - Menu, cart and checkout view flow

pub mod access_code;
pub mod foundation;
pub mod ordering;
