//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over ports.

pub mod access_code;
pub mod ordering;

pub use access_code::{
    IssueAccessCodeCommand, IssueAccessCodeHandler, IssueAccessCodeResult,
    RedeemAccessCodeCommand, RedeemAccessCodeHandler, RedeemAccessCodeResult,
};
pub use ordering::CheckoutOrderHandler;
