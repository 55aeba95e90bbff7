//! Access code handlers.
//!
//! ## Commands
//! - Issuing a code at checkout (store + email)
//! - Redeeming a code at pickup (verify + delete)

mod issue_access_code;
mod redeem_access_code;

pub use issue_access_code::{
    IssueAccessCodeCommand, IssueAccessCodeHandler, IssueAccessCodeResult,
};
pub use redeem_access_code::{
    RedeemAccessCodeCommand, RedeemAccessCodeHandler, RedeemAccessCodeResult,
};
