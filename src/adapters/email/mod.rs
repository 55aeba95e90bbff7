//! Access code notifier adapters.
//!
//! - `MailtrapNotifier` - HTML QR email via the Mailtrap send API
//! - `LoggingNotifier` - Logs instead of sending (development)

mod logging;
mod mailtrap;
mod template;

pub use logging::LoggingNotifier;
pub use mailtrap::{MailtrapConfig, MailtrapNotifier};
pub use template::{render_access_code_email, EMAIL_QR_SIZE};
