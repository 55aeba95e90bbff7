//! Ordering domain module.
//!
//! The customer-facing half of the flow: collect details, build a cart from
//! the fixed menu, and check out into an access code.
//!
//! # Module Structure
//!
//! - `menu` - Fixed catalog, locations, delivery constants
//! - `customer` - Customer details form validation
//! - `cart` - Cart arithmetic
//! - `order` - Order number, delivery ETA, receipt
//! - `qr` - QR image URLs
//! - `session` - View state machine

mod cart;
mod customer;
mod errors;
mod menu;
mod order;
mod qr;
mod session;

pub use cart::{Cart, CartLine};
pub use customer::CustomerDetails;
pub use errors::OrderingError;
pub use menu::{
    find_item, is_known_location, menu, MenuItem, MenuItemId, DELIVERY_CHARGE,
    DELIVERY_TIME_MINUTES, LOCATION_OPTIONS,
};
pub use order::{delivery_eta, OrderNumber, OrderReceipt};
pub use qr::{fallback_qr_image_url, qr_image_url, qr_image_url_with_base, DEFAULT_QR_SIZE};
pub use session::{OrderSession, OrderView, PendingCheckout};
