//! Ordering view state machine.
//!
//! ```text
//! CustomerDetails ──start_order──► Menu ◄──back_to_menu── Cart
//!                                   │                      ▲
//!                                   └──────view_cart───────┘
//!                                                          │
//!                          Confirmation ◄──confirm_checkout┘
//!
//! reset: any view ──► CustomerDetails
//! ```

use serde::Serialize;

use crate::domain::access_code::{AccessCode, CustomerContact};
use crate::domain::foundation::Timestamp;

use super::cart::{Cart, CartLine};
use super::customer::CustomerDetails;
use super::menu::MenuItemId;
use super::order::{delivery_eta, OrderNumber, OrderReceipt};
use super::OrderingError;

/// Screen the customer is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderView {
    CustomerDetails,
    Menu,
    Cart,
    Confirmation,
}

/// Checkout data generated before the access code is stored.
///
/// Becomes an [`OrderReceipt`] once the backend accepts the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheckout {
    pub access_code: AccessCode,
    pub order_number: OrderNumber,
    pub delivery_eta: String,
    pub customer: CustomerContact,
    pub lines: Vec<CartLine>,
    pub total: u32,
}

/// One customer's walk through the ordering screens.
#[derive(Debug, Clone)]
pub struct OrderSession {
    view: OrderView,
    details: CustomerDetails,
    contact: Option<CustomerContact>,
    cart: Cart,
    receipt: Option<OrderReceipt>,
}

impl OrderSession {
    pub fn new() -> Self {
        Self {
            view: OrderView::CustomerDetails,
            details: CustomerDetails::default(),
            contact: None,
            cart: Cart::new(),
            receipt: None,
        }
    }

    pub fn view(&self) -> OrderView {
        self.view
    }

    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }

    /// Replaces the form contents. Only editable before the order starts.
    pub fn set_details(&mut self, details: CustomerDetails) -> Result<(), OrderingError> {
        self.require(&[OrderView::CustomerDetails], "edit customer details")?;
        self.details = details;
        Ok(())
    }

    /// Validates the form and opens the menu.
    pub fn start_order(&mut self) -> Result<(), OrderingError> {
        self.require(&[OrderView::CustomerDetails], "start an order")?;
        let contact = self.details.validate()?;
        self.contact = Some(contact);
        self.view = OrderView::Menu;
        Ok(())
    }

    pub fn add_item(&mut self, id: MenuItemId) -> Result<u32, OrderingError> {
        self.require(&[OrderView::Menu, OrderView::Cart], "change the cart")?;
        self.cart.add(id)
    }

    pub fn remove_item(&mut self, id: MenuItemId) -> Result<u32, OrderingError> {
        self.require(&[OrderView::Menu, OrderView::Cart], "change the cart")?;
        self.cart.remove(id)
    }

    /// Opens the cart. The menu only offers this once something is in it.
    pub fn view_cart(&mut self) -> Result<(), OrderingError> {
        self.require(&[OrderView::Menu], "view the cart")?;
        if self.cart.is_empty() {
            return Err(OrderingError::EmptyCart);
        }
        self.view = OrderView::Cart;
        Ok(())
    }

    pub fn back_to_menu(&mut self) -> Result<(), OrderingError> {
        self.require(&[OrderView::Cart], "go back to the menu")?;
        self.view = OrderView::Menu;
        Ok(())
    }

    /// Generates the access code, order number and ETA for checkout.
    ///
    /// The session stays on the cart until [`confirm_checkout`] is called,
    /// so a failed store leaves the customer where they were.
    ///
    /// [`confirm_checkout`]: OrderSession::confirm_checkout
    pub fn prepare_checkout(&self, now: Timestamp) -> Result<PendingCheckout, OrderingError> {
        self.require(&[OrderView::Cart], "check out")?;
        if self.cart.is_empty() {
            return Err(OrderingError::EmptyCart);
        }
        let customer = self
            .contact
            .clone()
            .ok_or(OrderingError::IncompleteDetails)?;

        Ok(PendingCheckout {
            access_code: AccessCode::generate(),
            order_number: OrderNumber::generate(now),
            delivery_eta: delivery_eta(now),
            customer,
            lines: self.cart.lines(),
            total: self.cart.total(),
        })
    }

    /// Moves to the confirmation screen once the code is stored.
    ///
    /// The receipt must describe the cart as it is now; a checkout prepared
    /// before the cart changed is refused.
    pub fn confirm_checkout(&mut self, pending: PendingCheckout) -> Result<&OrderReceipt, OrderingError> {
        self.require(&[OrderView::Cart], "confirm checkout")?;
        if pending.lines != self.cart.lines() || pending.total != self.cart.total() {
            return Err(OrderingError::StaleCheckout);
        }
        self.view = OrderView::Confirmation;
        Ok(&*self.receipt.insert(OrderReceipt {
            order_number: pending.order_number,
            access_code: pending.access_code,
            delivery_eta: pending.delivery_eta,
            customer: pending.customer,
            lines: pending.lines,
            total: pending.total,
        }))
    }

    /// Starts over with an empty form and cart.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn require(&self, allowed: &[OrderView], action: &'static str) -> Result<(), OrderingError> {
        if allowed.contains(&self.view) {
            Ok(())
        } else {
            Err(OrderingError::invalid_view(self.view, action))
        }
    }
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}
