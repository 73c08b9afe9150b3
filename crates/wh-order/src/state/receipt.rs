use crate::{Cart, Navigation, ReceiptMethod, ReceiptPayload, TransitionParams};

use chrono::{DateTime, Local};
use rand::Rng;
use wh_core::{MenuItem, Money, Notice};

/// Exclusive upper bound of the display order number
pub const ORDER_NUMBER_LIMIT: u32 = 100_000;

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";

/// The only exits from a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptAction {
    /// Back to the menu with an empty cart
    NewOrder,
    /// Leave the order flow; the sign-in session is untouched
    EndSession,
}

/// Receipt screen. Terminal: nothing here is kept once the user leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    cart: Cart,
    total: Money,
    method: ReceiptMethod,
    order_number: u32,
    issued_at: DateTime<Local>,
    notice: Option<Notice>,
}

impl Receipt {
    /// Builds the receipt with a random order number and the current time.
    pub fn from_params(params: &TransitionParams) -> Self {
        Self::from_params_with(params, &mut rand::rng(), Local::now())
    }

    pub fn from_params_with<R: Rng>(
        params: &TransitionParams,
        rng: &mut R,
        issued_at: DateTime<Local>,
    ) -> Self {
        let decoded = ReceiptPayload::decode(params);
        Self {
            cart: decoded.value.cart,
            total: decoded.value.total,
            method: decoded.value.method,
            order_number: rng.random_range(0..ORDER_NUMBER_LIMIT),
            issued_at,
            notice: decoded.notice,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        self.cart.items()
    }

    /// Total as received.
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn method(&self) -> &ReceiptMethod {
        &self.method
    }

    /// Display only; not persisted and not guaranteed unique.
    pub fn order_number(&self) -> u32 {
        self.order_number
    }

    pub fn order_label(&self) -> String {
        format!("#{}", self.order_number)
    }

    pub fn issued_at(&self) -> DateTime<Local> {
        self.issued_at
    }

    pub fn date_string(&self) -> String {
        self.issued_at.format(DATE_FORMAT).to_string()
    }

    pub fn time_string(&self) -> String {
        self.issued_at.format(TIME_FORMAT).to_string()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn actions(&self) -> [ReceiptAction; 2] {
        [ReceiptAction::NewOrder, ReceiptAction::EndSession]
    }

    pub fn follow(&self, action: ReceiptAction) -> Navigation {
        match action {
            ReceiptAction::NewOrder => Navigation::ToMenu,
            ReceiptAction::EndSession => Navigation::ToHome,
        }
    }
}
