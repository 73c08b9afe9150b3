use crate::{
    Cart, CheckoutPayload, Navigation, OrderError, ReceiptMethod, ReceiptPayload,
    Result as OrderResult, TransitionParams,
};

use log::{info, warn};
use wh_core::{Money, Notice, PaymentMethod};

/// What the payment screen lets the user do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAction {
    SelectPayment(PaymentMethod),
    Finalize,
    BackToMenu,
}

/// Payment screen.
///
/// When the incoming cart is missing, malformed or empty the screen is
/// unavailable: it computes no total and only offers the way back to the
/// menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    cart: Cart,
    selected: Option<PaymentMethod>,
    notice: Option<Notice>,
}

impl Checkout {
    pub fn from_params(params: &TransitionParams) -> Self {
        let decoded = CheckoutPayload::decode(params);
        if decoded.value.cart.is_empty() {
            warn!("Payment screen opened without a usable cart");
        }

        Self {
            cart: decoded.value.cart,
            selected: None,
            notice: decoded.notice,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.cart.is_empty()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Recomputed from the decoded cart; any total sent along is ignored.
    /// `None` while unavailable.
    pub fn total(&self) -> Option<Money> {
        self.is_available().then(|| self.cart.total())
    }

    /// Decoding problem to show on entry, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn actions(&self) -> Vec<CheckoutAction> {
        if !self.is_available() {
            return vec![CheckoutAction::BackToMenu];
        }

        let mut actions: Vec<CheckoutAction> = PaymentMethod::ALL
            .into_iter()
            .map(CheckoutAction::SelectPayment)
            .collect();
        if self.can_finalize() {
            actions.push(CheckoutAction::Finalize);
        }
        actions.push(CheckoutAction::BackToMenu);
        actions
    }

    /// Replaces any earlier choice.
    pub fn select(&mut self, method: PaymentMethod) -> OrderResult<()> {
        if !self.is_available() {
            return Err(OrderError::checkout_unavailable());
        }
        self.selected = Some(method);
        Ok(())
    }

    pub fn selected(&self) -> Option<PaymentMethod> {
        self.selected
    }

    pub fn can_finalize(&self) -> bool {
        self.selected.is_some() && self.is_available()
    }

    /// Serializes `{cart, recomputed total, method}` for the receipt.
    pub fn finalize(&self) -> OrderResult<Navigation> {
        let Some(method) = self.selected else {
            return Err(OrderError::no_payment_method());
        };
        if self.cart.is_empty() {
            return Err(OrderError::empty_cart());
        }

        let payload = ReceiptPayload {
            cart: self.cart.clone(),
            total: self.cart.total(),
            method: ReceiptMethod::Method(method),
        };
        let params = payload.encode()?;
        info!("Order finalized: total {}, paid with {method}", payload.total);
        Ok(Navigation::ToReceipt(params))
    }

    pub fn back_to_menu(&self) -> Navigation {
        Navigation::ToMenu
    }
}
