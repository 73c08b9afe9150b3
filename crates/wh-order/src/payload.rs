//! Encode/decode pairs for the two payloads that cross screen boundaries.
//!
//! Encoding is fallible only in serialization. Decoding never fails: a
//! missing or malformed value becomes its default and, when the user should
//! know, a [`Notice`].

use crate::params::{CART_KEY, PAYMENT_METHOD_KEY, TOTAL_KEY};
use crate::{Cart, OrderError, Result as OrderResult, TransitionParams};

use std::fmt;
use std::str::FromStr;

use log::{error, warn};
use wh_core::{Money, Notice, PaymentMethod};

const NOT_INFORMED: &str = "Not informed";

/// A decoded payload plus the notice to show, if decoding fell back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub value: T,
    pub notice: Option<Notice>,
}

/// Menu -> payment screen: `{cart, total}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutPayload {
    pub cart: Cart,
    /// Total as the sender computed it. Carried for display only; the
    /// payment screen recomputes from the cart.
    pub declared_total: Option<Money>,
}

impl CheckoutPayload {
    pub fn from_cart(cart: Cart) -> Self {
        let declared_total = Some(cart.total());
        Self {
            cart,
            declared_total,
        }
    }

    pub fn encode(&self) -> OrderResult<TransitionParams> {
        let total = self.declared_total.unwrap_or_else(|| self.cart.total());
        Ok(TransitionParams::new()
            .with(CART_KEY, self.cart.to_json()?)
            .with(TOTAL_KEY, total.to_display_string()))
    }

    pub fn decode(params: &TransitionParams) -> Decoded<Self> {
        let (cart, notice) = decode_cart(params);
        let declared_total = params.get(TOTAL_KEY).and_then(|t| Money::from_str(t).ok());
        Decoded {
            value: Self {
                cart,
                declared_total,
            },
            notice,
        }
    }
}

/// Payment method as the receipt received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptMethod {
    Method(PaymentMethod),
    /// Present but not one of the known methods; shown verbatim
    Unrecognized(String),
    NotInformed,
}

impl ReceiptMethod {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => Self::NotInformed,
            Some(raw) => match PaymentMethod::from_str(raw) {
                Ok(method) => Self::Method(method),
                Err(_) => Self::Unrecognized(raw.to_string()),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Method(method) => method.as_str(),
            Self::Unrecognized(raw) => raw,
            Self::NotInformed => NOT_INFORMED,
        }
    }
}

impl fmt::Display for ReceiptMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment screen -> receipt: `{cart, total, payment_method}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptPayload {
    pub cart: Cart,
    /// Taken as given by the receipt, never recomputed
    pub total: Money,
    pub method: ReceiptMethod,
}

impl ReceiptPayload {
    pub fn encode(&self) -> OrderResult<TransitionParams> {
        let mut params = TransitionParams::new()
            .with(CART_KEY, self.cart.to_json()?)
            .with(TOTAL_KEY, self.total.to_display_string());
        if !matches!(self.method, ReceiptMethod::NotInformed) {
            params.insert(PAYMENT_METHOD_KEY, self.method.as_str());
        }
        Ok(params)
    }

    pub fn decode(params: &TransitionParams) -> Decoded<Self> {
        let (cart, notice) = decode_cart(params);

        let total = match params.get(TOTAL_KEY) {
            None => Money::ZERO,
            Some(raw) => Money::from_str(raw).unwrap_or_else(|_| {
                warn!("Receipt total '{raw}' is not a number; showing 0.00");
                Money::ZERO
            }),
        };

        Decoded {
            value: Self {
                cart,
                total,
                method: ReceiptMethod::parse(params.get(PAYMENT_METHOD_KEY)),
            },
            notice,
        }
    }
}

/// Missing cart means empty; a malformed one becomes empty with a notice.
fn decode_cart(params: &TransitionParams) -> (Cart, Option<Notice>) {
    let Some(json) = params.get(CART_KEY) else {
        return (Cart::new(), None);
    };

    match Cart::from_json(json) {
        Ok(cart) => (cart, None),
        Err(e) => {
            error!("Failed to decode cart payload: {e}");
            (
                Cart::new(),
                Some(OrderError::checkout_unavailable().notice()),
            )
        }
    }
}
