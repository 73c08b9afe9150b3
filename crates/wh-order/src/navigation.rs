use crate::TransitionParams;

/// Where a screen asks to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Menu with an empty cart
    ToMenu,
    /// Payment screen; params carry `cart` and `total`
    ToCheckout(TransitionParams),
    /// Receipt screen; params carry `cart`, `total` and `payment_method`
    ToReceipt(TransitionParams),
    /// Leave the order flow for the entry screen
    ToHome,
}

impl Navigation {
    pub fn params(&self) -> Option<&TransitionParams> {
        match self {
            Self::ToCheckout(params) | Self::ToReceipt(params) => Some(params),
            Self::ToMenu | Self::ToHome => None,
        }
    }
}
