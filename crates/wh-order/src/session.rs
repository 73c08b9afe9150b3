use crate::{Browsing, Checkout, Navigation, Receipt};

use log::debug;

/// The screen the order flow is on, rebuilt from each [`Navigation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSession {
    Browsing(Browsing),
    Checkout(Checkout),
    Receipt(Receipt),
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    /// A fresh flow on the menu with an empty cart.
    pub fn new() -> Self {
        Self::Browsing(Browsing::new())
    }

    /// Moves to the screen `navigation` names. Nothing carries over except
    /// what the navigation's params hold.
    ///
    /// Returns `None` when the navigation leaves the order flow.
    pub fn navigate(navigation: Navigation) -> Option<Self> {
        let next = match navigation {
            Navigation::ToMenu => Self::new(),
            Navigation::ToCheckout(params) => Self::Checkout(Checkout::from_params(&params)),
            Navigation::ToReceipt(params) => Self::Receipt(Receipt::from_params(&params)),
            Navigation::ToHome => {
                debug!("Leaving order flow");
                return None;
            }
        };
        debug!("Order flow now on {}", next.screen_name());
        Some(next)
    }

    pub fn screen_name(&self) -> &'static str {
        match self {
            Self::Browsing(_) => "menu",
            Self::Checkout(_) => "payment",
            Self::Receipt(_) => "receipt",
        }
    }

    pub fn as_browsing_mut(&mut self) -> Option<&mut Browsing> {
        match self {
            Self::Browsing(browsing) => Some(browsing),
            _ => None,
        }
    }

    pub fn as_checkout_mut(&mut self) -> Option<&mut Checkout> {
        match self {
            Self::Checkout(checkout) => Some(checkout),
            _ => None,
        }
    }

    pub fn as_receipt(&self) -> Option<&Receipt> {
        match self {
            Self::Receipt(receipt) => Some(receipt),
            _ => None,
        }
    }
}
