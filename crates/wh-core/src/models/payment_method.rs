use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Payment methods accepted at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Instant bank transfer
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "Cartão Débito")]
    DebitCard,
    #[serde(rename = "Cartão Crédito")]
    CreditCard,
}

impl PaymentMethod {
    /// Every method, in the order the payment screen offers them.
    pub const ALL: [PaymentMethod; 3] = [Self::Pix, Self::DebitCard, Self::CreditCard];

    /// Wire representation used in navigation payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::DebitCard => "Cartão Débito",
            Self::CreditCard => "Cartão Crédito",
        }
    }

    /// Short button label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::DebitCard => "Débito",
            Self::CreditCard => "Crédito",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "PIX" => Ok(Self::Pix),
            "Cartão Débito" => Ok(Self::DebitCard),
            "Cartão Crédito" => Ok(Self::CreditCard),
            _ => Err(CoreError::InvalidPaymentMethod {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
