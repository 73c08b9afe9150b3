use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use wh_core::Notice;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Cart is empty {location}")]
    EmptyCart { location: ErrorLocation },

    #[error("No payment method selected {location}")]
    NoPaymentMethod { location: ErrorLocation },

    #[error("Checkout unavailable: cart could not be loaded {location}")]
    CheckoutUnavailable { location: ErrorLocation },

    #[error("Menu item {id} not found {location}")]
    ItemNotFound { id: i64, location: ErrorLocation },

    #[error("Invalid cart payload: {message} {location}")]
    InvalidCart {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to encode cart: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl OrderError {
    #[track_caller]
    pub fn empty_cart() -> Self {
        Self::EmptyCart {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_payment_method() -> Self {
        Self::NoPaymentMethod {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn checkout_unavailable() -> Self {
        Self::CheckoutUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn item_not_found(id: i64) -> Self {
        Self::ItemNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_cart(message: impl Into<String>) -> Self {
        Self::InvalidCart {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message shown to the user for this error
    pub fn notice(&self) -> Notice {
        match self {
            Self::EmptyCart { .. } => Notice::error(
                "Error",
                "Cart is empty. Add products before finishing the order.",
            ),
            Self::NoPaymentMethod { .. } => {
                Notice::warning("Attention", "Please select a payment method.")
            }
            Self::CheckoutUnavailable { .. } | Self::InvalidCart { .. } => {
                Notice::error("Error", "Could not load cart data")
            }
            Self::ItemNotFound { id, .. } => {
                Notice::warning("Unavailable", format!("Item {id} is not on the menu."))
            }
            Self::Encode { .. } => Notice::error("Error", "Could not prepare the order."),
        }
    }
}

impl From<serde_json::Error> for OrderError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, OrderError>;
