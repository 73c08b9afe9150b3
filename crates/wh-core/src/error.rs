use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid payment method: {value} {location}")]
    InvalidPaymentMethod {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid amount: {value} {location}")]
    InvalidAmount {
        value: String,
        location: ErrorLocation,
    },

    #[error("Menu catalog parse error: {source} {location}")]
    CatalogParse {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Duplicate menu item id {id} {location}")]
    DuplicateMenuItem { id: i64, location: ErrorLocation },

    #[error("Menu item {id} has a negative price {location}")]
    NegativePrice { id: i64, location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_amount(value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::CatalogParse {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
