//! Order session: cart -> checkout -> receipt.
//!
//! No screen owns the order. Each state is rebuilt from the
//! [`TransitionParams`] handed to it by the previous one, so every decoder
//! here tolerates absent or malformed keys and falls back to a default plus
//! a [`wh_core::Notice`].

pub mod cart;
pub mod error;
pub mod navigation;
pub mod params;
pub mod payload;
pub mod session;
pub mod state;

pub use cart::Cart;
pub use error::{OrderError, Result};
pub use navigation::Navigation;
pub use params::TransitionParams;
pub use payload::{CheckoutPayload, Decoded, ReceiptMethod, ReceiptPayload};
pub use session::OrderSession;
pub use state::browsing::Browsing;
pub use state::checkout::{Checkout, CheckoutAction};
pub use state::receipt::{Receipt, ReceiptAction};

#[cfg(test)]
mod tests;
