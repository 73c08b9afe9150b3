//! Domain models shared by the credential store and the order flow.
//!
//! No I/O lives here apart from parsing the static menu catalog from text.

pub mod catalog;
pub mod error;
pub mod models;

pub use catalog::MenuCatalog;
pub use error::{CoreError, Result};
pub use models::menu_category::MenuCategory;
pub use models::menu_item::MenuItem;
pub use models::money::Money;
pub use models::notice::{Notice, NoticeLevel};
pub use models::payment_method::PaymentMethod;
pub use models::user::User;

pub use rust_decimal::Decimal;

#[cfg(test)]
mod tests;
