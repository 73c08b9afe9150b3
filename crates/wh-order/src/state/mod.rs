//! The three screens of the order flow.

pub mod browsing;
pub mod checkout;
pub mod receipt;
