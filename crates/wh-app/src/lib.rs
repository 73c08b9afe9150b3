pub mod context;
pub mod error;
pub mod handlers;
pub mod logger;

#[cfg(test)]
mod tests;

pub use context::AppContext;
pub use error::{AppError, Result};
pub use handlers::home::{HomeAction, HomeScreen};
pub use handlers::login::{LoginOutcome, login};
pub use handlers::register::{RegistrationOutcome, register};
