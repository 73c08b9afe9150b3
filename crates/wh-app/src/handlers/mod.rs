//! Screen handlers. Each takes the [`crate::AppContext`] by reference and
//! reports what the user should see next.

pub mod home;
pub mod login;
pub mod register;

use wh_auth::ValidationError;
use wh_core::Notice;

pub(crate) fn validation_notice(error: &ValidationError) -> Notice {
    Notice::error("Error", error.to_string())
}
