/// A login or registration input rule the user violated.
///
/// The display text is shown to the user as-is.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are blank.
    #[error("Please fill in all fields")]
    MissingFields,
    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,
    /// Password is shorter than the configured minimum.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum allowed length.
        min: usize,
    },
    /// Password is longer than the configured maximum.
    #[error("Password must be at most {max} characters")]
    PasswordTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Username contains something other than letters, digits and underscore.
    #[error("Username may only contain letters, numbers and underscore")]
    InvalidUsername,
    /// Username is longer than the configured maximum.
    #[error("Username must be at most {max} characters")]
    UsernameTooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// Another account already uses this username.
    #[error("This username is already taken. Choose another one.")]
    UsernameTaken,
}
