//! Login and registration form input, checked before the store is touched.

use crate::ValidationError;

use wh_config::ValidationConfig;

/// Checked credentials: username trimmed, password verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `[A-Za-z0-9_]+`
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields must be non-blank.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirmation: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            confirmation: confirmation.into(),
        }
    }

    /// Applies the registration rules in order and reports the first one broken.
    ///
    /// Uniqueness is not checked here; it needs the store.
    pub fn validate(&self, rules: &ValidationConfig) -> Result<Credentials, ValidationError> {
        if self.username.trim().is_empty()
            || self.password.trim().is_empty()
            || self.confirmation.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        if self.password != self.confirmation {
            return Err(ValidationError::PasswordMismatch);
        }

        let password_length = self.password.chars().count();
        if password_length < rules.min_password_length {
            return Err(ValidationError::PasswordTooShort {
                min: rules.min_password_length,
            });
        }
        if password_length > rules.max_password_length {
            return Err(ValidationError::PasswordTooLong {
                max: rules.max_password_length,
            });
        }

        let username = self.username.trim();
        if !is_valid_username(username) {
            return Err(ValidationError::InvalidUsername);
        }
        if username.chars().count() > rules.max_username_length {
            return Err(ValidationError::UsernameTooLong {
                max: rules.max_username_length,
            });
        }

        Ok(Credentials {
            username: username.to_string(),
            password: self.password.clone(),
        })
    }
}
