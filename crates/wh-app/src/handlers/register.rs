use crate::AppContext;
use crate::handlers::validation_notice;

use log::{error, info};
use wh_auth::{RegistrationForm, ValidationError};
use wh_core::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Account created and signed in; go to the home screen
    Registered { username: String },
    /// Nothing changed; stay on the form and show the notice
    Rejected(Notice),
}

/// Applies the input rules, rejects taken usernames, then persists the new
/// account and signs it in.
pub async fn register(ctx: &mut AppContext, form: &RegistrationForm) -> RegistrationOutcome {
    let credentials = match form.validate(&ctx.config().validation) {
        Ok(credentials) => credentials,
        Err(e) => return RegistrationOutcome::Rejected(validation_notice(&e)),
    };

    if ctx.store().user_exists(&credentials.username) {
        return RegistrationOutcome::Rejected(validation_notice(&ValidationError::UsernameTaken));
    }

    let store = ctx.store_mut();
    match store
        .add_user(&credentials.username, &credentials.password)
        .await
    {
        Ok(true) => {
            store.login(credentials.username.clone());
            info!("User '{}' registered and signed in", credentials.username);
            RegistrationOutcome::Registered {
                username: credentials.username,
            }
        }
        Ok(false) => RegistrationOutcome::Rejected(Notice::error(
            "Error",
            "Could not register the user. Try again.",
        )),
        Err(e) => {
            error!("Registration of '{}' failed: {e}", credentials.username);
            RegistrationOutcome::Rejected(Notice::error(
                "Error",
                format!("Could not register the user. {}", e.recovery_hint()),
            ))
        }
    }
}
