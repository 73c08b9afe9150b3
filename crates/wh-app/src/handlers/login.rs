use crate::AppContext;
use crate::handlers::validation_notice;

use log::{info, warn};
use wh_auth::LoginForm;
use wh_core::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session started; go to the home screen
    SignedIn { username: String },
    /// Stay on the login screen and show the notice
    Rejected(Notice),
}

/// Checks the form, waits the configured login delay, then checks the
/// credentials against the store.
pub async fn login(ctx: &mut AppContext, form: &LoginForm) -> LoginOutcome {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(e) => return LoginOutcome::Rejected(validation_notice(&e)),
    };

    tokio::time::sleep(ctx.config().auth.login_delay()).await;

    if !ctx
        .store()
        .validate_login(&credentials.username, &credentials.password)
    {
        warn!("Failed login for '{}'", credentials.username);
        return LoginOutcome::Rejected(Notice::error(
            "Login error",
            "Incorrect username or password",
        ));
    }

    ctx.store_mut().login(credentials.username.clone());
    info!("User '{}' signed in", credentials.username);
    LoginOutcome::SignedIn {
        username: credentials.username,
    }
}
