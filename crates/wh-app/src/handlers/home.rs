use crate::AppContext;

use log::info;
use wh_order::OrderSession;

/// What the signed-in home screen offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    StartOrder,
    Logout,
}

/// Signed-in landing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScreen {
    username: String,
}

impl HomeScreen {
    /// `None` when nobody is signed in.
    pub fn open(ctx: &AppContext) -> Option<Self> {
        ctx.store().current_user().map(|username| Self {
            username: username.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.username)
    }

    pub fn actions(&self) -> [HomeAction; 2] {
        [HomeAction::StartOrder, HomeAction::Logout]
    }

    /// A new order always starts from an empty cart.
    pub fn start_order(&self) -> OrderSession {
        OrderSession::new()
    }

    /// Ends the session; the caller returns to the login screen.
    pub fn logout(self, ctx: &mut AppContext) {
        ctx.store_mut().logout();
        info!("User '{}' signed out", self.username);
    }
}
