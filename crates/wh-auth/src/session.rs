/// The signed-in identity. Held in memory only; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_user: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the current user. No check that the username exists.
    pub fn login(&mut self, username: impl Into<String>) {
        self.current_user = Some(username.into());
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
