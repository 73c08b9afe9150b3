//! Credential store - the durable username/password list plus the
//! in-memory session.
//!
//! # Loading asymmetry
//!
//! Until [`CredentialStore::activate`] has resolved the backing file, both
//! queries fail closed, in opposite directions:
//! - [`CredentialStore::validate_login`] answers `false`, so nobody can sign
//!   in against data that is not there yet;
//! - [`CredentialStore::user_exists`] answers `true`, so registration cannot
//!   create a duplicate of a user that has not been read yet.
//!
//! Swapping either default opens a hole; keep them as they are.

use crate::{LoadResult, Result as AuthResult, Session, UserFile};

use log::{error, info, warn};
use wh_core::User;

/// How the user list was obtained during activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOrigin {
    /// Adopted from the backing file
    BackingFile,
    /// No file existed; seeded and written
    SeededFresh,
    /// File held JSON that was not an array; seeded and overwritten
    SeededReplacedInvalid,
    /// Reading or parsing failed; seeded, persistence attempted
    SeededAfterFailure,
}

/// Owns the user list, its backing file and the current session.
///
/// Constructed once at startup and passed by reference to every consumer.
#[derive(Debug)]
pub struct CredentialStore {
    file: UserFile,
    users: Vec<User>,
    loading: bool,
    origin: Option<StoreOrigin>,
    session: Session,
}

impl CredentialStore {
    /// A store that has not read its backing file yet (`loading = true`).
    pub fn new(file: UserFile) -> Self {
        Self {
            file,
            users: Vec::new(),
            loading: true,
            origin: None,
            session: Session::new(),
        }
    }

    /// Resolves the backing file. Runs once; later calls return the first
    /// outcome without touching the file.
    ///
    /// Never fails: every read, parse or write problem degrades to the seed
    /// accounts and is logged.
    pub async fn activate(&mut self) -> StoreOrigin {
        if let Some(origin) = self.origin {
            return origin;
        }

        let origin = match self.file.load().await {
            Ok(LoadResult::Loaded(users)) => {
                self.users = users;
                StoreOrigin::BackingFile
            }
            Ok(LoadResult::Missing) => {
                info!("Creating users file with default accounts");
                self.adopt_seed().await;
                StoreOrigin::SeededFresh
            }
            Ok(LoadResult::NotAnArray) => {
                warn!("Users file is not an array; replacing it with default accounts");
                self.set_aside_unusable_file().await;
                self.adopt_seed().await;
                StoreOrigin::SeededReplacedInvalid
            }
            Ok(LoadResult::Corrupted { message }) => {
                error!("Failed to parse users file: {message}");
                self.set_aside_unusable_file().await;
                self.adopt_seed().await;
                StoreOrigin::SeededAfterFailure
            }
            Err(e) => {
                error!("Failed to load users file: {e}");
                self.adopt_seed().await;
                StoreOrigin::SeededAfterFailure
            }
        };

        self.loading = false;
        self.origin = Some(origin);
        origin
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// How activation obtained the users; `None` while loading.
    pub fn origin(&self) -> Option<StoreOrigin> {
        self.origin
    }

    /// Users in registration order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn file(&self) -> &UserFile {
        &self.file
    }

    /// True iff a record matches both fields exactly. Always false while loading.
    pub fn validate_login(&self, username: &str, password: &str) -> bool {
        if self.loading {
            return false;
        }
        self.users.iter().any(|u| u.matches(username, password))
    }

    /// True iff a record has this exact username. Always true while loading.
    pub fn user_exists(&self, username: &str) -> bool {
        if self.loading {
            return true;
        }
        self.users.iter().any(|u| u.username == username)
    }

    /// Appends a user and rewrites the backing file.
    ///
    /// Returns `Ok(false)` without any change while loading or when the
    /// username is taken. When the write fails the append is undone and the
    /// write error is returned, so memory never runs ahead of the file.
    pub async fn add_user(&mut self, username: &str, password: &str) -> AuthResult<bool> {
        if self.loading {
            warn!("Rejected registration of '{username}': users are still loading");
            return Ok(false);
        }
        if self.user_exists(username) {
            return Ok(false);
        }

        self.users.push(User::new(username, password));

        if let Err(e) = self.file.save(&self.users).await {
            self.users.pop();
            error!("Failed to persist new user '{username}': {e}");
            return Err(e);
        }

        info!("Registered user '{username}' ({} total)", self.users.len());
        Ok(true)
    }

    /// Makes `username` the current session identity. Does not check that the
    /// user exists.
    pub fn login(&mut self, username: impl Into<String>) {
        self.session.login(username);
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_user(&self) -> Option<&str> {
        self.session.current_user()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn adopt_seed(&mut self) {
        self.users = User::seed();
        if let Err(e) = self.file.save(&self.users).await {
            error!("Failed to save default accounts: {e} ({})", e.recovery_hint());
        }
    }

    async fn set_aside_unusable_file(&self) {
        match self.file.backup_corrupted().await {
            Ok(Some(path)) => info!("Unusable users file kept at {path:?}"),
            Ok(None) => {}
            Err(e) => warn!("{e}"),
        }
    }
}
