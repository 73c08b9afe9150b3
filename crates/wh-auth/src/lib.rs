pub mod credential_store;
pub mod error;
pub mod forms;
pub mod load_result;
pub mod session;
pub mod user_file;
pub mod validation_error;

pub use credential_store::{CredentialStore, StoreOrigin};
pub use error::{AuthError, Result};
pub use forms::{Credentials, LoginForm, RegistrationForm, is_valid_username};
pub use load_result::LoadResult;
pub use session::Session;
pub use user_file::UserFile;
pub use validation_error::ValidationError;
