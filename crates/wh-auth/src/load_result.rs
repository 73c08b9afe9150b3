use wh_core::User;

/// Outcome of reading the backing file - distinguishes "not found" and
/// "unusable content" from I/O errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    /// File parsed to an array of users
    Loaded(Vec<User>),
    /// No file yet (first launch)
    Missing,
    /// Valid JSON, but the document is not an array
    NotAnArray,
    /// Not JSON, or an array whose elements are not users
    Corrupted { message: String },
}
