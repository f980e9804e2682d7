use rusqlite::ffi;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected before reaching storage.
    #[error("{0}")]
    Validation(&'static str),

    #[error("username is already taken")]
    AlreadyExists,

    #[error("not found")]
    NotFound,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Extended SQLite result code carried by a storage error, if any.
pub(crate) fn sqlite_extended_code(err: &anyhow::Error) -> Option<i32> {
    match err.downcast_ref::<rusqlite::Error>() {
        Some(rusqlite::Error::SqliteFailure(e, _)) => Some(e.extended_code),
        _ => None,
    }
}

pub(crate) fn is_unique_violation(err: &anyhow::Error) -> bool {
    sqlite_extended_code(err) == Some(ffi::SQLITE_CONSTRAINT_UNIQUE)
}

pub(crate) fn is_foreign_key_violation(err: &anyhow::Error) -> bool {
    sqlite_extended_code(err) == Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}
