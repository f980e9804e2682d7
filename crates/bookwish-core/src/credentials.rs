use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand_core::OsRng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use bookwish_db::Database;
use bookwish_types::User;

use crate::convert;
use crate::error::{Error, Result, is_unique_violation};
use crate::validate::require;

/// Username/password registration and checks.
///
/// Passwords are stored as Argon2id PHC strings, each with its own random salt.
pub struct CredentialStore<'a> {
    db: &'a Database,
}

impl<'a> CredentialStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a new account. Fails with [`Error::AlreadyExists`] if the
    /// username is taken, leaving the existing account untouched.
    pub fn register(&self, username: &str, password: &str) -> Result<User> {
        require(username, "username is required")?;
        require(password, "password is required")?;

        if self.db.get_user_by_username(username)?.is_some() {
            return Err(Error::AlreadyExists);
        }

        let password_hash = hash_password(password)?;
        let user_id = Uuid::new_v4().to_string();

        self.db
            .create_user(&user_id, username, &password_hash)
            .map_err(|e| {
                // Lost a race with a concurrent registration.
                if is_unique_violation(&e) {
                    Error::AlreadyExists
                } else {
                    Error::Storage(e)
                }
            })?;

        let row = self.db.get_user_by_id(&user_id)?.ok_or(Error::NotFound)?;
        info!("Registered user '{}'", row.username);
        Ok(convert::user(row))
    }

    /// True iff `password` matches the stored hash for `username`.
    /// Unknown users and mismatches are `Ok(false)`; only storage failures error.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let Some(row) = self.db.get_user_by_username(username)? else {
            debug!("Authentication failed: no user '{}'", username);
            return Ok(false);
        };

        Ok(verify_password(password, &row.password, &row.username))
    }

    pub fn get_id(&self, username: &str) -> Result<Uuid> {
        let row = self.db.get_user_by_username(username)?.ok_or(Error::NotFound)?;
        let user = convert::user(row);
        Ok(user.id)
    }

    /// Authenticate and return the account on success.
    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        let row = self
            .db
            .get_user_by_username(username)?
            .ok_or(Error::InvalidCredentials)?;

        if !verify_password(password, &row.password, &row.username) {
            return Err(Error::InvalidCredentials);
        }

        Ok(convert::user(row))
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Hashing(e.to_string()))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, stored: &str, username: &str) -> bool {
    let parsed = match PasswordHash::new(stored) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Unreadable password hash for '{}': {}", username, e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
