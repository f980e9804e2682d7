use tracing::debug;
use uuid::Uuid;

use bookwish_db::Database;
use bookwish_types::Review;

use crate::convert;
use crate::error::{Error, Result, is_foreign_key_violation};
use crate::validate::require;

/// Free-text reviews keyed by (title, author), readable by everyone.
pub struct ReviewStore<'a> {
    db: &'a Database,
}

impl<'a> ReviewStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn add_review(&self, user_id: Uuid, title: &str, author: &str, body: &str) -> Result<Review> {
        require(title, "title is required")?;
        require(author, "author is required")?;
        require(body, "review text is required")?;

        let id = Uuid::new_v4().to_string();
        self.db
            .insert_review(&id, &user_id.to_string(), title, author, body)
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    Error::NotFound
                } else {
                    Error::Storage(e)
                }
            })?;

        debug!("User {} reviewed '{}' by {}", user_id, title, author);

        let row = self.db.get_review(&id)?.ok_or(Error::NotFound)?;
        Ok(convert::review(row))
    }

    /// Every review of exactly this (title, author), oldest first.
    pub fn list_reviews(&self, title: &str, author: &str) -> Result<Vec<Review>> {
        let rows = self.db.get_reviews_for_book(title, author)?;
        Ok(rows.into_iter().map(convert::review).collect())
    }
}
