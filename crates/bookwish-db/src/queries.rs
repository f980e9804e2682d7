use crate::Database;
use crate::models::{ReviewRow, UserRow, WishlistRow};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, Row};

impl Database {
    // -- Users --

    pub fn create_user(&self, id: &str, username: &str, password_hash: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO users (id, username, password) VALUES (?1, ?2, ?3)",
                (id, username, password_hash),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "username", username))
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user(conn, "id", id))
    }

    // -- Wishlist --

    pub fn insert_wishlist_entry(
        &self,
        id: &str,
        user_id: &str,
        title: &str,
        author: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO wishlist (id, user_id, title, author) VALUES (?1, ?2, ?3, ?4)",
                (id, user_id, title, author),
            )?;
            Ok(())
        })
    }

    pub fn get_wishlist_entry(&self, id: &str) -> Result<Option<WishlistRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, user_id, title, author, created_at FROM wishlist WHERE id = ?1",
                    [id],
                    map_wishlist_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Entries owned by `user_id`, oldest first.
    pub fn get_wishlist(&self, user_id: &str) -> Result<Vec<WishlistRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, title, author, created_at
                 FROM wishlist
                 WHERE user_id = ?1
                 ORDER BY rowid",
            )?;

            let rows = stmt
                .query_map([user_id], map_wishlist_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    /// Delete the oldest entry exactly matching (title, author).
    /// Returns false when nothing matched.
    pub fn delete_wishlist_entry(&self, user_id: &str, title: &str, author: &str) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let deleted = conn.execute(
                "DELETE FROM wishlist WHERE rowid = (
                     SELECT rowid FROM wishlist
                     WHERE user_id = ?1 AND title = ?2 AND author = ?3
                     ORDER BY rowid
                     LIMIT 1
                 )",
                (user_id, title, author),
            )?;
            Ok(deleted > 0)
        })
    }

    // -- Reviews --

    pub fn insert_review(
        &self,
        id: &str,
        user_id: &str,
        title: &str,
        author: &str,
        body: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO reviews (id, user_id, title, author, body) VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![id, user_id, title, author, body],
            )?;
            Ok(())
        })
    }

    pub fn get_review(&self, id: &str) -> Result<Option<ReviewRow>> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT r.id, r.user_id, u.username, r.title, r.author, r.body, r.created_at
                     FROM reviews r
                     JOIN users u ON r.user_id = u.id
                     WHERE r.id = ?1",
                    [id],
                    map_review_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Reviews of one book by any user, oldest first.
    pub fn get_reviews_for_book(&self, title: &str, author: &str) -> Result<Vec<ReviewRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT r.id, r.user_id, u.username, r.title, r.author, r.body, r.created_at
                 FROM reviews r
                 JOIN users u ON r.user_id = u.id
                 WHERE r.title = ?1 AND r.author = ?2
                 ORDER BY r.rowid",
            )?;

            let rows = stmt
                .query_map((title, author), map_review_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}

fn query_user(conn: &Connection, column: &str, value: &str) -> Result<Option<UserRow>> {
    // `column` is one of two literals chosen inside this module.
    let sql = format!("SELECT id, username, password, created_at FROM users WHERE {column} = ?1");
    let mut stmt = conn.prepare(&sql)?;

    let row = stmt
        .query_row([value], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                created_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn map_wishlist_row(row: &Row<'_>) -> rusqlite::Result<WishlistRow> {
    Ok(WishlistRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        author: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn map_review_row(row: &Row<'_>) -> rusqlite::Result<ReviewRow> {
    Ok(ReviewRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        username: row.get(2)?,
        title: row.get(3)?,
        author: row.get(4)?,
        body: row.get(5)?,
        created_at: row.get(6)?,
    })
}
