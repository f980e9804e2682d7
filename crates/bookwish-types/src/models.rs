use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. The password hash never leaves the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for WishlistEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}", self.title, self.author)
    }
}

/// A review as listed for a book, joined with its writer's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub title: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.username, self.body)
    }
}

/// A catalog search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}", self.title, self.author)
    }
}

/// Which catalog field a search query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Title,
    Author,
}

impl SearchField {
    /// Query-string key understood by the catalog.
    pub fn as_param(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_and_review_render_for_display() {
        let entry = WishlistEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            created_at: DateTime::default(),
        };
        assert_eq!(entry.to_string(), "Title: Dune, Author: Frank Herbert");

        let review = Review {
            id: Uuid::new_v4(),
            user_id: entry.user_id,
            username: "ann".into(),
            title: entry.title.clone(),
            author: entry.author.clone(),
            body: "Spice must flow".into(),
            created_at: DateTime::default(),
        };
        assert_eq!(review.to_string(), "ann: Spice must flow");

        let book = Book { title: "Emma".into(), author: "Jane Austen".into() };
        assert_eq!(book.to_string(), "Title: Emma, Author: Jane Austen");
    }

    #[test]
    fn search_field_uses_lowercase_names() {
        let field: SearchField = serde_json::from_str("\"author\"").unwrap();
        assert_eq!(field, SearchField::Author);
        assert_eq!(field.as_param(), "author");
        assert_eq!(SearchField::default(), SearchField::Title);
    }
}
