use tracing::debug;
use uuid::Uuid;

use bookwish_db::Database;
use bookwish_types::WishlistEntry;

use crate::convert;
use crate::error::{Error, Result, is_foreign_key_violation};
use crate::validate::require;

/// Per-user list of books to read. Duplicate entries are allowed.
pub struct WishlistStore<'a> {
    db: &'a Database,
}

impl<'a> WishlistStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub fn add_entry(&self, user_id: Uuid, title: &str, author: &str) -> Result<WishlistEntry> {
        require(title, "title is required")?;
        require(author, "author is required")?;

        let id = Uuid::new_v4().to_string();
        self.db
            .insert_wishlist_entry(&id, &user_id.to_string(), title, author)
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    Error::NotFound
                } else {
                    Error::Storage(e)
                }
            })?;

        debug!("User {} added '{}' by {} to wishlist", user_id, title, author);

        let row = self.db.get_wishlist_entry(&id)?.ok_or(Error::NotFound)?;
        Ok(convert::wishlist_entry(row))
    }

    /// Entries in the order they were added. Empty when the user has none.
    pub fn list_entries(&self, user_id: Uuid) -> Result<Vec<WishlistEntry>> {
        let rows = self.db.get_wishlist(&user_id.to_string())?;
        Ok(rows.into_iter().map(convert::wishlist_entry).collect())
    }

    /// Remove one entry whose title and author match exactly.
    pub fn remove_entry(&self, user_id: Uuid, title: &str, author: &str) -> Result<bool> {
        let removed = self
            .db
            .delete_wishlist_entry(&user_id.to_string(), title, author)?;
        debug!("User {} remove '{}' by {}: removed={}", user_id, title, author, removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CredentialStore;

    fn setup() -> (Database, Uuid) {
        let db = Database::open_in_memory().unwrap();
        let user = CredentialStore::new(&db).register("ann", "pw1").unwrap();
        (db, user.id)
    }

    fn pairs(entries: &[WishlistEntry]) -> Vec<(&str, &str)> {
        entries.iter().map(|e| (e.title.as_str(), e.author.as_str())).collect()
    }

    #[test]
    fn add_list_remove() {
        let (db, user) = setup();
        let wishlist = WishlistStore::new(&db);

        let entry = wishlist.add_entry(user, "Dune", "Herbert").unwrap();
        assert_eq!(entry.user_id, user);

        let entries = wishlist.list_entries(user).unwrap();
        assert_eq!(pairs(&entries), vec![("Dune", "Herbert")]);

        assert!(wishlist.remove_entry(user, "Dune", "Herbert").unwrap());
        assert!(wishlist.list_entries(user).unwrap().is_empty());
    }

    #[test]
    fn listing_is_adds_minus_matched_removes_in_order() {
        let (db, user) = setup();
        let wishlist = WishlistStore::new(&db);

        for (title, author) in [
            ("Dune", "Herbert"),
            ("Emma", "Austen"),
            ("Dune", "Herbert"),
            ("Ulysses", "Joyce"),
        ] {
            wishlist.add_entry(user, title, author).unwrap();
        }

        assert!(wishlist.remove_entry(user, "Dune", "Herbert").unwrap());
        // Exact match only: neither case nor partial author matches.
        assert!(!wishlist.remove_entry(user, "dune", "Herbert").unwrap());
        assert!(!wishlist.remove_entry(user, "Emma", "Jane Austen").unwrap());

        let entries = wishlist.list_entries(user).unwrap();
        assert_eq!(
            pairs(&entries),
            vec![("Emma", "Austen"), ("Dune", "Herbert"), ("Ulysses", "Joyce")]
        );
    }

    #[test]
    fn wishlists_are_per_user() {
        let (db, ann) = setup();
        let bob = CredentialStore::new(&db).register("bob", "pw2").unwrap().id;
        let wishlist = WishlistStore::new(&db);

        wishlist.add_entry(ann, "Dune", "Herbert").unwrap();

        assert!(wishlist.list_entries(bob).unwrap().is_empty());
        assert!(!wishlist.remove_entry(bob, "Dune", "Herbert").unwrap());
        assert_eq!(wishlist.list_entries(ann).unwrap().len(), 1);
    }

    #[test]
    fn rejects_blank_fields_and_unknown_users() {
        let (db, user) = setup();
        let wishlist = WishlistStore::new(&db);

        assert!(matches!(wishlist.add_entry(user, " ", "Herbert"), Err(Error::Validation(_))));
        assert!(matches!(wishlist.add_entry(user, "Dune", ""), Err(Error::Validation(_))));
        assert!(matches!(
            wishlist.add_entry(Uuid::new_v4(), "Dune", "Herbert"),
            Err(Error::NotFound)
        ));
        assert!(wishlist.list_entries(user).unwrap().is_empty());
    }
}
