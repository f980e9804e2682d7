//! Command layer for bookwish.
//!
//! Each store borrows a [`Database`] for the duration of one call and returns
//! plain domain values, so any front-end (HTTP, console, tests) can drive it.

mod convert;
pub mod credentials;
pub mod error;
pub mod lookup;
pub mod reviews;
pub mod validate;
pub mod wishlist;

pub use bookwish_db::Database;
pub use credentials::CredentialStore;
pub use error::{Error, Result};
pub use lookup::BookLookup;
pub use reviews::ReviewStore;
pub use wishlist::WishlistStore;
