pub mod api;
pub mod models;

pub use models::{Book, Review, SearchField, User, WishlistEntry};
