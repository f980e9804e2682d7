pub mod auth;
pub mod error;
pub mod middleware;
pub mod reviews;
pub mod routes;
pub mod search;
pub mod wishlist;

pub use auth::{AppState, AppStateInner};
pub use routes::router;
