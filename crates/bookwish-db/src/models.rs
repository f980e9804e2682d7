/// Database row types. These map directly to SQLite rows and stay
/// independent of the bookwish-types domain models.

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    pub created_at: String,
}

pub struct WishlistRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub author: String,
    pub created_at: String,
}

/// Review joined with its writer's username.
pub struct ReviewRow {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub title: String,
    pub author: String,
    pub body: String,
    pub created_at: String,
}
