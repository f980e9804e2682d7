use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{self, AppState};
use crate::middleware::require_auth;
use crate::{reviews, search, wishlist};

/// All bookwish routes. Transport layers (CORS, tracing) are added by the binary.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route(
            "/wishlist",
            get(wishlist::list_entries)
                .post(wishlist::add_entry)
                .delete(wishlist::remove_entry),
        )
        .route("/reviews", get(reviews::list_reviews).post(reviews::add_review))
        .route("/books/search", get(search::search_books))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    Router::new().merge(public_routes).merge(protected_routes)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use bookwish_core::{BookLookup, Database};

    use super::*;
    use crate::auth::AppStateInner;

    fn test_app() -> Router {
        let state = Arc::new(AppStateInner {
            db: Database::open_in_memory().unwrap(),
            lookup: BookLookup::new("http://127.0.0.1:9", std::time::Duration::from_secs(1)).unwrap(),
            jwt_secret: "test-secret".into(),
        });
        router(state)
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn register(app: &Router, username: &str, password: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/auth/register",
            None,
            Some(json!({ "username": username, "password": password })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn register_conflict_and_login() {
        let app = test_app();
        register(&app, "ann", "pw1").await;

        let (status, body) = send(
            &app,
            "POST",
            "/auth/register",
            None,
            Some(json!({ "username": "ann", "password": "other" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].is_string());

        let (status, body) = send(
            &app,
            "POST",
            "/auth/login",
            None,
            Some(json!({ "username": "ann", "password": "pw1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "ann");

        let (status, _) = send(
            &app,
            "POST",
            "/auth/login",
            None,
            Some(json!({ "username": "ann", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn blank_registration_is_bad_request() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/auth/register",
            None,
            Some(json!({ "username": "ann", "password": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "password is required");
    }

    #[tokio::test]
    async fn protected_routes_need_a_valid_token() {
        let app = test_app();
        let (status, _) = send(&app, "GET", "/wishlist", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "GET", "/wishlist", Some("not-a-jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wishlist_round_trip() {
        let app = test_app();
        let token = register(&app, "ann", "pw1").await;
        let dune = json!({ "title": "Dune", "author": "Herbert" });

        let (status, body) = send(&app, "POST", "/wishlist", Some(&token), Some(dune.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["title"], "Dune");

        let (_, body) = send(&app, "GET", "/wishlist", Some(&token), None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["author"], "Herbert");

        let (status, body) = send(&app, "DELETE", "/wishlist", Some(&token), Some(dune.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["removed"], true);

        let (_, body) = send(&app, "DELETE", "/wishlist", Some(&token), Some(dune)).await;
        assert_eq!(body["removed"], false);

        let (_, body) = send(&app, "GET", "/wishlist", Some(&token), None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn reviews_are_shared_between_users() {
        let app = test_app();
        let ann = register(&app, "ann", "pw1").await;
        let bob = register(&app, "bob", "pw2").await;

        let (status, _) = send(
            &app,
            "POST",
            "/reviews",
            Some(&ann),
            Some(json!({ "title": "Dune", "author": "Herbert", "body": "Great" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "GET", "/reviews?title=Dune&author=Herbert", Some(&bob), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["username"], "ann");
        assert_eq!(body[0]["body"], "Great");

        let (_, body) = send(&app, "GET", "/reviews?title=Dune&author=Asimov", Some(&bob), None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn search_degrades_to_empty_list() {
        let app = test_app();
        let token = register(&app, "ann", "pw1").await;

        let (status, body) = send(&app, "GET", "/books/search?q=dune&by=author", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
