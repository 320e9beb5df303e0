use super::{
    handlers::{comments, health, likes, posts},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Posts
        .route("/api/v1/posts", get(posts::list_posts))
        .route("/api/v1/posts/{id}", get(posts::get_post))
        .route("/api/v1/posts/{id}/related", get(posts::related_posts))
        // Likes
        .route("/api/v1/posts/{id}/likes", get(likes::get_likes))
        .route("/api/v1/posts/{id}/likes/toggle", post(likes::toggle_like))
        // Comments
        .route(
            "/api/v1/posts/{id}/comments",
            get(comments::get_comments).post(comments::add_comment),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
