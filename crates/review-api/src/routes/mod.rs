//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, categories, comments, genres, health, reviews, titles, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(catalogue_routes())
        .merge(review_routes())
}

/// Authentication routes: signup + token handshake
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/token", post(auth::token))
}

/// User routes (self profile + admin administration)
fn user_routes() -> Router<AppState> {
    Router::new()
        // "me" is matched before the :username routes; the username is
        // reserved at signup for exactly this reason
        .route("/users/me", get(users::get_current_user))
        .route("/users/me", patch(users::update_current_user))
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:username", get(users::get_user))
        .route("/users/:username", patch(users::update_user))
        .route("/users/:username", delete(users::delete_user))
}

/// Catalogue routes: categories, genres, titles
fn catalogue_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories", post(categories::create_category))
        .route("/categories/:slug", delete(categories::delete_category))
        .route("/genres", get(genres::list_genres))
        .route("/genres", post(genres::create_genre))
        .route("/genres/:slug", delete(genres::delete_genre))
        .route("/titles", get(titles::list_titles))
        .route("/titles", post(titles::create_title))
        .route("/titles/:title_id", get(titles::get_title))
        .route("/titles/:title_id", patch(titles::update_title))
        .route("/titles/:title_id", delete(titles::delete_title))
}

/// Review and comment routes, nested under titles
fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/titles/:title_id/reviews", get(reviews::list_reviews))
        .route("/titles/:title_id/reviews", post(reviews::create_review))
        .route(
            "/titles/:title_id/reviews/:review_id",
            get(reviews::get_review),
        )
        .route(
            "/titles/:title_id/reviews/:review_id",
            patch(reviews::update_review),
        )
        .route(
            "/titles/:title_id/reviews/:review_id",
            delete(reviews::delete_review),
        )
        .route(
            "/titles/:title_id/reviews/:review_id/comments",
            get(comments::list_comments),
        )
        .route(
            "/titles/:title_id/reviews/:review_id/comments",
            post(comments::create_comment),
        )
        .route(
            "/titles/:title_id/reviews/:review_id/comments/:comment_id",
            get(comments::get_comment),
        )
        .route(
            "/titles/:title_id/reviews/:review_id/comments/:comment_id",
            patch(comments::update_comment),
        )
        .route(
            "/titles/:title_id/reviews/:review_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
}
