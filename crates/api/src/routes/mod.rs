pub mod contact;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /contact                                         submit (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/contact", contact::router())
}
