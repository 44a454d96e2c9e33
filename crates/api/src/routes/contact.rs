//! Route definitions for the contact form.
//!
//! Mounted at `/contact` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Contact routes.
///
/// ```text
/// POST   /                  -> submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(contact::submit_contact))
}
