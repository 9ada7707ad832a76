use axum::http::StatusCode;
use axum::response::Response;

use crate::auth::BasicAuthUser;
use crate::view::{self, Page};

// ── GET / ────────────────────────────────────────────────────────────────────

/// Landing page. The only route behind basic auth.
pub async fn index(user: BasicAuthUser) -> Response {
    tracing::debug!(username = %user.username, "index access granted");
    view::render(Page::Index, StatusCode::OK, None)
}
