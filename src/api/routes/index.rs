//! Index Route
//!
//! Serves the dashboard page itself.
//!
//! - GET / - The single dashboard HTML page

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;

/// GET /
///
/// The dashboard page, rendered once at startup from the layout model.
/// Widget changes go through `/api/v1/callbacks`; the page itself is
/// never re-rendered server-side.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page_html.as_ref().clone())
}
