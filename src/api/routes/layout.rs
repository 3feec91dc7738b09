//! Layout Route
//!
//! Read-only view of the page layout model.
//!
//! - GET /api/v1/layout - Dropdown options, slider config, chart regions

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::Layout;

/// GET /api/v1/layout
///
/// The layout model as JSON, as built from the dataset at startup.
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.layout.as_ref().clone())
}
