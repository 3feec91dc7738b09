//! Callback Route
//!
//! The reactive endpoint behind every widget change.
//!
//! - POST /api/v1/callbacks - Dispatch an input-change event

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/v1/callbacks
///
/// Body: `{ "changed": "<input-id>", "inputs": { "site": ..., "payload": [lo, hi] } }`.
///
/// Dispatches the event through the callback registry and returns the
/// recomputed figure for every subscribed output. A selection matching
/// no records still succeeds and carries empty figures; only a
/// malformed body is rejected (400, handled by the Json extractor).
pub async fn dispatch_callback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CallbackRequest>,
) -> ApiResult<Json<CallbackResponse>> {
    let updated = state.registry.dispatch(req.changed, &req.inputs);

    tracing::debug!(
        changed = req.changed.as_str(),
        site = req.inputs.site.wire_value(),
        outputs = updated.len(),
        "Dispatched callback"
    );

    let outputs: BTreeMap<String, _> = updated
        .into_iter()
        .map(|(id, figure)| (id.as_str().to_string(), figure))
        .collect();

    Ok(Json(CallbackResponse { outputs }))
}
