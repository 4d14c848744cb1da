//! Queue API handlers.
//!
//! Raw input is validated here, before anything reaches the engine:
//! unknown category segments are 404, non-numeric counter indices are
//! rejected by the path extractor, empty names never become tickets.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use loket_core::{
    Admission, Category, Completion, DispatchEvent, EngineError, QueueStatus, QueueSummary,
};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for drawing a ticket
#[derive(Debug, Deserialize)]
pub struct AdmitBody {
    /// Customer name as given at the entrance kiosk
    pub name: String,
}

/// Response for dispatch operations
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    /// Tickets called to a counter, in call order
    pub calls: Vec<DispatchEvent>,
}

/// Response for listing all queues
#[derive(Debug, Serialize)]
pub struct ListQueuesResponse {
    pub queues: Vec<QueueSummary>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct QueueErrorResponse {
    pub error: String,
}

type ErrorReply = (StatusCode, Json<QueueErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(QueueErrorResponse {
            error: message.into(),
        }),
    )
}

fn parse_category(raw: &str) -> Result<Category, ErrorReply> {
    raw.parse::<Category>()
        .map_err(|e| error_reply(StatusCode::NOT_FOUND, e.to_string()))
}

fn engine_error_reply(error: EngineError) -> ErrorReply {
    let status = match error {
        EngineError::InvalidCounterIndex { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        // Internal consistency faults; should not happen under correct
        // dispatcher usage.
        EngineError::CounterOccupied { .. } | EngineError::DuplicateTicket(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_reply(status, error.to_string())
}

// ============================================================================
// Handlers
// ============================================================================

/// List every queue with headline numbers
pub async fn list_queues(State(state): State<Arc<AppState>>) -> Json<ListQueuesResponse> {
    Json(ListQueuesResponse {
        queues: state.hall().summaries().await,
    })
}

/// Draw a ticket for a walk-in customer
pub async fn admit(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Json(body): Json<AdmitBody>,
) -> Result<(StatusCode, Json<Admission>), ErrorReply> {
    let category = parse_category(&category)?;

    let name = body.name.trim();
    if name.is_empty() {
        return Err(error_reply(
            StatusCode::UNPROCESSABLE_ENTITY,
            "name cannot be empty",
        ));
    }

    match state.hall().admit(category, name).await {
        Ok(admission) => Ok((StatusCode::CREATED, Json(admission))),
        Err(e) => Err(engine_error_reply(e)),
    }
}

/// Call waiting tickets to idle counters
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<DispatchResponse>, ErrorReply> {
    let category = parse_category(&category)?;

    match state.hall().dispatch(category).await {
        Ok(calls) => Ok(Json(DispatchResponse { calls })),
        Err(e) => Err(engine_error_reply(e)),
    }
}

/// Finish service at a counter
pub async fn complete(
    State(state): State<Arc<AppState>>,
    Path((category, counter)): Path<(String, usize)>,
) -> Result<Json<Completion>, ErrorReply> {
    let category = parse_category(&category)?;

    match state.hall().complete(category, counter).await {
        Ok(completion) => Ok(Json(completion)),
        Err(e) => Err(engine_error_reply(e)),
    }
}

/// Full status of one queue: counters and waiting tickets
pub async fn status(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Result<Json<QueueStatus>, ErrorReply> {
    let category = parse_category(&category)?;
    Ok(Json(state.hall().status(category).await))
}
