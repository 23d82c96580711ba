//! Per-user entry listing and summary.

use axum::extract::{Path, State};
use serde::Serialize;

use worklog_core::dialogue::summary::render_summary;
use worklog_types::entry::{LogEntry, UserId};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/users/{id}/entries - The user's entries in insertion order.
pub async fn list_entries(
    State(state): State<AppState>,
    Path(user): Path<i64>,
) -> Result<ApiResponse<Vec<LogEntry>>, AppError> {
    let timer = RequestTimer::start();
    let entries = state.dialogue.entries(UserId(user)).await?;
    Ok(timer.success(Some(entries)))
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub count: usize,
    /// Numbered entries separated by blank lines; empty when there are none.
    pub text: String,
}

/// GET /api/v1/users/{id}/summary - The rendered summary.
pub async fn get_summary(
    State(state): State<AppState>,
    Path(user): Path<i64>,
) -> Result<ApiResponse<Summary>, AppError> {
    let timer = RequestTimer::start();
    let entries = state.dialogue.entries(UserId(user)).await?;
    Ok(timer.success(Some(Summary {
        count: entries.len(),
        text: render_summary(&entries),
    })))
}
