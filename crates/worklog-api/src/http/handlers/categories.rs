//! Category listing.

use axum::extract::State;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// GET /api/v1/categories - Categories offered when adding a record.
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<String>>, AppError> {
    let timer = RequestTimer::start();
    let categories = state.dialogue.categories().await?;
    Ok(timer.success(Some(categories)))
}
