//! Dialogue event handler: the REST counterpart of sending a message or
//! pressing a button.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use worklog_types::entry::UserId;
use worklog_types::event::{Callback, Event};
use worklog_types::reply::Reply;

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Request body for `POST /api/v1/users/{id}/events`.
///
/// ```json
/// {"type": "start"}
/// {"type": "callback", "data": "work_montage"}
/// {"type": "text", "text": "3"}
/// ```
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRequest {
    Start,
    /// `data` uses the button callback wire format.
    Callback { data: String },
    Text { text: String },
}

impl TryFrom<EventRequest> for Event {
    type Error = AppError;

    fn try_from(request: EventRequest) -> Result<Self, Self::Error> {
        match request {
            EventRequest::Start => Ok(Event::Start),
            EventRequest::Callback { data } => data
                .parse::<Callback>()
                .map(Event::Callback)
                .map_err(AppError::Validation),
            EventRequest::Text { text } => Ok(Event::Text(text)),
        }
    }
}

/// POST /api/v1/users/{id}/events - Apply one event to the user's dialogue.
///
/// `data` is the reply, or `null` when the event does not apply to the
/// current stage.
pub async fn post_event(
    State(state): State<AppState>,
    Path(user): Path<i64>,
    Json(body): Json<EventRequest>,
) -> Result<ApiResponse<Reply>, AppError> {
    let timer = RequestTimer::start();
    let user = UserId(user);
    let event = Event::try_from(body)?;

    tracing::debug!(%user, ?event, "api event");
    let reply = state.dialogue.handle(user, event).await?;

    Ok(timer.success(reply))
}
