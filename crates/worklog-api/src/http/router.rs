//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`, plus `/health`.
//! Middleware: CORS, tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/users/{id}/events", post(handlers::events::post_event))
        .route("/users/{id}/entries", get(handlers::entries::list_entries))
        .route("/users/{id}/summary", get(handlers::entries::get_summary))
        .route("/categories", get(handlers::categories::list_categories));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    async fn app() -> (Router, TempDir) {
        let tmp = TempDir::new().unwrap();
        let state = AppState::with_data_dir(tmp.path(), false).await.unwrap();
        (build_router(state), tmp)
    }

    async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn event(router: &Router, user: i64, body: Value) -> Value {
        let (status, json) = call(router, "POST", &format!("/api/v1/users/{user}/events"), Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        json
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _tmp) = app().await;
        let (status, json) = call(&router, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_full_dialogue_over_http() {
        let (router, _tmp) = app().await;

        let start = event(&router, 7, json!({"type": "start"})).await;
        assert_eq!(start["data"]["text"], "Привет! Выбери действие:");
        assert_eq!(start["data"]["keyboard"]["rows"][0][0]["label"], "➕ Добавить");

        event(&router, 7, json!({"type": "callback", "data": "add"})).await;
        event(&router, 7, json!({"type": "callback", "data": "work_dismantle"})).await;
        event(&router, 7, json!({"type": "callback", "data": "category_Облако"})).await;
        event(&router, 7, json!({"type": "text", "text": "5"})).await;
        let done = event(&router, 7, json!({"type": "text", "text": "https://t.me/x"})).await;
        assert_eq!(done["data"]["text"], "Демонтаж 5 Облаков - https://t.me/x");

        let (_, entries) = call(&router, "GET", "/api/v1/users/7/entries", None).await;
        assert_eq!(entries["data"][0]["text"], "Демонтаж 5 Облаков");
        assert_eq!(entries["data"][0]["link"], "https://t.me/x");

        let (_, summary) = call(&router, "GET", "/api/v1/users/7/summary", None).await;
        assert_eq!(summary["data"]["count"], 1);
        assert_eq!(summary["data"]["text"], "1) Демонтаж 5 Облаков - https://t.me/x");
    }

    #[tokio::test]
    async fn test_inapplicable_event_returns_null_data() {
        let (router, _tmp) = app().await;
        let json = event(&router, 1, json!({"type": "text", "text": "hello"})).await;
        assert!(json["data"].is_null());
        assert_eq!(json["errors"], json!([]));
    }

    #[tokio::test]
    async fn test_unknown_callback_is_bad_request() {
        let (router, _tmp) = app().await;
        let (status, json) = call(
            &router,
            "POST",
            "/api/v1/users/1/events",
            Some(json!({"type": "callback", "data": "nope"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_categories_default_list() {
        let (router, _tmp) = app().await;
        let (status, json) = call(&router, "GET", "/api/v1/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"],
            json!(["Сервер", "Кроссировка", "Облако", "Конструктив"])
        );
    }
}
