// src/api/http/calculate.rs

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    api::error::{ApiResult, IntoApiError},
    calculator::CalculationRequest,
    config::CONFIG,
    history::HistoryEntry,
    session,
    state::AppState,
};

use super::pages;

type SessionCookie = AppendHeaders<[(header::HeaderName, String); 1]>;

fn session_cookie(session_id: &str) -> SessionCookie {
    AppendHeaders([(header::SET_COOKIE, session::set_cookie_value(session_id))])
}

/// GET / — the calculator form, with the session's recent history.
pub async fn index(State(app): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let session_id = session::resolve_session(&headers);
    let history = load_recent(&app, &session_id, CONFIG.history_default_limit).await;
    (session_cookie(&session_id), Html(pages::form_page(&history)))
}

/// POST /calculate — URL-encoded form submission, HTML response.
///
/// Always 200: evaluation failures render as an inline error message with a
/// "Try again" link, matching what the form flow expects.
pub async fn calculate_form(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(req): Form<CalculationRequest>,
) -> impl IntoResponse {
    let session_id = session::resolve_session(&headers);
    let body = match req.evaluate() {
        Ok(value) => {
            info!(%session_id, num1 = %req.num1, op = %req.op, num2 = %req.num2, result = value, "calculated");
            record_calculation(&app, &session_id, &req, value).await;
            pages::result_page(value)
        }
        Err(e) => pages::error_page(&e.to_string()),
    };
    (session_cookie(&session_id), Html(body))
}

/// POST /api/calculate — JSON body in, JSON outcome out.
/// 200 on success, 400 for any evaluation failure.
pub async fn calculate_json(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CalculationRequest>,
) -> impl IntoResponse {
    let session_id = session::resolve_session(&headers);
    match req.evaluate() {
        Ok(value) => {
            info!(%session_id, num1 = %req.num1, op = %req.op, num2 = %req.num2, result = value, "calculated");
            record_calculation(&app, &session_id, &req, value).await;
            (
                StatusCode::OK,
                session_cookie(&session_id),
                Json(json!({ "success": true, "result": value })),
            )
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            session_cookie(&session_id),
            Json(json!({ "success": false, "error": e.to_string() })),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

/// GET /api/history?limit=N — most recent calculations for this session,
/// newest first. Empty when the app runs stateless.
pub async fn history(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<HistoryParams>,
) -> ApiResult<impl IntoResponse> {
    let session_id = session::resolve_session(&headers);
    let limit = params
        .limit
        .unwrap_or(CONFIG.history_default_limit)
        .clamp(1, CONFIG.history_max_limit);

    let entries = match &app.history {
        Some(store) => store
            .recent(&session_id, limit)
            .await
            .into_api_error("Failed to load history")?,
        None => Vec::new(),
    };

    let entries: Vec<_> = entries
        .iter()
        .map(|e| {
            json!({
                "expression": e.expression,
                "result": e.result,
                "ts": e.ts,
                "time": e.timestamp().map(|t| t.to_rfc3339()),
            })
        })
        .collect();

    Ok((
        session_cookie(&session_id),
        Json(json!({ "session_id": session_id, "entries": entries })),
    ))
}

/// POST /api/history/clear — drop this session's history.
pub async fn clear_history(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let session_id = session::resolve_session(&headers);
    if let Some(store) = &app.history {
        store
            .clear(&session_id)
            .await
            .into_api_error("Failed to clear history")?;
        info!(%session_id, "history cleared");
    }
    Ok((session_cookie(&session_id), Json(json!({ "ok": true }))))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}

async fn load_recent(app: &AppState, session_id: &str, limit: i64) -> Vec<HistoryEntry> {
    match &app.history {
        Some(store) => match store.recent(session_id, limit).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to load history: {e:#}");
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

/// History writes are best-effort: a store fault is logged and the request
/// still succeeds.
async fn record_calculation(app: &AppState, session_id: &str, req: &CalculationRequest, value: f64) {
    let Some(store) = &app.history else { return };
    let expression = format!("{} {} {}", req.num1.trim(), req.op, req.num2.trim());
    if let Err(e) = store.record(session_id, &expression, &value.to_string()).await {
        warn!("Failed to record calculation: {e:#}");
    }
}
