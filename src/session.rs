// src/session.rs

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Cookie carrying the opaque per-visitor key.
pub const SESSION_COOKIE: &str = "calc_session";

/// Generates a new random session ID (UUID v4)
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Extract the session ID from the request's `Cookie` header, if present.
pub fn session_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Resolve the caller's session ID, minting a fresh one when the cookie is
/// missing or empty.
pub fn resolve_session(headers: &HeaderMap) -> String {
    session_from_headers(headers).unwrap_or_else(generate_session_id)
}

/// `Set-Cookie` value that pins the session ID for subsequent requests.
pub fn set_cookie_value(session_id: &str) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}
