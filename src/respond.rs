use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Display;
use std::future::Future;
use tracing::error;

/// Wrap an asynchronous unit of work into a uniform response envelope
///
/// The work is invoked exactly once with the two context values. An `Ok`
/// result becomes a `200` whose body is the serialized result; any error
/// becomes a `500` with `{"error": <message>}`. Every path terminates in a
/// well-formed envelope.
pub async fn envelope<Ev, Cx, T, E, F, Fut>(work: F, event: Ev, ctx: Cx) -> (StatusCode, Json<Value>)
where
    F: FnOnce(Ev, Cx) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    T: Serialize,
    E: Display,
{
    match work(event, ctx).await {
        Ok(body) => match serde_json::to_value(body) {
            Ok(value) => (StatusCode::OK, Json(value)),
            Err(e) => {
                error!("Failed to serialize response body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": e.to_string() })),
                )
            }
        },
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        ),
    }
}
