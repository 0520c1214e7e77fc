use crate::db::notestore::NoteStore;
use crate::handlers::{diagnostics, health_check, note_delete, ready_check};
use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(store: Arc<dyn NoteStore>) -> Router {
    Router::<Arc<dyn NoteStore>>::new()
        .route("/v1/health", get(health_check))
        .route("/v1/ready", get(ready_check))
        .route("/v1/diagnostics", get(diagnostics))
        .route("/v1/notes/:id", delete(note_delete))
        .with_state(store)
}
