use crate::{
    db::notestore::{NoteKey, NoteStore, StoreError},
    models::DeleteNoteResponse,
    respond,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Partition value shared by all note keys
///
/// Placeholder for a caller-identity step that was never implemented
/// upstream; there is no multi-user isolation behind it.
pub const DEFAULT_USER_ID: &str = "123";

/// Delete a note by id
pub async fn note_delete(
    State(store): State<Arc<dyn NoteStore>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    respond::envelope(delete_note, store, id).await
}

/// Build the note key and issue a single delete against the store
async fn delete_note(
    store: Arc<dyn NoteStore>,
    id: String,
) -> Result<DeleteNoteResponse, StoreError> {
    let key = NoteKey {
        user_id: DEFAULT_USER_ID.to_string(),
        note_id: id,
    };

    store.delete_note(&key).await?;
    info!("Note '{}' deleted", key.note_id);

    Ok(DeleteNoteResponse { status: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::notestore::test_support::MockStore;

    #[tokio::test]
    async fn issues_exactly_one_delete_with_composite_key() {
        let mock = Arc::new(MockStore::ok());
        let store: Arc<dyn NoteStore> = mock.clone();

        let (status, Json(body)) =
            note_delete(State(store), Path("note-42".to_string())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_string(&body).unwrap(), "{\"status\":true}");

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            NoteKey {
                user_id: "123".to_string(),
                note_id: "note-42".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_500_envelope() {
        let mock = Arc::new(MockStore::failing("boom"));
        let store: Arc<dyn NoteStore> = mock.clone();

        let (status, Json(body)) = note_delete(State(store), Path("note-42".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(serde_json::to_string(&body).unwrap(), "{\"error\":\"boom\"}");
        assert_eq!(mock.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleting_the_same_note_twice_succeeds_both_times() {
        let mock = Arc::new(MockStore::ok());
        let store: Arc<dyn NoteStore> = mock.clone();

        for _ in 0..2 {
            let (status, _) =
                note_delete(State(store.clone()), Path("note-42".to_string())).await;
            assert_eq!(status, StatusCode::OK);
        }

        assert_eq!(mock.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn path_parameter_is_used_verbatim() {
        let mock = Arc::new(MockStore::ok());
        let store: Arc<dyn NoteStore> = mock.clone();

        let (_, _) = note_delete(State(store), Path("a b/c%20".to_string())).await;

        let calls = mock.calls.lock().unwrap();
        assert_eq!(calls[0].note_id, "a b/c%20");
    }
}
