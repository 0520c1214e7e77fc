use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response returned after deleting a note
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub status: bool,
}
