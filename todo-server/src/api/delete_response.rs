use serde::Serialize;

/// Confirmation body returned after a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: i64,
}
