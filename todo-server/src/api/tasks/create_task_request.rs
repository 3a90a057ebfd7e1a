use serde::Deserialize;

/// Request body for creating a task.
///
/// Unknown keys (including a client-supplied `id`) are ignored; the
/// storage engine assigns the id.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}
