use todo_core::TaskEdit;

use serde::Deserialize;

/// Request body for partially updating a task.
///
/// Every field is optional; absent fields are left unchanged. A JSON
/// `null` deserializes to `None` and is indistinguishable from an
/// absent key, so `null` cannot be used to clear a text field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl From<EditTaskRequest> for TaskEdit {
    fn from(req: EditTaskRequest) -> Self {
        TaskEdit {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}
