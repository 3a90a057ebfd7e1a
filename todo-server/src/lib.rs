pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    tasks::{
        create_task_request::CreateTaskRequest,
        edit_task_request::EditTaskRequest,
        tasks::{create_task, delete_task, get_task, list_tasks, patch_task},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
