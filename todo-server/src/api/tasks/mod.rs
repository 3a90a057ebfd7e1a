pub mod create_task_request;
pub mod edit_task_request;
pub mod tasks;
