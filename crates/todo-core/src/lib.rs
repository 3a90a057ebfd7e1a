pub mod models;

#[cfg(test)]
mod tests;

pub use models::task::Task;
pub use models::task_edit::TaskEdit;
