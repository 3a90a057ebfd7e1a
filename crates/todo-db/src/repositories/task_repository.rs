use crate::error::Result as DbErrorResult;

use todo_core::Task;

/// Row shape for the `tasks` table. SQLite stores `completed` as an
/// INTEGER; sqlx decodes it into a bool.
#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    description: String,
    completed: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
        }
    }
}

pub struct TaskRepository;

impl TaskRepository {
    /// Insert a new task and return it with the storage-assigned id.
    pub async fn create<'e, E>(
        executor: E,
        title: &str,
        description: &str,
        completed: bool,
    ) -> DbErrorResult<Task>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
                INSERT INTO tasks (title, description, completed)
                VALUES (?, ?, ?)
                RETURNING id, title, description, completed
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(completed)
        .fetch_one(executor)
        .await?;

        Ok(row.into())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, title, description, completed
                FROM tasks
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(Task::from))
    }

    /// Every stored task, ascending id for a deterministic order.
    pub async fn find_all<'e, E>(executor: E) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
                SELECT id, title, description, completed
                FROM tasks
                ORDER BY id
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Overwrite every business field of an existing row.
    pub async fn update<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE tasks
                SET title = ?, description = ?, completed = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Remove a row permanently. Returns false when no row had that id.
    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
