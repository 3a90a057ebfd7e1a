use sqlx::SqlitePool;

/// Shared state handed to every handler.
///
/// The pool is the only shared resource: handlers borrow a connection
/// per statement (or hold a transaction) and drop releases it on every
/// exit path.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
