use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// The database handle is opened once at process start and injected into
/// every handler via `web::Data`; nothing reads it from ambient globals.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Create a new AppState with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// Create a new AppState without a database connection (for testing)
    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    /// Borrow the database connection, if configured
    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
