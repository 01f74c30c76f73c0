use sea_orm::{Database, DatabaseConnection};

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Unified database connector for the configured profile.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    // Build database URL from environment variables
    let database_url = db_url(profile)?;

    // Connect to database
    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}
