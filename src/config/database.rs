use migration::{CatalogMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::internal::DatabaseError;
use crate::errors::InternalError;

/// Connect to the catalog database
///
/// Does NOT run migrations - call `migrate_database()` separately.
pub async fn connect_database(settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to catalog database: {}", database_url);

    Ok(db)
}

/// Run all pending catalog migrations on the given connection
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    CatalogMigrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Catalog database migrations completed");

    Ok(())
}
