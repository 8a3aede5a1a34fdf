//! Database handle and schema management.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Shared handle over the SQLite connection pool.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

/// Snapshot of the schema relative to the defined migrations.
pub struct MigrationReport {
    pub applied: Vec<String>,
    pub pending: Vec<String>,
}

impl Database {
    /// Open the database and bring the schema up to date.
    ///
    /// # Panics
    /// Panics when the database cannot be opened or a migration fails;
    /// the server has nothing to serve without its store.
    pub async fn connect(config: &Config) -> Self {
        let connection = SeaDatabase::connect(&config.database_url)
            .await
            .expect("failed to open the database");

        if let Err(err) = Migrator::up(&connection, None).await {
            tracing::error!("Migration failed: {}", err);
            panic!("failed to apply migrations: {}", err);
        }

        tracing::info!("Database ready, schema up to date");

        Self { connection }
    }

    /// Open the database without touching the schema. The migrate
    /// command uses this so each action is explicit.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Wrap an already established connection (tests build these over
    /// `sqlite::memory:`).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Clone of the pooled connection for repository construction.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply all pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Undo the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Compare the defined migrations against the `seaql_migrations`
    /// bookkeeping table.
    pub async fn migration_status(&self) -> Result<MigrationReport, DbErr> {
        use sea_orm::EntityTrait;
        use sea_orm_migration::seaql_migrations;

        let recorded: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        let mut report = MigrationReport {
            applied: Vec::new(),
            pending: Vec::new(),
        };
        for migration in Migrator::migrations() {
            let name = migration.name().to_string();
            if recorded.contains(&name) {
                report.applied.push(name);
            } else {
                report.pending.push(name);
            }
        }

        Ok(report)
    }

    /// Drop everything and reapply the schema from scratch.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Round-trip a query to confirm the store is reachable.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
