//! Shared fixtures for integration tests.

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use fruitstore::db::{DbPool, establish_connection_pool};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// A throwaway SQLite database with the full schema applied.
///
/// The backing temp file is deleted when the fixture drops.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("temp file for test database");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("pool over the temp database");
        let mut conn = pool.get().expect("connection from the fresh pool");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("schema migrations");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}
