//! SQLite connection plumbing shared by the repository layer.

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

/// Connection pool handed to [`crate::repository::DieselRepository`].
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single connection checked out of a [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Build an r2d2 pool for the SQLite database at `database_url`.
///
/// The pool is owned by the caller; this crate only draws connections from
/// it and never closes it.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder().build(manager)
}
