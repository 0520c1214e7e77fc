use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Error as SqlxError;
use std::time::Duration;
use tracing::{error, info};

use crate::db::util::quote_ident;

/// Key identifying a single note record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteKey {
    pub user_id: String,
    pub note_id: String,
}

/// Error surfaced by the note store
#[derive(Debug)]
pub enum StoreError {
    Sqlx(SqlxError),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Sqlx(e) => write!(f, "{}", e),
            StoreError::Unavailable(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Sqlx(e) => Some(e),
            StoreError::Unavailable(_) => None,
        }
    }
}

impl From<SqlxError> for StoreError {
    fn from(e: SqlxError) -> Self {
        StoreError::Sqlx(e)
    }
}

/// Store abstraction for note records
///
/// Object-safe so handlers can hold an `Arc<dyn NoteStore>` regardless of the
/// backing implementation.
pub trait NoteStore: Send + Sync {
    /// Delete the record identified by `key`
    ///
    /// Deleting an absent key is a success.
    fn delete_note<'a>(&'a self, key: &'a NoteKey) -> BoxFuture<'a, Result<(), StoreError>>;
}

/// Postgres-backed note store
pub struct PgNoteStore {
    pool: PgPool,
    table: String,
}

impl PgNoteStore {
    /// Create a new store with its own connection pool
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    /// * `table` - Name of the table holding the note records
    ///
    /// # Returns
    /// * `Result<Self, SqlxError>` - Store with connection pool or error
    pub async fn new(database_url: &str, table: &str) -> Result<Self, SqlxError> {
        info!("Connecting to database...");

        let pool = PgPoolOptions::new()
            .max_connections(20)
            .min_connections(2) // Keep some connections alive
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // Close idle connections after 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // Recycle connections after 30 minutes
            .connect(database_url)
            .await?;

        info!("Database connection pool created successfully");

        Ok(Self {
            pool,
            table: table.to_string(),
        })
    }
}

impl NoteStore for PgNoteStore {
    fn delete_note<'a>(&'a self, key: &'a NoteKey) -> BoxFuture<'a, Result<(), StoreError>> {
        async move {
            // Log pool stats before acquiring connection
            let pool_idle = self.pool.num_idle() as u32;
            let pool_size = self.pool.size();
            info!(
                "Deleting note {} for user {}. Pool connections: {} idle, {} in use",
                key.note_id,
                key.user_id,
                pool_idle,
                pool_size.saturating_sub(pool_idle)
            );

            let query_sql = format!(
                "DELETE FROM {} WHERE user_id = $1 AND note_id = $2",
                quote_ident(&self.table)
            );

            let result = match sqlx::query(&query_sql)
                .bind(&key.user_id)
                .bind(&key.note_id)
                .execute(&self.pool)
                .await
            {
                Ok(result) => result,
                Err(e) => {
                    error!("Failed to delete note '{}': {}", key.note_id, e);
                    return Err(StoreError::Sqlx(e));
                }
            };

            // Zero affected rows is still a success
            info!(
                "Delete of note '{}' affected {} row(s)",
                key.note_id,
                result.rows_affected()
            );
            Ok(())
        }
        .boxed()
    }
}

/// Store used when no database URL is configured
///
/// Keeps the service up so health and diagnostics stay reachable; every
/// delete fails with a descriptive message.
pub struct UnconfiguredStore;

impl NoteStore for UnconfiguredStore {
    fn delete_note<'a>(&'a self, _key: &'a NoteKey) -> BoxFuture<'a, Result<(), StoreError>> {
        async move {
            error!("Note store not initialized");
            Err(StoreError::Unavailable("store not initialized".to_string()))
        }
        .boxed()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Records every delete call; fails each call when a message is set
    pub struct MockStore {
        pub calls: Mutex<Vec<NoteKey>>,
        pub fail_with: Option<String>,
    }

    impl MockStore {
        pub fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        pub fn failing(msg: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(msg.to_string()),
            }
        }
    }

    impl NoteStore for MockStore {
        fn delete_note<'a>(&'a self, key: &'a NoteKey) -> BoxFuture<'a, Result<(), StoreError>> {
            async move {
                self.calls.lock().unwrap().push(key.clone());
                match &self.fail_with {
                    Some(msg) => Err(StoreError::Unavailable(msg.clone())),
                    None => Ok(()),
                }
            }
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_displays_bare_message() {
        let e = StoreError::Unavailable("boom".to_string());
        assert_eq!(e.to_string(), "boom");
    }

    #[tokio::test]
    async fn unconfigured_store_always_fails() {
        let store = UnconfiguredStore;
        let key = NoteKey {
            user_id: "123".to_string(),
            note_id: "abc".to_string(),
        };
        let err = store.delete_note(&key).await.unwrap_err();
        assert_eq!(err.to_string(), "store not initialized");
    }
}
