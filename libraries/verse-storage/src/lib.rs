//! Verse Player Storage
//!
//! `SQLite` persistence layer for the playlist store, plus the playlist
//! mutation core built on top of it.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `playlists` and `tracks` modules own their
//!   own queries; [`PlaylistService`] owns the transactional mutations
//! - **Explicit handles**: the service is constructed from a pool and a
//!   playback coordinator, with no ambient global state
//! - **Live resolution**: every mutation re-resolves its possibly-stale
//!   inputs by primary key before acting
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use verse_playback::PlaybackManager;
//! use verse_storage::{create_pool, run_migrations, PlaylistService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://verse.db").await?;
//! run_migrations(&pool).await?;
//!
//! let playback = Arc::new(PlaybackManager::new());
//! let service = PlaylistService::new(pool, playback);
//! # let _ = service;
//! # Ok(())
//! # }
//! ```

// Vertical slices
pub mod playlists;
pub mod tracks;

mod facade;
mod order;
mod service;

pub use facade::PlaylistFacade;
pub use service::PlaylistService;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://verse.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "creating sqlite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        // The schema relies on ON DELETE CASCADE for membership rows
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
