//! Test helpers and fixtures for storage integration tests
//!
//! Test databases are real SQLite files in a temp directory (not in-memory)
//! so migrations, foreign keys, and WAL behave as in production.

use std::sync::Arc;

use sqlx::SqlitePool;
use tempfile::TempDir;
use verse_core::types::{CreatePlaylist, PlaybackMode, Playlist, Track};
use verse_playback::PlaybackManager;
use verse_storage::PlaylistService;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = verse_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        verse_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Build a service plus the playback manager it was constructed with
pub fn test_service(pool: &SqlitePool) -> (PlaylistService, Arc<PlaybackManager>) {
    let playback = Arc::new(PlaybackManager::new());
    let service = PlaylistService::new(pool.clone(), playback.clone());
    (service, playback)
}

/// Detached track value, as a view layer would hand it over
pub fn test_track(id: &str, title: &str) -> Track {
    Track::new(id, title)
}

/// Detached playlist value whose id does not exist in the store
pub fn ghost_playlist(id: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        title: "Ghost".to_string(),
        is_system: false,
        playback_mode: PlaybackMode::Sequential,
        track_count: 0,
        created_at: 0,
        updated_at: 0,
        entries: None,
    }
}

/// Test fixture: create a user playlist
pub async fn create_test_playlist(pool: &SqlitePool, title: &str) -> Playlist {
    verse_storage::playlists::create(pool, CreatePlaylist::new(title))
        .await
        .expect("Failed to create test playlist")
}

/// Test fixture: provision the system "Liked Songs" playlist
pub async fn create_liked_songs(pool: &SqlitePool) -> Playlist {
    verse_storage::playlists::create(pool, CreatePlaylist::liked_songs())
        .await
        .expect("Failed to create system playlist")
}

/// Test fixture: upsert tracks and seed them as a playlist's sequence
pub async fn seed_playlist(pool: &SqlitePool, playlist: &Playlist, tracks: &[Track]) {
    for (position, track) in tracks.iter().enumerate() {
        verse_storage::tracks::upsert(pool, track)
            .await
            .expect("Failed to upsert track");

        sqlx::query(
            "INSERT INTO playlist_tracks (playlist_id, track_id, position, added_at)
             VALUES (?, ?, ?, 0)",
        )
        .bind(&playlist.id)
        .bind(&track.id)
        .bind(position as i64)
        .execute(pool)
        .await
        .expect("Failed to seed membership");
    }

    sqlx::query("UPDATE playlists SET track_count = ? WHERE id = ?")
        .bind(tracks.len() as i64)
        .bind(&playlist.id)
        .execute(pool)
        .await
        .expect("Failed to seed count");
}

/// Ordered track id sequence of a playlist
pub async fn sequence(pool: &SqlitePool, playlist_id: &str) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT track_id FROM playlist_tracks WHERE playlist_id = ? ORDER BY position",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await
    .expect("Failed to read sequence")
}

/// Position values of a playlist's sequence, in order
pub async fn positions(pool: &SqlitePool, playlist_id: &str) -> Vec<i64> {
    sqlx::query_scalar(
        "SELECT position FROM playlist_tracks WHERE playlist_id = ? ORDER BY position",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await
    .expect("Failed to read positions")
}

/// The denormalized track_count column
pub async fn count_field(pool: &SqlitePool, playlist_id: &str) -> i64 {
    sqlx::query_scalar("SELECT track_count FROM playlists WHERE id = ?")
        .bind(playlist_id)
        .fetch_one(pool)
        .await
        .expect("Failed to read track_count")
}

/// Whether a track record exists globally
pub async fn track_exists(pool: &SqlitePool, id: &str) -> bool {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tracks WHERE id = ?")
        .bind(id)
        .fetch_one(pool)
        .await
        .expect("Failed to count tracks");

    count > 0
}
