use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;
use verse_core::error::Result;
use verse_core::types::{
    CreatePlaylist, PlaybackMode, Playlist, PlaylistEntry, LIKED_SONGS_TITLE,
};
use verse_core::VerseError;

pub(crate) fn playlist_from_row(row: &SqliteRow) -> Playlist {
    let mode: String = row.get("playback_mode");

    Playlist {
        id: row.get("id"),
        title: row.get("title"),
        is_system: row.get::<i64, _>("is_system") != 0,
        playback_mode: PlaybackMode::from_str(&mode).unwrap_or(PlaybackMode::Sequential),
        track_count: row.get("track_count"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        entries: None,
    }
}

/// Get all playlists, system playlist first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, is_system, playback_mode, track_count, created_at, updated_at
        FROM playlists
        ORDER BY is_system DESC, updated_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(playlist_from_row).collect())
}

/// Get playlist by ID
///
/// This is the live-resolution primitive: callers holding a detached
/// playlist value re-fetch it here before mutating.
pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, title, is_system, playback_mode, track_count, created_at, updated_at
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| playlist_from_row(&row)))
}

/// Get playlist with its ordered track sequence
pub async fn get_with_entries(pool: &SqlitePool, id: &str) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    let rows = sqlx::query(
        r#"
        SELECT track_id, position, added_at
        FROM playlist_tracks
        WHERE playlist_id = ?
        ORDER BY position
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let entries = rows
        .into_iter()
        .map(|row| PlaylistEntry {
            track_id: row.get("track_id"),
            position: row.get("position"),
            added_at: row.get("added_at"),
        })
        .collect();

    playlist.entries = Some(entries);

    Ok(Some(playlist))
}

/// Create a new playlist
///
/// Mints a UUID id; `is_system` provisions the singleton "Liked Songs"
/// playlist, which the mutation service locates by predicate.
pub async fn create(pool: &SqlitePool, playlist: CreatePlaylist) -> Result<Playlist> {
    let id = Uuid::new_v4().to_string();
    let now = chrono::Utc::now().timestamp();
    let is_system = i64::from(playlist.is_system);

    sqlx::query(
        r#"
        INSERT INTO playlists (id, title, is_system, playback_mode, track_count, created_at, updated_at)
        VALUES (?, ?, ?, ?, 0, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&playlist.title)
    .bind(is_system)
    .bind(playlist.playback_mode.as_str())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_by_id(pool, &id)
        .await?
        .ok_or_else(|| VerseError::not_found("playlist", id))
}

/// Locate the singleton system playlist
pub async fn find_liked_songs(pool: &SqlitePool) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, title, is_system, playback_mode, track_count, created_at, updated_at
        FROM playlists
        WHERE title = ? AND is_system = 1
        LIMIT 1
        "#,
    )
    .bind(LIKED_SONGS_TITLE)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| playlist_from_row(&row)))
}

/// Find one playlist whose sequence contains the given track id
///
/// First match in creation order; a track id may be a member of several
/// playlists simultaneously.
pub async fn find_containing_track(pool: &SqlitePool, track_id: &str) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.title, p.is_system, p.playback_mode, p.track_count, p.created_at, p.updated_at
        FROM playlists p
        INNER JOIN playlist_tracks pt ON pt.playlist_id = p.id
        WHERE pt.track_id = ?
        ORDER BY p.rowid
        LIMIT 1
        "#,
    )
    .bind(track_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| playlist_from_row(&row)))
}
