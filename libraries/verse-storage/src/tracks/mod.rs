use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use verse_core::error::Result;
use verse_core::types::Track;

pub(crate) fn track_from_row(row: &SqliteRow) -> Track {
    Track {
        id: row.get("id"),
        title: row.get("title"),
        artist: row.get("artist"),
        album: row.get("album"),
        duration_seconds: row.get("duration_seconds"),
        artwork_url: row.get("artwork_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Get track by ID
pub async fn get_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Track>> {
    let row = sqlx::query(
        "SELECT id, title, artist, album, duration_seconds, artwork_url, created_at, updated_at
         FROM tracks WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| track_from_row(&row)))
}

/// Get all tracks
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Track>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, album, duration_seconds, artwork_url, created_at, updated_at
         FROM tracks ORDER BY title",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(track_from_row).collect())
}

/// Create or update a track record by primary key
///
/// Inserts the record if the id is new, overwrites the metadata fields on an
/// id collision. `created_at` is kept from the first insert.
pub async fn upsert(pool: &SqlitePool, track: &Track) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO tracks (id, title, artist, album, duration_seconds, artwork_url, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)
         ON CONFLICT(id)
         DO UPDATE SET
            title = excluded.title,
            artist = excluded.artist,
            album = excluded.album,
            duration_seconds = excluded.duration_seconds,
            artwork_url = excluded.artwork_url,
            updated_at = excluded.updated_at",
    )
    .bind(&track.id)
    .bind(&track.title)
    .bind(&track.artist)
    .bind(&track.album)
    .bind(track.duration_seconds)
    .bind(&track.artwork_url)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a track record
///
/// Removes the record and, via cascade, any playlist membership rows.
/// Playlist counts and positions are the caller's concern; the mutation
/// service keeps them consistent.
pub async fn delete(pool: &SqlitePool, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM tracks WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
