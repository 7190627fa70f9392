//! Playlist mutation service
//!
//! Every operation re-resolves its possibly-detached inputs to live rows by
//! primary key, then applies all structural changes inside one write
//! transaction. The playing-track guard runs before structural removal so
//! the playback coordinator is never left pointing at a deleted record.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Row, SqliteConnection, SqlitePool};
use verse_core::error::Result;
use verse_core::types::{PlaybackMode, Playlist, Track, TrackId};
use verse_core::{PlaybackCoordinator, PlaylistStorage, VerseError, LIKED_SONGS_TITLE};

use crate::order::move_block;
use crate::playlists;
use crate::tracks;

/// Mutation core for the playlist store
///
/// Constructed from its two collaborator handles: the database pool and the
/// playback coordinator.
pub struct PlaylistService {
    pool: SqlitePool,
    playback: Arc<dyn PlaybackCoordinator>,
}

impl PlaylistService {
    /// Create a service over the given pool and coordinator
    pub fn new(pool: SqlitePool, playback: Arc<dyn PlaybackCoordinator>) -> Self {
        Self { pool, playback }
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn resolve_playlist(&self, playlist: &Playlist) -> Result<Playlist> {
        let live = playlists::get_by_id(&self.pool, &playlist.id).await?;
        live.ok_or_else(|| {
            tracing::debug!(playlist_id = %playlist.id, "playlist did not resolve");
            VerseError::PlaylistNotFound(playlist.id.clone())
        })
    }

    async fn resolve_track(&self, track: &Track) -> Result<Track> {
        let live = tracks::get_by_id(&self.pool, &track.id).await?;
        live.ok_or_else(|| {
            tracing::debug!(track_id = %track.id, "track did not resolve");
            VerseError::TrackNotFound(track.id.clone())
        })
    }

    async fn resolve_liked_songs(&self) -> Result<Playlist> {
        let liked = playlists::find_liked_songs(&self.pool).await?;
        liked.ok_or_else(|| {
            tracing::debug!("system playlist is not provisioned");
            VerseError::not_found("playlist", LIKED_SONGS_TITLE)
        })
    }

    /// Stop playback and clear the current-track reference if it is one of
    /// the tracks about to be deleted
    fn stop_if_current(&self, doomed: &[TrackId]) {
        if let Some(current) = self.playback.current_track_id() {
            if doomed.contains(&current) {
                self.playback.stop();
                self.playback.clear_current_track();
            }
        }
    }

    /// Flip the playlist's two-valued playback mode
    ///
    /// Returns the new mode; two consecutive calls restore the original.
    pub async fn toggle_playback_mode(&self, playlist: &Playlist) -> Result<PlaybackMode> {
        let live = self.resolve_playlist(playlist).await?;
        let mode = live.playback_mode.toggled();
        let now = chrono::Utc::now().timestamp();

        sqlx::query("UPDATE playlists SET playback_mode = ?, updated_at = ? WHERE id = ?")
            .bind(mode.as_str())
            .bind(now)
            .bind(&live.id)
            .execute(&self.pool)
            .await?;

        Ok(mode)
    }

    /// Delete every member of `playlist` whose id is in `ids`
    ///
    /// Membership rows go first, then the track records (globally). Ids that
    /// are not members of the playlist are ignored. Stops playback first if
    /// a doomed track is current.
    pub async fn delete_tracks(&self, ids: &HashSet<TrackId>, playlist: &Playlist) -> Result<()> {
        let live = self.resolve_playlist(playlist).await?;
        let now = chrono::Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        let entries = load_entries(&mut tx, &live.id).await?;
        let doomed: Vec<TrackId> = entries
            .iter()
            .map(|(track_id, _)| track_id.clone())
            .filter(|track_id| ids.contains(track_id))
            .collect();

        if doomed.is_empty() {
            return Ok(());
        }

        self.stop_if_current(&doomed);

        delete_track_records(&mut tx, &doomed, now).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a single track record and every playlist reference to it
    ///
    /// Stops playback first if the track is current. Each playlist that held
    /// the track gets dense positions and a refreshed count.
    pub async fn delete_track(&self, track: &Track) -> Result<()> {
        let live = self.resolve_track(track).await?;
        let now = chrono::Utc::now().timestamp();

        self.stop_if_current(std::slice::from_ref(&live.id));

        let mut tx = self.pool.begin().await?;
        delete_track_records(&mut tx, std::slice::from_ref(&live.id), now).await?;
        tx.commit().await?;

        Ok(())
    }

    /// Move the tracks at `from` so the block starts at `to`
    ///
    /// `to` is interpreted against the sequence with the moved elements
    /// detached. The whole sequence is rewritten in one transaction.
    pub async fn move_tracks(
        &self,
        playlist: &Playlist,
        from: &BTreeSet<usize>,
        to: usize,
    ) -> Result<()> {
        let live = self.resolve_playlist(playlist).await?;
        let now = chrono::Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        let entries = load_entries(&mut tx, &live.id).await?;
        let reordered = move_block(&entries, from, to);

        sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
            .bind(&live.id)
            .execute(&mut *tx)
            .await?;

        for (position, (track_id, added_at)) in reordered.iter().enumerate() {
            sqlx::query(
                "INSERT INTO playlist_tracks (playlist_id, track_id, position, added_at)
                 VALUES (?, ?, ?, ?)",
            )
            .bind(&live.id)
            .bind(track_id)
            .bind(position as i64)
            .bind(added_at)
            .execute(&mut *tx)
            .await?;
        }

        refresh_playlist(&mut tx, &live.id, now).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Add a track to the system "Liked Songs" playlist
    ///
    /// Idempotent: an existing membership is a no-op reported as
    /// `Ok(false)`. Otherwise the record is upserted by primary key,
    /// appended at the tail, and the count refreshed, in one transaction.
    pub async fn add_to_liked_songs(&self, track: &Track) -> Result<bool> {
        let liked = self.resolve_liked_songs().await?;
        let now = chrono::Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        let member: Option<i64> = sqlx::query_scalar(
            "SELECT position FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?",
        )
        .bind(&liked.id)
        .bind(&track.id)
        .fetch_optional(&mut *tx)
        .await?;

        if member.is_some() {
            tracing::warn!(track_id = %track.id, "track is already in Liked Songs");
            return Ok(false);
        }

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
        .execute(&mut *tx)
        .await?;

        let tail: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = ?")
                .bind(&liked.id)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query(
            "INSERT INTO playlist_tracks (playlist_id, track_id, position, added_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&liked.id)
        .bind(&track.id)
        .bind(tail)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        refresh_playlist(&mut tx, &liked.id, now).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Remove a track from the system "Liked Songs" playlist
    ///
    /// A missing membership is a no-op reported as `Ok(false)`. The track
    /// record itself is kept.
    pub async fn remove_from_liked_songs(&self, track: &Track) -> Result<bool> {
        let liked = self.resolve_liked_songs().await?;
        let now = chrono::Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            "DELETE FROM playlist_tracks WHERE playlist_id = ? AND track_id = ?",
        )
        .bind(&liked.id)
        .bind(&track.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if removed == 0 {
            return Ok(false);
        }

        resequence(&mut tx, &liked.id).await?;
        refresh_playlist(&mut tx, &liked.id, now).await?;

        tx.commit().await?;
        Ok(true)
    }
}

#[async_trait]
impl PlaylistStorage for PlaylistService {
    async fn toggle_playback_mode(&self, playlist: &Playlist) -> Result<PlaybackMode> {
        PlaylistService::toggle_playback_mode(self, playlist).await
    }

    async fn delete_tracks(&self, ids: &HashSet<TrackId>, playlist: &Playlist) -> Result<()> {
        PlaylistService::delete_tracks(self, ids, playlist).await
    }

    async fn delete_track(&self, track: &Track) -> Result<()> {
        PlaylistService::delete_track(self, track).await
    }

    async fn move_tracks(
        &self,
        playlist: &Playlist,
        from: &BTreeSet<usize>,
        to: usize,
    ) -> Result<()> {
        PlaylistService::move_tracks(self, playlist, from, to).await
    }

    async fn add_to_liked_songs(&self, track: &Track) -> Result<bool> {
        PlaylistService::add_to_liked_songs(self, track).await
    }

    async fn remove_from_liked_songs(&self, track: &Track) -> Result<bool> {
        PlaylistService::remove_from_liked_songs(self, track).await
    }
}

// Transaction-scoped helpers. Each takes the open connection so every
// statement lands in the caller's write transaction.

/// Ordered (track_id, added_at) pairs for a playlist
async fn load_entries(
    conn: &mut SqliteConnection,
    playlist_id: &str,
) -> Result<Vec<(TrackId, i64)>> {
    let rows = sqlx::query(
        "SELECT track_id, added_at FROM playlist_tracks WHERE playlist_id = ? ORDER BY position",
    )
    .bind(playlist_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| (row.get("track_id"), row.get("added_at")))
        .collect())
}

/// Delete track records and every membership row referencing them
///
/// Collects the affected playlists first, then removes memberships and
/// records, then gives each affected playlist dense positions and a fresh
/// count. No dangling references survive.
async fn delete_track_records(
    conn: &mut SqliteConnection,
    ids: &[TrackId],
    now: i64,
) -> Result<()> {
    let mut affected: Vec<String> = Vec::new();

    for track_id in ids {
        let rows = sqlx::query("SELECT playlist_id FROM playlist_tracks WHERE track_id = ?")
            .bind(track_id)
            .fetch_all(&mut *conn)
            .await?;

        for row in rows {
            let playlist_id: String = row.get("playlist_id");
            if !affected.contains(&playlist_id) {
                affected.push(playlist_id);
            }
        }

        sqlx::query("DELETE FROM playlist_tracks WHERE track_id = ?")
            .bind(track_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query("DELETE FROM tracks WHERE id = ?")
            .bind(track_id)
            .execute(&mut *conn)
            .await?;
    }

    for playlist_id in &affected {
        resequence(&mut *conn, playlist_id).await?;
        refresh_playlist(&mut *conn, playlist_id, now).await?;
    }

    Ok(())
}

/// Rewrite a playlist's positions to dense 0..n, keeping relative order
async fn resequence(conn: &mut SqliteConnection, playlist_id: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE playlist_tracks
        SET position = (
            SELECT COUNT(*)
            FROM playlist_tracks pt2
            WHERE pt2.playlist_id = playlist_tracks.playlist_id
              AND pt2.position < playlist_tracks.position
        )
        WHERE playlist_id = ?
        "#,
    )
    .bind(playlist_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Sync the denormalized count with the sequence length and touch updated_at
async fn refresh_playlist(conn: &mut SqliteConnection, playlist_id: &str, now: i64) -> Result<()> {
    sqlx::query(
        "UPDATE playlists
         SET track_count = (SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = playlists.id),
             updated_at = ?
         WHERE id = ?",
    )
    .bind(now)
    .bind(playlist_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}
