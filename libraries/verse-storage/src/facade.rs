//! Fire-and-forget boundary over the mutation service
//!
//! Some callers (view models, gesture handlers) want the legacy contract:
//! nothing propagates past the operation boundary, a failed or impossible
//! operation just does nothing. This adapter provides that surface while
//! the underlying [`PlaylistService`] keeps its distinguishable outcomes.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use verse_core::types::{PlaybackMode, Playlist, Track, TrackId};

use crate::PlaylistService;

/// Error-swallowing adapter around [`PlaylistService`]
///
/// Every failure is logged at warn level and otherwise dropped; callers
/// cannot distinguish a missing entity from a failed transaction.
pub struct PlaylistFacade {
    service: Arc<PlaylistService>,
}

impl PlaylistFacade {
    /// Wrap a service
    pub fn new(service: Arc<PlaylistService>) -> Self {
        Self { service }
    }

    /// Flip the playback mode, or `None` if the playlist did not resolve
    /// or the write failed
    pub async fn toggle_playback_mode(&self, playlist: &Playlist) -> Option<PlaybackMode> {
        match self.service.toggle_playback_mode(playlist).await {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!(playlist_id = %playlist.id, %err, "toggle_playback_mode dropped");
                None
            }
        }
    }

    /// Delete the given members of a playlist, silently on failure
    pub async fn delete_tracks(&self, ids: &HashSet<TrackId>, playlist: &Playlist) {
        if let Err(err) = self.service.delete_tracks(ids, playlist).await {
            tracing::warn!(playlist_id = %playlist.id, %err, "delete_tracks dropped");
        }
    }

    /// Delete a track everywhere, silently on failure
    pub async fn delete_track(&self, track: &Track) {
        if let Err(err) = self.service.delete_track(track).await {
            tracing::warn!(track_id = %track.id, %err, "delete_track dropped");
        }
    }

    /// Reorder a playlist, silently on failure
    pub async fn move_tracks(&self, playlist: &Playlist, from: &BTreeSet<usize>, to: usize) {
        if let Err(err) = self.service.move_tracks(playlist, from, to).await {
            tracing::warn!(playlist_id = %playlist.id, %err, "move_tracks dropped");
        }
    }

    /// Add to Liked Songs, silently on failure or duplicate
    pub async fn add_to_liked_songs(&self, track: &Track) {
        if let Err(err) = self.service.add_to_liked_songs(track).await {
            tracing::warn!(track_id = %track.id, %err, "add_to_liked_songs dropped");
        }
    }

    /// Remove from Liked Songs, silently on failure or absence
    pub async fn remove_from_liked_songs(&self, track: &Track) {
        if let Err(err) = self.service.remove_from_liked_songs(track).await {
            tracing::warn!(track_id = %track.id, %err, "remove_from_liked_songs dropped");
        }
    }
}
