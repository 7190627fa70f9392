//! Playlist mutation operations trait

use crate::error::Result;
use crate::types::{PlaybackMode, Playlist, Track, TrackId};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashSet};

/// The playlist store's mutation operations
///
/// Implementations receive possibly-detached entity values and must resolve
/// each to its live, store-attached state before mutating; an unresolvable
/// target is reported as a not-found error, never acted on. Every operation
/// applies its structural changes as one atomic unit.
#[async_trait]
pub trait PlaylistStorage: Send + Sync {
    /// Flip the playlist's two-valued playback mode and return the new mode
    async fn toggle_playback_mode(&self, playlist: &Playlist) -> Result<PlaybackMode>;

    /// Delete every track in `ids` that is a member of `playlist`
    ///
    /// Removes the membership rows, deletes the track records globally, and
    /// stops playback first if one of the doomed tracks is current. Ids that
    /// are not members of the playlist are ignored.
    async fn delete_tracks(&self, ids: &HashSet<TrackId>, playlist: &Playlist) -> Result<()>;

    /// Delete a single track record and every playlist reference to it
    ///
    /// Stops playback first if the track is current.
    async fn delete_track(&self, track: &Track) -> Result<()>;

    /// Move the tracks at the given indices to a single destination offset
    ///
    /// The moved elements keep their relative order and land as one
    /// contiguous block; `to` is interpreted against the sequence as it
    /// looks after the moved elements are detached.
    async fn move_tracks(&self, playlist: &Playlist, from: &BTreeSet<usize>, to: usize)
        -> Result<()>;

    /// Add a track to the system "Liked Songs" playlist
    ///
    /// Idempotent: returns `Ok(false)` if the track is already a member,
    /// `Ok(true)` if membership changed.
    async fn add_to_liked_songs(&self, track: &Track) -> Result<bool>;

    /// Remove a track from the system "Liked Songs" playlist
    ///
    /// Returns `Ok(false)` if the track was not a member, `Ok(true)` if
    /// membership changed.
    async fn remove_from_liked_songs(&self, track: &Track) -> Result<bool>;
}
