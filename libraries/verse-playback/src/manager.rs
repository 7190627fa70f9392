//! Playback manager - current-track state

use std::sync::{Mutex, MutexGuard, PoisonError};

use verse_core::{PlaybackCoordinator, TrackId};

#[derive(Debug, Default)]
struct PlaybackState {
    current_track_id: Option<TrackId>,
    playing: bool,
}

/// In-process playback coordinator
///
/// Holds the single optional "currently playing track id" plus a playing
/// flag behind a mutex, so it can be shared between an audio backend and
/// the playlist mutation core.
#[derive(Debug, Default)]
pub struct PlaybackManager {
    state: Mutex<PlaybackState>,
}

impl PlaybackManager {
    /// Create a manager with nothing playing
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a track as current and playing
    pub fn play(&self, track_id: TrackId) {
        let mut state = self.state_guard();
        tracing::debug!(track_id = %track_id, "playback started");
        state.current_track_id = Some(track_id);
        state.playing = true;
    }

    /// Pause playback, keeping the current track reference
    pub fn pause(&self) {
        self.state_guard().playing = false;
    }

    /// Whether a track is actively playing
    pub fn is_playing(&self) -> bool {
        self.state_guard().playing
    }

    // A poisoned lock only means another thread panicked mid-update of two
    // plain fields; the state is still usable.
    fn state_guard(&self) -> MutexGuard<'_, PlaybackState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PlaybackCoordinator for PlaybackManager {
    fn current_track_id(&self) -> Option<TrackId> {
        self.state_guard().current_track_id.clone()
    }

    fn stop(&self) {
        let mut state = self.state_guard();
        if state.playing {
            tracing::debug!(track_id = ?state.current_track_id, "playback stopped");
        }
        state.playing = false;
    }

    fn clear_current_track(&self) {
        self.state_guard().current_track_id = None;
    }
}
