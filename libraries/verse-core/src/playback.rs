//! Playback coordinator seam
//!
//! The mutation core never owns audio playback; it only needs to know which
//! track is current and to be able to stop it before that track's record is
//! deleted. Platform crates implement this trait.

use crate::types::TrackId;

/// Handle to whatever owns the "currently playing track" state
pub trait PlaybackCoordinator: Send + Sync {
    /// Id of the track currently playing, if any
    fn current_track_id(&self) -> Option<TrackId>;

    /// Stop playback
    fn stop(&self);

    /// Forget the current track reference
    ///
    /// Callers deleting the current track must invoke this after [`stop`]
    /// so the coordinator never points at a dead record.
    ///
    /// [`stop`]: PlaybackCoordinator::stop
    fn clear_current_track(&self);
}
