//! Verse Player - Playback Coordination
//!
//! In-process implementation of the [`PlaybackCoordinator`] seam from
//! `verse-core`: tracks which media is currently playing and can stop it.
//!
//! The crate is platform-agnostic: no audio output, no storage dependency.
//! Audio backends observe the manager's state; the mutation core uses it to
//! make sure a deleted track is never left as the current-playing reference.
//!
//! # Example
//!
//! ```rust
//! use verse_core::PlaybackCoordinator;
//! use verse_playback::PlaybackManager;
//!
//! let manager = PlaybackManager::new();
//! manager.play("media-1".to_string());
//! assert_eq!(manager.current_track_id(), Some("media-1".to_string()));
//!
//! manager.stop();
//! manager.clear_current_track();
//! assert_eq!(manager.current_track_id(), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manager;

pub use manager::PlaybackManager;
