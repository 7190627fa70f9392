//! Verse Player Core
//!
//! Platform-agnostic domain types, traits, and error handling for Verse
//! Player's playlist store.
//!
//! This crate defines:
//! - **Domain Types**: `Playlist`, `Track`, `PlaybackMode`, etc.
//! - **Seams**: the [`PlaylistStorage`] operations trait and the
//!   [`PlaybackCoordinator`] handle the mutation core is constructed with
//! - **Error Handling**: unified [`VerseError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use verse_core::types::{CreatePlaylist, PlaybackMode, Track};
//!
//! // A detached track value, as a view layer would hand it over
//! let track = Track::new("media-9f2", "Windowpane");
//!
//! // Request for a new playlist
//! let create = CreatePlaylist::new("Late Night");
//! assert_eq!(create.playback_mode, PlaybackMode::Sequential);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod playback;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VerseError};
pub use playback::PlaybackCoordinator;
pub use storage::PlaylistStorage;

// Export all types
pub use types::{
    CreatePlaylist, PlaybackMode, Playlist, PlaylistEntry, PlaylistId, Track, TrackId,
    LIKED_SONGS_TITLE,
};
