/// Playlist domain types
use crate::types::{PlaylistId, TrackId};
use serde::{Deserialize, Serialize};

/// Title of the singleton system playlist
pub const LIKED_SONGS_TITLE: &str = "Liked Songs";

/// Playback order for a playlist
///
/// Two-valued and togglable: flipping twice restores the original value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// Tracks play in sequence order
    #[default]
    Sequential,
    /// Tracks play in random order
    Shuffle,
}

impl PlaybackMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            PlaybackMode::Sequential => PlaybackMode::Shuffle,
            PlaybackMode::Shuffle => PlaybackMode::Sequential,
        }
    }

    /// Convert mode to string for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackMode::Sequential => "sequential",
            PlaybackMode::Shuffle => "shuffle",
        }
    }

    /// Parse mode from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sequential" => Some(PlaybackMode::Sequential),
            "shuffle" => Some(PlaybackMode::Shuffle),
            _ => None,
        }
    }
}

/// Playlist
///
/// A value of this type may be detached: it carries the row as it looked
/// when it was read, which is why mutations re-resolve it by `id` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Marks the singleton "Liked Songs" playlist
    pub is_system: bool,

    /// Current playback order
    pub playback_mode: PlaybackMode,

    /// Denormalized count of the track sequence length
    pub track_count: i64,

    /// Creation timestamp (unix seconds)
    pub created_at: i64,

    /// Last modification timestamp (unix seconds)
    pub updated_at: i64,

    /// Ordered track sequence, populated on demand
    pub entries: Option<Vec<PlaylistEntry>>,
}

/// Playlist track membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Track ID
    pub track_id: TrackId,

    /// Position in the playlist (0-indexed, dense)
    pub position: i64,

    /// When the track was added to the playlist (unix seconds)
    pub added_at: i64,
}

/// Request to create a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    /// Playlist title
    pub title: String,

    /// Whether this is the system playlist
    pub is_system: bool,

    /// Initial playback order
    pub playback_mode: PlaybackMode,
}

impl CreatePlaylist {
    /// Request for an ordinary user playlist
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_system: false,
            playback_mode: PlaybackMode::default(),
        }
    }

    /// Request for the system "Liked Songs" playlist
    pub fn liked_songs() -> Self {
        Self {
            title: LIKED_SONGS_TITLE.to_string(),
            is_system: true,
            playback_mode: PlaybackMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_mode_toggle_is_an_involution() {
        assert_eq!(PlaybackMode::Sequential.toggled(), PlaybackMode::Shuffle);
        assert_eq!(PlaybackMode::Shuffle.toggled(), PlaybackMode::Sequential);
        assert_eq!(
            PlaybackMode::Sequential.toggled().toggled(),
            PlaybackMode::Sequential
        );
    }

    #[test]
    fn playback_mode_string_conversion() {
        assert_eq!(PlaybackMode::Sequential.as_str(), "sequential");
        assert_eq!(PlaybackMode::Shuffle.as_str(), "shuffle");

        assert_eq!(
            PlaybackMode::from_str("sequential"),
            Some(PlaybackMode::Sequential)
        );
        assert_eq!(PlaybackMode::from_str("shuffle"), Some(PlaybackMode::Shuffle));
        assert_eq!(PlaybackMode::from_str("invalid"), None);
    }

    #[test]
    fn liked_songs_request_is_system() {
        let create = CreatePlaylist::liked_songs();
        assert!(create.is_system);
        assert_eq!(create.title, LIKED_SONGS_TITLE);
    }
}
