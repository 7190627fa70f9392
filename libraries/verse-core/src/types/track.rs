/// Track domain types
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Cached media record
///
/// Tracks are independent global records; playlists reference them by id.
/// The same track id may appear in more than one playlist's sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier (external media id)
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: Option<String>,

    /// Album title
    pub album: Option<String>,

    /// Duration in seconds
    pub duration_seconds: Option<f64>,

    /// Cover art location
    pub artwork_url: Option<String>,

    /// Creation timestamp (unix seconds)
    pub created_at: i64,

    /// Last modification timestamp (unix seconds)
    pub updated_at: i64,
}

impl Track {
    /// Create a detached track value with the given id and title
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            album: None,
            duration_seconds: None,
            artwork_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("media-1", "First Light");

        assert_eq!(track.id, "media-1");
        assert_eq!(track.title, "First Light");
        assert!(track.artist.is_none());
        assert!(track.created_at <= chrono::Utc::now().timestamp());
    }
}
