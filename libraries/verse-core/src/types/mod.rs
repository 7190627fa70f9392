//! Domain types for the playlist store

mod ids;
mod playlist;
mod track;

pub use ids::{PlaylistId, TrackId};
pub use playlist::{CreatePlaylist, PlaybackMode, Playlist, PlaylistEntry, LIKED_SONGS_TITLE};
pub use track::Track;
