//! Identifier aliases
//!
//! Both stores key their records on externally supplied string ids: media
//! ids come from whatever service cached the track, playlist ids are UUIDs
//! minted at creation time.

/// Playlist primary key
pub type PlaylistId = String;

/// Track primary key
pub type TrackId = String;
