use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Last.fm API key and shared secret, threaded explicitly through every
/// signed call instead of living in process-wide state.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastfmSession {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscogsArtist {
    pub name: String,
    #[serde(default)]
    pub join: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscogsTrack {
    #[serde(default)]
    pub position: String,
    pub title: String,
    #[serde(default)]
    pub duration: String,
    /// "track", "heading" or "index" in Discogs tracklists.
    #[serde(default, rename = "type_")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscogsRelease {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<DiscogsArtist>,
    pub uri: Option<String>,
    #[serde(default)]
    pub tracklist: Vec<DiscogsTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    pub title: String,
    pub year: Option<String>,
    pub format: Option<Vec<String>>,
}

/// A track with its duration resolved to whole seconds. Derived from a
/// [`DiscogsTrack`], never persisted independently.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTrack {
    pub position: String,
    pub title: String,
    pub duration_secs: u32,
}

/// One listen event, fully built before submission and never mutated
/// afterwards. `timestamp` is Unix epoch seconds; `duration_secs` carries
/// the floored value actually reported to Last.fm.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrobbleEntry {
    pub artist: String,
    pub track: String,
    pub album: String,
    pub timestamp: i64,
    pub duration_secs: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTrack {
    pub position: String,
    pub title: String,
    pub duration_secs: u32,
}

/// Completion record of one scrobble run, appended to the local session
/// log after the submission loop finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub scrobbled_at: i64,
    pub artist: String,
    pub album: String,
    pub source_url: String,
    pub tracks: Vec<SessionTrack>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub position: String,
    pub title: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct ScheduleTableRow {
    pub position: String,
    pub title: String,
    pub duration: String,
    pub scrobbled_at: String,
}

#[derive(Tabled)]
pub struct SessionTableRow {
    pub date: String,
    pub artist: String,
    pub album: String,
    pub tracks: usize,
}
