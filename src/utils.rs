use crate::types::{DiscogsArtist, DiscogsTrack, NormalizedTrack, ScrobbleEntry};

/// Substituted when a tracklist entry carries no usable duration.
pub const DEFAULT_DURATION_SECS: u32 = 180;

/// Last.fm does not count listens shorter than this; applied at
/// entry-construction time, not inside the parser.
pub const MIN_SCROBBLE_SECS: u32 = 30;

/// Parses a free-form track duration ("SS", "MM:SS" or "HH:MM:SS") into
/// whole seconds. Empty, malformed or overflowing input yields
/// [`DEFAULT_DURATION_SECS`].
pub fn parse_duration(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_DURATION_SECS;
    }

    let segments: Vec<&str> = raw.split(':').collect();
    if segments.len() > 3 {
        return DEFAULT_DURATION_SECS;
    }

    let mut total: u32 = 0;
    let mut weight: u32 = 1;
    for segment in segments.iter().rev() {
        let value: u32 = match segment.trim().parse() {
            Ok(v) => v,
            // one bad segment invalidates the whole field
            Err(_) => return DEFAULT_DURATION_SECS,
        };
        total = match value.checked_mul(weight).and_then(|v| total.checked_add(v)) {
            Some(t) => t,
            // an absurdly large segment is as malformed as a non-numeric one
            None => return DEFAULT_DURATION_SECS,
        };
        weight *= 60;
    }

    total
}

/// Computes one submission timestamp per track for a contiguous listening
/// session that just ended at `now`: each track is back-dated by the
/// total duration of itself and everything after it, so the last track's
/// timestamp sits closest to `now` and the sequence is strictly
/// increasing in track order.
pub fn schedule_timestamps(durations: &[u32], now: i64) -> Vec<i64> {
    let total: i64 = durations.iter().map(|&d| d as i64).sum();

    let mut timestamps = Vec::with_capacity(durations.len());
    let mut cumulative: i64 = 0;
    for &duration in durations {
        timestamps.push(now - (total - cumulative));
        cumulative += duration as i64;
    }

    timestamps
}

/// Resolves each playable tracklist row to a [`NormalizedTrack`].
/// Heading and index rows (side markers, suite titles) are skipped.
pub fn normalize_tracks(tracklist: &[DiscogsTrack]) -> Vec<NormalizedTrack> {
    tracklist
        .iter()
        .filter(|t| t.kind.is_empty() || t.kind == "track")
        .map(|t| NormalizedTrack {
            position: t.position.clone(),
            title: t.title.clone(),
            duration_secs: parse_duration(&t.duration),
        })
        .collect()
}

/// Builds the full, immutable scrobble sequence for one release: floors
/// every duration to [`MIN_SCROBBLE_SECS`], computes the schedule once up
/// front, and pairs the two. The resulting timestamps are strictly
/// increasing and never exceed `now`.
pub fn build_entries(
    artist: &str,
    album: &str,
    tracks: &[NormalizedTrack],
    now: i64,
) -> Vec<ScrobbleEntry> {
    let floored: Vec<u32> = tracks
        .iter()
        .map(|t| t.duration_secs.max(MIN_SCROBBLE_SECS))
        .collect();
    let timestamps = schedule_timestamps(&floored, now);

    tracks
        .iter()
        .zip(floored)
        .zip(timestamps)
        .map(|((track, duration_secs), timestamp)| ScrobbleEntry {
            artist: artist.to_string(),
            track: track.title.clone(),
            album: album.to_string(),
            timestamp,
            duration_secs,
        })
        .collect()
}

/// Joins Discogs artist credits into a display name, honoring the `join`
/// field ("&", ",", "feat.") and stripping numeric disambiguation
/// suffixes like "Nirvana (2)".
pub fn format_artists(artists: &[DiscogsArtist]) -> String {
    let mut out = String::new();
    for (i, artist) in artists.iter().enumerate() {
        out.push_str(strip_disambiguation(&artist.name));
        if i + 1 < artists.len() {
            let join = artist.join.trim();
            if join.is_empty() || join == "," {
                out.push_str(", ");
            } else {
                out.push(' ');
                out.push_str(join);
                out.push(' ');
            }
        }
    }
    out
}

fn strip_disambiguation(name: &str) -> &str {
    if let Some(idx) = name.rfind(" (") {
        let inner = &name[idx + 2..];
        if let Some(digits) = inner.strip_suffix(')') {
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return &name[..idx];
            }
        }
    }
    name
}

/// Renders seconds as "M:SS" or "H:MM:SS" for tables and prompts.
pub fn format_duration(secs: u32) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
