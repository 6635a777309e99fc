use needledrop::types::{DiscogsArtist, DiscogsTrack};
use needledrop::utils::*;

// Helper function to create a tracklist row
fn create_track(position: &str, title: &str, duration: &str, kind: &str) -> DiscogsTrack {
    DiscogsTrack {
        position: position.to_string(),
        title: title.to_string(),
        duration: duration.to_string(),
        kind: kind.to_string(),
    }
}

fn create_artist(name: &str, join: &str) -> DiscogsArtist {
    DiscogsArtist {
        name: name.to_string(),
        join: join.to_string(),
    }
}

#[test]
fn test_parse_duration_mm_ss() {
    assert_eq!(parse_duration("07:42"), 462);
    assert_eq!(parse_duration("3:05"), 185);
    assert_eq!(parse_duration("0:30"), 30);
}

#[test]
fn test_parse_duration_hh_mm_ss() {
    assert_eq!(parse_duration("1:02:03"), 3723);
    assert_eq!(parse_duration("2:00:00"), 7200);
}

#[test]
fn test_parse_duration_bare_seconds() {
    assert_eq!(parse_duration("45"), 45);
    assert_eq!(parse_duration(" 45 "), 45);
}

#[test]
fn test_parse_duration_defaults() {
    // Absent and unparsable input both fall back to the default
    assert_eq!(parse_duration(""), DEFAULT_DURATION_SECS);
    assert_eq!(parse_duration("   "), DEFAULT_DURATION_SECS);
    assert_eq!(parse_duration("garbage"), DEFAULT_DURATION_SECS);

    // One bad segment invalidates the whole field
    assert_eq!(parse_duration("3:xx"), DEFAULT_DURATION_SECS);
    assert_eq!(parse_duration("a:05"), DEFAULT_DURATION_SECS);
    assert_eq!(parse_duration("3:"), DEFAULT_DURATION_SECS);

    // Too many segments
    assert_eq!(parse_duration("1:2:3:4"), DEFAULT_DURATION_SECS);
}

#[test]
fn test_parse_duration_overflow_falls_back() {
    // Segments that overflow u32 seconds count as malformed
    assert_eq!(parse_duration("4294967295:00"), DEFAULT_DURATION_SECS);
    assert_eq!(parse_duration("99999999:00:00"), DEFAULT_DURATION_SECS);
    assert_eq!(parse_duration("4294967295"), u32::MAX);
}

#[test]
fn test_schedule_timestamps_two_floored_tracks() {
    // total=60: first = 1000-60, second = 1000-30
    let timestamps = schedule_timestamps(&[30, 30], 1000);
    assert_eq!(timestamps, vec![940, 970]);
}

#[test]
fn test_schedule_timestamps_last_track_at_now() {
    let durations = vec![181, 240, 305, 62];
    let now = 1_700_000_000;
    let timestamps = schedule_timestamps(&durations, now);

    assert_eq!(timestamps.len(), durations.len());

    // Strictly increasing, all at or before now
    for window in timestamps.windows(2) {
        assert!(window[0] < window[1]);
    }
    assert!(timestamps.iter().all(|&ts| ts <= now));

    // The last track is back-dated by exactly its own duration, the
    // first by the whole session
    assert_eq!(*timestamps.last().unwrap(), now - 62);
    assert_eq!(
        timestamps[0],
        now - durations.iter().map(|&d| d as i64).sum::<i64>()
    );
}

#[test]
fn test_schedule_timestamps_empty() {
    let timestamps = schedule_timestamps(&[], 1000);
    assert!(timestamps.is_empty());
}

#[test]
fn test_normalize_tracks_skips_headings() {
    let tracklist = vec![
        create_track("", "Side A", "", "heading"),
        create_track("A1", "Opener", "4:00", "track"),
        create_track("A2", "Closer", "", "track"),
    ];

    let tracks = normalize_tracks(&tracklist);
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "Opener");
    assert_eq!(tracks[0].duration_secs, 240);
    // Absent duration falls back to the default
    assert_eq!(tracks[1].duration_secs, DEFAULT_DURATION_SECS);
}

#[test]
fn test_normalize_tracks_accepts_untyped_rows() {
    // Some responses omit type_ entirely
    let tracklist = vec![create_track("1", "Only", "2:30", "")];
    let tracks = normalize_tracks(&tracklist);
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].duration_secs, 150);
}

#[test]
fn test_build_entries_end_to_end() {
    // Release with one absent and one explicit duration, now=10000:
    // normalized [180, 240], total 420, timestamps [9580, 9760]
    let tracklist = vec![
        create_track("A1", "I", "", "track"),
        create_track("A2", "II", "4:00", "track"),
    ];
    let tracks = normalize_tracks(&tracklist);
    let entries = build_entries("Artist", "Album", &tracks, 10_000);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].timestamp, 9_580);
    assert_eq!(entries[1].timestamp, 9_760);
    assert_eq!(entries[0].duration_secs, 180);
    assert_eq!(entries[1].duration_secs, 240);
    assert_eq!(entries[0].artist, "Artist");
    assert_eq!(entries[0].album, "Album");
    assert_eq!(entries[1].track, "II");
}

#[test]
fn test_build_entries_applies_floor() {
    // A 10-second interlude is floored to 30 for scheduling and submission
    let tracklist = vec![
        create_track("1", "Interlude", "0:10", "track"),
        create_track("2", "Song", "1:00", "track"),
    ];
    let tracks = normalize_tracks(&tracklist);
    // Parser output stays raw for display
    assert_eq!(tracks[0].duration_secs, 10);

    let entries = build_entries("A", "B", &tracks, 1000);
    assert_eq!(entries[0].duration_secs, 30);
    assert_eq!(entries[0].timestamp, 1000 - 90);
    assert_eq!(entries[1].timestamp, 1000 - 60);
}

#[test]
fn test_build_entries_empty() {
    let entries = build_entries("A", "B", &[], 1000);
    assert!(entries.is_empty());
}

#[test]
fn test_format_artists_joins_and_disambiguation() {
    let artists = vec![
        create_artist("Nirvana (2)", "&"),
        create_artist("Sonic Youth", ""),
    ];
    assert_eq!(format_artists(&artists), "Nirvana & Sonic Youth");

    let single = vec![create_artist("Can", "")];
    assert_eq!(format_artists(&single), "Can");

    // Parenthetical text that is not a numeric suffix stays untouched
    let literal = vec![create_artist("Emerson, Lake (And Friends)", "")];
    assert_eq!(format_artists(&literal), "Emerson, Lake (And Friends)");

    let comma = vec![create_artist("A", ","), create_artist("B", "")];
    assert_eq!(format_artists(&comma), "A, B");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(462), "7:42");
    assert_eq!(format_duration(30), "0:30");
    assert_eq!(format_duration(3723), "1:02:03");
    assert_eq!(format_duration(0), "0:00");
}
