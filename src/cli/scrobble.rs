use std::{
    future::Future,
    io::{self, BufRead, Write},
    time::Duration,
};

use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::sleep;

use crate::{
    config, discogs, error, info, lastfm,
    management::{SessionLogManager, SessionManager},
    success,
    types::{Credentials, ScheduleTableRow, ScrobbleEntry, SessionRecord, SessionTrack},
    utils, warning,
};

/// Runs one scrobble session for a release: fetch, normalize, schedule,
/// confirm, submit, log.
///
/// The full schedule is computed once up front so that the last track
/// lands at "now" and earlier tracks are back-dated by the cumulative
/// duration of what followed them. Submission is strictly sequential with
/// `delay_ms` between tracks; a per-track failure is reported and the
/// loop continues. With `dry_run` the parser and scheduler run
/// identically but nothing is submitted or logged.
pub async fn scrobble(release_arg: String, dry_run: bool, delay_ms: u64, assume_yes: bool) {
    let mut required = vec![config::ENV_DISCOGS_TOKEN];
    if !dry_run {
        required.push(config::ENV_LASTFM_API_KEY);
        required.push(config::ENV_LASTFM_API_SECRET);
    }
    if let Err(e) = config::validate(&required) {
        error!("{}", e);
    }

    let token = config::discogs_token();
    let release_id = match discogs::release::resolve_release(&release_arg, &token).await {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    info!("Fetching release {}...", release_id);
    let release = match discogs::release::get_release(release_id, &token).await {
        Ok(release) => release,
        Err(e) => error!("Failed to fetch release: {}", e),
    };

    let artist = utils::format_artists(&release.artists);
    let tracks = utils::normalize_tracks(&release.tracklist);
    if tracks.is_empty() {
        warning!("\"{} — {}\" has no playable tracks.", artist, release.title);
        return;
    }

    let now = chrono::Utc::now().timestamp();
    let entries = utils::build_entries(&artist, &release.title, &tracks, now);

    println!();
    info!("{} — {}", artist, release.title);
    let rows: Vec<ScheduleTableRow> = tracks
        .iter()
        .zip(&entries)
        .map(|(track, entry)| ScheduleTableRow {
            position: track.position.clone(),
            title: track.title.clone(),
            duration: utils::format_duration(track.duration_secs),
            scrobbled_at: format_local_time(entry.timestamp),
        })
        .collect();
    println!("{}\n", Table::new(rows));

    if dry_run {
        info!(
            "Dry run: computed {} scrobbles, nothing was submitted.",
            entries.len()
        );
        return;
    }

    if !assume_yes && !confirm(&format!("Scrobble {} tracks? [y/N] ", entries.len())) {
        info!("Aborted.");
        return;
    }

    let session = match SessionManager::load().await {
        Ok(manager) => manager.session().clone(),
        Err(_) => {
            error!("No Last.fm session found. Please run needledrop auth first.");
        }
    };

    let creds = Credentials {
        api_key: config::lastfm_api_key(),
        api_secret: config::lastfm_api_secret(),
    };

    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{pos}/{len}] {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let submitted = submit_entries(
        &entries,
        Duration::from_millis(delay_ms),
        |entry: ScrobbleEntry| {
            let creds = creds.clone();
            let key = session.key.clone();
            pb.set_message(entry.track.clone());
            pb.inc(1);
            async move { lastfm::scrobble::submit(&entry, &key, &creds).await }
        },
    )
    .await;
    pb.finish_and_clear();

    if submitted == entries.len() {
        success!("Scrobbled {} tracks for {} — {}.", submitted, artist, release.title);
    } else {
        warning!(
            "Scrobbled {} of {} tracks for {} — {}.",
            submitted,
            entries.len(),
            artist,
            release.title
        );
    }

    let record = SessionRecord {
        scrobbled_at: now,
        artist,
        album: release.title,
        source_url: release
            .uri
            .unwrap_or_else(|| format!("https://www.discogs.com/release/{release_id}")),
        tracks: tracks
            .iter()
            .map(|t| SessionTrack {
                position: t.position.clone(),
                title: t.title.clone(),
                duration_secs: t.duration_secs,
            })
            .collect(),
    };
    if let Err(e) = SessionLogManager::new().append(&record).await {
        warning!("Failed to write the session log: {:?}", e);
    }
}

/// Submits entries in order through `submit`, waiting `delay` between
/// consecutive submissions. A failed entry is reported with its track
/// title and skipped; the return value counts successful submissions.
///
/// Generic over the submit function so the loop's skip-and-continue
/// behavior is testable without a network.
pub async fn submit_entries<F, Fut>(entries: &[ScrobbleEntry], delay: Duration, mut submit: F) -> usize
where
    F: FnMut(ScrobbleEntry) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let mut submitted = 0;
    for (i, entry) in entries.iter().enumerate() {
        match submit(entry.clone()).await {
            Ok(()) => submitted += 1,
            Err(e) => {
                warning!("Failed to scrobble \"{}\": {}", entry.track, e);
            }
        }

        if i + 1 < entries.len() {
            sleep(delay).await;
        }
    }
    submitted
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt}");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut buf = String::new();
    if io::stdin().lock().read_line(&mut buf).is_err() {
        return false;
    }
    matches!(buf.trim().to_lowercase().as_str(), "y" | "yes")
}

fn format_local_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}
