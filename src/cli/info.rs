use tabled::Table;

use crate::{
    config, discogs, error, info,
    types::TrackTableRow,
    utils,
};

/// Fetches a release and displays its tracklist with the parsed
/// durations, without touching Last.fm. Durations shown here are the raw
/// parser output; the 30-second floor only applies at submission time.
pub async fn info(release_arg: String) {
    if let Err(e) = config::validate(&[config::ENV_DISCOGS_TOKEN]) {
        error!("{}", e);
    }

    let token = config::discogs_token();
    let release_id = match discogs::release::resolve_release(&release_arg, &token).await {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let release = match discogs::release::get_release(release_id, &token).await {
        Ok(release) => release,
        Err(e) => error!("Failed to fetch release: {}", e),
    };

    let artist = utils::format_artists(&release.artists);
    let tracks = utils::normalize_tracks(&release.tracklist);

    println!();
    info!("{} — {}", artist, release.title);
    if let Some(uri) = &release.uri {
        info!("{}", uri);
    }

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            position: t.position.clone(),
            title: t.title.clone(),
            duration: utils::format_duration(t.duration_secs),
        })
        .collect();
    println!("{}\n", Table::new(rows));

    let total: u32 = tracks.iter().map(|t| t.duration_secs).sum();
    info!(
        "{} tracks, {} total.",
        tracks.len(),
        utils::format_duration(total)
    );
}
