use chrono::{DateTime, Local};
use tabled::Table;

use crate::{info, management::SessionLogManager, types::SessionTableRow, warning};

/// Lists past scrobble runs from the local session log, newest first.
pub async fn history(limit: Option<usize>) {
    let mut records = match SessionLogManager::new().load().await {
        Ok(records) => records,
        Err(e) => {
            warning!("Failed to read the session log: {:?}", e);
            return;
        }
    };

    if records.is_empty() {
        info!("No scrobble sessions logged yet.");
        return;
    }

    records.sort_by(|a, b| b.scrobbled_at.cmp(&a.scrobbled_at));
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    let rows: Vec<SessionTableRow> = records
        .iter()
        .map(|r| SessionTableRow {
            date: DateTime::from_timestamp(r.scrobbled_at, 0)
                .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            artist: r.artist.clone(),
            album: r.album.clone(),
            tracks: r.tracks.len(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
