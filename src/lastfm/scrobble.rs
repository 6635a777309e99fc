use reqwest::Client;
use serde_json::Value;

use crate::{
    lastfm::{
        API_URL,
        auth::service_error,
        sign::{api_signature, signed_params},
    },
    types::{Credentials, ScrobbleEntry},
};

/// Submits one listen event with a signed `track.scrobble` call.
///
/// The entry is fully built before this function runs; nothing here
/// recomputes timestamps or durations. Any transport or service-level
/// error comes back as `Err(String)` for the orchestrator to report and
/// skip. A single track's failure is never fatal to the session, and no
/// attempt is retried.
pub async fn submit(
    entry: &ScrobbleEntry,
    session_key: &str,
    creds: &Credentials,
) -> Result<(), String> {
    let timestamp = entry.timestamp.to_string();
    let duration = entry.duration_secs.to_string();

    let params = [
        ("method", "track.scrobble"),
        ("api_key", creds.api_key.as_str()),
        ("sk", session_key),
        ("artist", entry.artist.as_str()),
        ("track", entry.track.as_str()),
        ("album", entry.album.as_str()),
        ("timestamp", timestamp.as_str()),
        ("duration", duration.as_str()),
    ];
    let sig = api_signature(&params, &creds.api_secret);

    let client = Client::new();
    let res = client
        .post(API_URL)
        .form(&signed_params(&params, &sig))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    if json.get("scrobbles").is_some() {
        Ok(())
    } else {
        Err(service_error(&json))
    }
}
