use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use reqwest::{Client, StatusCode, header};
use tokio::time::sleep;

use crate::{
    info,
    types::{DiscogsRelease, SearchHit, SearchResponse},
};

const API_BASE: &str = "https://api.discogs.com";
const USER_AGENT: &str = concat!("needledrop/", env!("CARGO_PKG_VERSION"));

/// Retrieves a release's artist credits, title and ordered tracklist from
/// the Discogs database API.
///
/// # Arguments
///
/// * `id` - Numeric Discogs release id (the number in a release URL)
/// * `token` - Personal access token for Discogs API authentication
///
/// # Rate Limiting
///
/// Discogs allows 60 requests per minute for authenticated clients. When
/// the `X-Discogs-Ratelimit-Remaining` response header drops below 3 the
/// function sleeps 10 seconds before returning the parsed body.
///
/// # Errors
///
/// - 401 responses point at a bad `DISCOGS_TOKEN`
/// - 404 responses name the missing release id
/// - other non-success statuses and network errors are passed through
///   as readable strings
pub async fn get_release(id: u64, token: &str) -> Result<DiscogsRelease, String> {
    let client = Client::new();
    let api_url = format!("{API_BASE}/releases/{id}");

    let response = client
        .get(&api_url)
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::AUTHORIZATION, format!("Discogs token={token}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    match response.status() {
        StatusCode::UNAUTHORIZED => {
            return Err("401 Unauthorized. Check your DISCOGS_TOKEN.".to_string());
        }
        StatusCode::NOT_FOUND => {
            return Err(format!("Release {id} not found on Discogs."));
        }
        status if !status.is_success() => {
            return Err(format!("Discogs returned {status}."));
        }
        _ => {}
    }

    let remaining: u32 = response
        .headers()
        .get("x-discogs-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60);

    let release = response
        .json::<DiscogsRelease>()
        .await
        .map_err(|e| e.to_string())?;

    if remaining < 3 {
        sleep(Duration::from_secs(10)).await;
    }

    Ok(release)
}

/// Searches the Discogs database for releases matching a free-text query.
pub async fn search_releases(query: &str, token: &str) -> Result<Vec<SearchHit>, String> {
    let client = Client::new();
    let api_url = format!("{API_BASE}/database/search");

    let response = client
        .get(&api_url)
        .header(header::USER_AGENT, USER_AGENT)
        .header(header::AUTHORIZATION, format!("Discogs token={token}"))
        .query(&[("q", query), ("type", "release"), ("per_page", "10")])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() == StatusCode::UNAUTHORIZED {
        return Err("401 Unauthorized. Check your DISCOGS_TOKEN.".to_string());
    }

    let json = response
        .json::<SearchResponse>()
        .await
        .map_err(|e| e.to_string())?;

    Ok(json.results)
}

/// Resolves a CLI release argument to a numeric release id: a numeric
/// argument is taken verbatim, anything else goes through search and the
/// interactive picker.
pub async fn resolve_release(arg: &str, token: &str) -> Result<u64, String> {
    if let Ok(id) = arg.trim().parse::<u64>() {
        return Ok(id);
    }
    pick_release(arg, token).await
}

/// Interactive numbered picker over search results, read from stdin.
async fn pick_release(query: &str, token: &str) -> Result<u64, String> {
    info!("Searching Discogs for \"{}\"...", query);
    let results = search_releases(query, token).await?;

    match results.len() {
        0 => Err(format!("No releases found for \"{query}\".")),
        1 => {
            let hit = &results[0];
            info!("Found: {} (id {})", hit.title, hit.id);
            Ok(hit.id)
        }
        _ => {
            println!();
            for (i, hit) in results.iter().enumerate() {
                let year = hit.year.as_deref().unwrap_or("----");
                let formats = hit
                    .format
                    .as_deref()
                    .map(|f| f.join(", "))
                    .unwrap_or_default();
                println!("  {}: {} ({year})  {}", i + 1, hit.title, formats);
            }
            println!();
            print!("Pick [1-{}]: ", results.len());
            io::stdout().flush().map_err(|e| e.to_string())?;

            let mut buf = String::new();
            io::stdin()
                .lock()
                .read_line(&mut buf)
                .map_err(|e| e.to_string())?;

            let idx: usize = buf
                .trim()
                .parse()
                .map_err(|_| "invalid number".to_string())?;
            if idx < 1 || idx > results.len() {
                return Err("selection out of range".to_string());
            }

            Ok(results[idx - 1].id)
        }
    }
}
