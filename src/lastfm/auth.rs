use reqwest::Client;
use serde_json::Value;

use crate::{
    lastfm::{
        API_URL, AUTH_URL,
        sign::{api_signature, signed_params},
    },
    types::{Credentials, LastfmSession},
};

/// Obtains a session key with the password-based "mobile session" flow.
///
/// Sends a signed `auth.getMobileSession` call. The username and password
/// travel in the request body over HTTPS; they are never written to disk.
/// The returned session key does not expire and is cached by the caller.
///
/// # Errors
///
/// Returns the Last.fm error message on bad credentials and a transport
/// description on network failure. Authentication failure is fatal at the
/// CLI layer: without a session key no submission is possible.
pub async fn get_mobile_session(
    username: &str,
    password: &str,
    creds: &Credentials,
) -> Result<LastfmSession, String> {
    let params = [
        ("method", "auth.getMobileSession"),
        ("api_key", creds.api_key.as_str()),
        ("username", username),
        ("password", password),
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
    session_from_response(&json)
}

/// Fetches an unauthorized request token (`auth.getToken`), the first
/// step of the user-authorized token flow.
pub async fn get_token(creds: &Credentials) -> Result<String, String> {
    let params = [
        ("method", "auth.getToken"),
        ("api_key", creds.api_key.as_str()),
    ];
    let sig = api_signature(&params, &creds.api_secret);

    let client = Client::new();
    let res = client
        .get(API_URL)
        .query(&signed_params(&params, &sig))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    match json["token"].as_str() {
        Some(token) => Ok(token.to_string()),
        None => Err(service_error(&json)),
    }
}

/// The page where the user grants this application access to their
/// account for a previously fetched request token.
pub fn authorize_url(api_key: &str, token: &str) -> String {
    format!("{AUTH_URL}?api_key={api_key}&token={token}")
}

/// Exchanges an authorized request token for a session key
/// (`auth.getSession`). Fails until the user has visited the authorize
/// page for this token.
pub async fn get_session(token: &str, creds: &Credentials) -> Result<LastfmSession, String> {
    let params = [
        ("method", "auth.getSession"),
        ("api_key", creds.api_key.as_str()),
        ("token", token),
    ];
    let sig = api_signature(&params, &creds.api_secret);

    let client = Client::new();
    let res = client
        .get(API_URL)
        .query(&signed_params(&params, &sig))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    session_from_response(&json)
}

fn session_from_response(json: &Value) -> Result<LastfmSession, String> {
    match json["session"]["key"].as_str() {
        Some(key) => Ok(LastfmSession {
            name: json["session"]["name"].as_str().unwrap_or_default().to_string(),
            key: key.to_string(),
        }),
        None => Err(service_error(json)),
    }
}

pub(crate) fn service_error(json: &Value) -> String {
    json["message"]
        .as_str()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "unexpected response from Last.fm".to_string())
}
