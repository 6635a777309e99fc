use std::io::{self, BufRead};

use crate::{
    config, error, info,
    lastfm::auth::{authorize_url, get_mobile_session, get_session, get_token},
    management::SessionManager,
    success,
    types::Credentials,
    warning,
};

/// Obtains a Last.fm session key and caches it for scrobble runs.
///
/// The default flow fetches a request token, sends the user to the
/// Last.fm authorize page in their browser, waits for confirmation on
/// stdin, and exchanges the token for a session key. With `mobile` the
/// password-based `auth.getMobileSession` flow is used instead and no
/// browser is involved.
///
/// Both flows are fatal on failure: without a session key no submission
/// is possible.
pub async fn auth(mobile: bool) {
    let required = if mobile {
        vec![
            config::ENV_LASTFM_API_KEY,
            config::ENV_LASTFM_API_SECRET,
            config::ENV_LASTFM_USERNAME,
            config::ENV_LASTFM_PASSWORD,
        ]
    } else {
        vec![config::ENV_LASTFM_API_KEY, config::ENV_LASTFM_API_SECRET]
    };
    if let Err(e) = config::validate(&required) {
        error!("{}", e);
    }

    let creds = Credentials {
        api_key: config::lastfm_api_key(),
        api_secret: config::lastfm_api_secret(),
    };

    let session = if mobile {
        let username = config::lastfm_username();
        let password = config::lastfm_password();
        match get_mobile_session(&username, &password, &creds).await {
            Ok(session) => session,
            Err(e) => error!("Authentication failed: {}", e),
        }
    } else {
        let token = match get_token(&creds).await {
            Ok(token) => token,
            Err(e) => error!("Failed to get a request token: {}", e),
        };

        let url = authorize_url(&creds.api_key, &token);
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            );
        }

        info!("Authorize needledrop in your browser, then press Enter to continue...");
        let mut buf = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut buf) {
            error!("Failed to read from stdin: {}", e);
        }

        match get_session(&token, &creds).await {
            Ok(session) => session,
            Err(e) => error!("Authentication failed: {}", e),
        }
    };

    let name = session.name.clone();
    let manager = SessionManager::new(session);
    if let Err(e) = manager.persist().await {
        error!("Failed to save session to cache: {}", e);
    }

    success!("Authenticated as {}.", name);
}
