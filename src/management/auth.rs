use std::path::PathBuf;

use crate::types::LastfmSession;

/// Cache for the Last.fm session key. Unlike OAuth access tokens the key
/// never expires, so there is no refresh path: `auth` writes it once and
/// every scrobble run loads it.
pub struct SessionManager {
    session: LastfmSession,
}

impl SessionManager {
    pub fn new(session: LastfmSession) -> Self {
        SessionManager { session }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::session_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let session: LastfmSession = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { session })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.session).map_err(|e| e.to_string())?;
        async_fs::write(Self::session_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn session(&self) -> &LastfmSession {
        &self.session
    }

    fn session_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("needledrop/cache/session.json");
        path
    }
}
