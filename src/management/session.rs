use std::{io::Error, path::PathBuf};

use futures_lite::io::AsyncWriteExt;

use crate::types::SessionRecord;

#[derive(Debug)]
pub enum SessionLogError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for SessionLogError {
    fn from(err: Error) -> Self {
        SessionLogError::IoError(err)
    }
}

/// Append-only log of completed scrobble runs, one JSON record per line.
/// Logging is fire-and-forget from the orchestrator's perspective: a
/// failed append never rolls back or fails the scrobble session.
pub struct SessionLogManager {
    path: PathBuf,
}

impl SessionLogManager {
    pub fn new() -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("needledrop/sessions.jsonl");
        Self { path }
    }

    /// Constructor for a non-default log location, used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Appends one record as a JSON line. The file is opened in append
    /// mode so existing history is never rewritten or truncated.
    pub async fn append(&self, record: &SessionRecord) -> Result<(), SessionLogError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(SessionLogError::IoError)?;
        }

        let mut line = serde_json::to_string(record).map_err(SessionLogError::SerdeError)?;
        line.push('\n');

        let mut file = async_fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(SessionLogError::IoError)?;
        file.write_all(line.as_bytes())
            .await
            .map_err(SessionLogError::IoError)?;
        file.flush().await.map_err(SessionLogError::IoError)
    }

    pub async fn load(&self) -> Result<Vec<SessionRecord>, SessionLogError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(SessionLogError::IoError(e)),
        };

        let mut records = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let record: SessionRecord =
                serde_json::from_str(line).map_err(SessionLogError::SerdeError)?;
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for SessionLogManager {
    fn default() -> Self {
        Self::new()
    }
}
