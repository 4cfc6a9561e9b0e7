use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SESSION_FILE: &str = "session.json";

/// What `rayhope login` leaves behind for later commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub server: String,
    pub username: String,
    pub token: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(server: impl Into<String>, username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            username: username.into(),
            token: token.into(),
            logged_in_at: Utc::now(),
        }
    }
}

/// Session file under the client config directory
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `RAYHOPE_CONFIG_DIR`, falling back to `$HOME/.config/rayhope`
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(get_config_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(&self) -> anyhow::Result<Option<Session>> {
        let path = self.dir.join(SESSION_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        let session: Session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> anyhow::Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let content = serde_json::to_string_pretty(session)?;
        fs::write(self.dir.join(SESSION_FILE), content)?;
        Ok(())
    }

    /// Returns whether a session was actually removed
    pub fn clear(&self) -> anyhow::Result<bool> {
        let path = self.dir.join(SESSION_FILE);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path)?;
        Ok(true)
    }
}

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(custom_dir) = std::env::var("RAYHOPE_CONFIG_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }

    let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
    Ok(PathBuf::from(home).join(".config").join("rayhope"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested"));

        assert_eq!(store.load().unwrap(), None);

        let session = Session::new("http://localhost:3000", "admin", "abc.def.ghi");
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_session_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SESSION_FILE), "not json").unwrap();

        assert!(SessionStore::new(dir.path()).load().is_err());
    }
}
