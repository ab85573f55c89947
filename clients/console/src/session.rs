//! Persistent session state
//!
//! The session file is the sole source of truth for "logged in" at
//! startup. It is never validated proactively; a stale token surfaces as
//! a 401/403 on the first authenticated call, at which point the file is
//! cleared.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::UserDirs;
use serde::{Deserialize, Serialize};

const SESSION_DIR: &str = ".dynasty";
const SESSION_FILE: &str = "session.json";

/// Saved login session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Resolve `~/.dynasty/session.json`
fn session_path() -> io::Result<PathBuf> {
    let dirs = UserDirs::new()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory not found"))?;
    Ok(dirs.home_dir().join(SESSION_DIR).join(SESSION_FILE))
}

/// Load the saved session, if any. An unreadable or corrupt file is
/// treated as "not logged in".
pub fn load() -> Option<Session> {
    let path = session_path().ok()?;
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

/// Persist the session after a successful login
pub fn save(session: &Session) -> io::Result<()> {
    let path = session_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(session)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, data)
}

/// Remove the session file. Missing file is fine.
pub fn clear() -> io::Result<()> {
    let path = session_path()?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
