//! # Session Persistence
//!
//! The signed-in `AuthSession` is kept in `~/.shelf/session.json` so CLI
//! invocations between sign-in and sign-out act as the same user.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

use super::auth::AuthSession;

/// On-disk session envelope.
#[derive(Serialize, Deserialize, Debug)]
pub struct SavedSession {
    pub session: AuthSession,
    pub saved_at: i64,
}

/// Returns `~/.shelf/`, creating it if needed.
fn shelf_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".shelf");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn session_path() -> io::Result<PathBuf> {
    Ok(shelf_dir()?.join("session.json"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

fn save_session_to(path: &Path, session: &AuthSession) -> io::Result<()> {
    let saved = SavedSession {
        session: session.clone(),
        saved_at: Utc::now().timestamp(),
    };
    atomic_write_json(path, &saved)
}

fn load_session_from(path: &Path) -> io::Result<Option<AuthSession>> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    let saved: SavedSession =
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Some(saved.session))
}

/// Persist the session after a successful sign-in or sign-up.
pub fn save_session(session: &AuthSession) -> io::Result<()> {
    let path = session_path()?;
    save_session_to(&path, session)?;
    debug!("Session saved for {}", session.user_id);
    Ok(())
}

/// The persisted session, or None when signed out.
pub fn load_session() -> io::Result<Option<AuthSession>> {
    load_session_from(&session_path()?)
}

/// Sign out: remove the session file if present.
pub fn clear_session() -> io::Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
