//! Per-user pending uploads.
//!
//! A session is the ordered list of PDF-ready files a user has uploaded and
//! not yet merged, kept or cancelled, plus a running status transcript. The
//! store is a JSON file so state survives between CLI invocations.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Accepted files, in upload order.
    pub files: Vec<PathBuf>,
    /// One line per processed upload.
    #[serde(default)]
    pub log: Vec<String>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    sessions: BTreeMap<i64, Session>,
}

impl SessionStore {
    /// A store that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store at `path`; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let sessions = match fs::read(path) {
            Ok(data) => serde_json::from_slice(&data)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: Some(path.to_path_buf()),
            sessions,
        })
    }

    /// Writes the store back (temp file + rename). No-op for in-memory stores.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, serde_json::to_vec_pretty(&self.sessions)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn get(&self, user: i64) -> Option<&Session> {
        self.sessions.get(&user)
    }

    /// Pending files for `user` (empty when there is no session).
    pub fn files(&self, user: i64) -> &[PathBuf] {
        self.sessions
            .get(&user)
            .map(|s| s.files.as_slice())
            .unwrap_or(&[])
    }

    /// Appends a file; returns how many files the session now holds.
    pub fn push_file(&mut self, user: i64, path: PathBuf) -> usize {
        let session = self.sessions.entry(user).or_default();
        session.files.push(path);
        session.files.len()
    }

    pub fn push_log(&mut self, user: i64, line: impl Into<String>) {
        self.sessions.entry(user).or_default().log.push(line.into());
    }

    /// Removes and returns the user's session.
    pub fn take(&mut self, user: i64) -> Session {
        self.sessions.remove(&user).unwrap_or_default()
    }

    /// Drops every session.
    pub fn clear(&mut self) {
        self.sessions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_take() {
        let mut store = SessionStore::in_memory();
        assert!(store.files(7).is_empty());
        assert_eq!(store.push_file(7, "up/a.pdf".into()), 1);
        assert_eq!(store.push_file(7, "up/b.pdf".into()), 2);
        store.push_log(7, "a.pdf processed");
        assert_eq!(store.files(7), [PathBuf::from("up/a.pdf"), PathBuf::from("up/b.pdf")]);

        let taken = store.take(7);
        assert_eq!(taken.files.len(), 2);
        assert_eq!(taken.log, ["a.pdf processed"]);
        assert!(store.get(7).is_none());
        assert_eq!(store.take(7), Session::default());
    }

    #[test]
    fn users_are_independent() {
        let mut store = SessionStore::in_memory();
        store.push_file(2, "up/x.pdf".into());
        store.push_file(1, "up/y.pdf".into());
        store.take(2);
        assert!(store.get(2).is_none());
        assert_eq!(store.files(1), [PathBuf::from("up/y.pdf")]);
        store.clear();
        assert!(store.get(1).is_none());
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::load(&dir.path().join("sessions.json")).unwrap();
        assert!(store.get(1).is_none());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("sessions.json");

        let mut store = SessionStore::load(&path).unwrap();
        store.push_file(42, "up/scan.pdf".into());
        store.push_log(42, "scan.pdf processed");
        store.save().unwrap();

        let reloaded = SessionStore::load(&path).unwrap();
        let session = reloaded.get(42).unwrap();
        assert_eq!(session.files, [PathBuf::from("up/scan.pdf")]);
        assert_eq!(session.log, ["scan.pdf processed"]);
        assert!(!dir.path().join("state").join("sessions.json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        fs::write(&path, b"{not json").unwrap();
        assert!(matches!(
            SessionStore::load(&path),
            Err(crate::error::DocError::Session(_))
        ));
    }

    #[test]
    fn in_memory_save_is_noop() {
        let mut store = SessionStore::in_memory();
        store.push_file(1, "a.pdf".into());
        store.save().unwrap();
    }
}
