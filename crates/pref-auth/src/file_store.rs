use std::collections::BTreeMap;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::credentials::{CredentialStore, merged};
use crate::error::AuthError;

/// JSON map on disk (`~/.prefs/session.json` by default).
///
/// Writes go to a temp file in the same directory and are renamed over the
/// target, so readers see either the old or the new triple. Unix mode 0600.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, AuthError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AuthError::Storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            AuthError::Storage(format!("parse {}: {e}", self.path.display()))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), AuthError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)
            .map_err(|e| AuthError::Storage(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }

        let json = serde_json::to_vec_pretty(map)
            .map_err(|e| AuthError::Storage(format!("serialize session: {e}")))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| AuthError::Storage(format!("temp file in {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::Storage(format!("chmod temp file: {e}")))?;
        }
        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| AuthError::Storage(format!("write temp file: {e}")))?;
        tmp.persist(&self.path)
            .map_err(|e| AuthError::Storage(format!("write {}: {e}", self.path.display())))?;
        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>, AuthError> {
        Ok(self.read_map()?.remove(key).filter(|v| !v.trim().is_empty()))
    }

    fn put_all(&self, entries: &[(&str, &str)]) -> Result<(), AuthError> {
        // An unreadable file is replaced rather than blocking a fresh login.
        let current = self.read_map().unwrap_or_else(|error| {
            tracing::warn!(%error, "discarding unreadable session file");
            BTreeMap::new()
        });
        self.write_map(&merged(current, entries))
    }

    fn remove_all(&self, keys: &[&str]) -> Result<(), AuthError> {
        let mut map = self.read_map().unwrap_or_default();
        for key in keys {
            map.remove(*key);
        }

        if map.is_empty() {
            match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AuthError::Storage(format!(
                    "failed to delete {}: {e}",
                    self.path.display()
                ))),
            }
        } else {
            self.write_map(&map)
        }
    }
}
