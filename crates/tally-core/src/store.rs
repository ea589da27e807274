//! JSON file persistence for [`AppState`].
//!
//! The store hands out state snapshots and writes whole snapshots back; the
//! extraction and ledger code never touches the file itself.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::state::AppState;

/// File-backed state store.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store over the given state file path. The file is not touched
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and normalize the state. A missing file yields the default state;
    /// a corrupt file is recreated from defaults rather than failing.
    pub fn load(&self) -> Result<AppState> {
        let mut state = if self.path.exists() {
            let raw = fs::read_to_string(&self.path)?;
            match serde_json::from_str(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!(%err, "state file contained invalid JSON; recreating from defaults");
                    AppState::default()
                }
            }
        } else {
            AppState::default()
        };
        state.normalize();
        debug!(
            people = state.people.len(),
            receipts = state.receipts.len(),
            "loaded state"
        );
        Ok(state)
    }

    /// Persist the state, creating parent directories as needed.
    pub fn save(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let body = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}
