//! Command implementations.

pub mod add;
pub mod assign;
pub mod people;
pub mod qr;
pub mod receipts;
pub mod summary;

use std::path::{Path, PathBuf};

use tally_core::Store;

/// Open the state store at the user-supplied path, or the default location
/// under the platform data directory.
pub fn open_store(state: Option<&Path>) -> Store {
    let path = state.map(Path::to_path_buf).unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tally")
            .join("state.json")
    });
    Store::new(path)
}
