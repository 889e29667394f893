// JSON flat-file storage for the wallet registry snapshot

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::manager::Snapshot;

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "expense_data.json";

/// Resolve the data file path from an optional user-supplied value.
///
/// A leading `~/` is expanded to the user's home directory.
pub fn resolve_data_file(custom_path: Option<&str>) -> PathBuf {
    match custom_path {
        None | Some("") => PathBuf::from(DEFAULT_DATA_FILE),
        Some(path) => expand_home(path),
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Load the application snapshot from a JSON file.
///
/// A missing file means an empty registry, not an error. Malformed JSON is
/// an error.
pub fn load_data(file_path: &Path) -> Result<Snapshot> {
    if !file_path.exists() {
        debug!(path = %file_path.display(), "data file absent, starting with empty registry");
        return Ok(Snapshot::default());
    }
    let raw = fs::read_to_string(file_path)
        .with_context(|| format!("failed to read data file {}", file_path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse data file {}", file_path.display()))?;
    debug!(
        path = %file_path.display(),
        wallets = snapshot.wallets.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

/// Persist the snapshot to a JSON file, creating parent directories as needed.
pub fn save_data(snapshot: &Snapshot, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create data directory {}", parent.display())
            })?;
        }
    }
    let mut payload = serde_json::to_string_pretty(snapshot)?;
    payload.push('\n');
    fs::write(file_path, payload)
        .with_context(|| format!("failed to write data file {}", file_path.display()))?;
    debug!(path = %file_path.display(), "snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Wallet;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_yields_empty_snapshot() {
        let dir = tempdir().unwrap();
        let snapshot = load_data(&dir.path().join("nope.json")).unwrap();
        assert!(snapshot.wallets.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");

        let snapshot = Snapshot {
            wallets: vec![Wallet::new(
                "Personal".to_string(),
                "USD".to_string(),
                1000.0,
            )],
        };
        save_data(&snapshot, &path).unwrap();

        let loaded = load_data(&path).unwrap();
        assert_eq!(loaded, snapshot);

        // Pretty output ends with a newline
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/data.json");
        save_data(&Snapshot::default(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(load_data(&path).is_err());
    }

    #[test]
    fn test_resolve_data_file_defaults() {
        assert_eq!(resolve_data_file(None), PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(resolve_data_file(Some("")), PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(
            resolve_data_file(Some("custom/data.json")),
            PathBuf::from("custom/data.json")
        );
    }

    #[test]
    fn test_resolve_data_file_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                resolve_data_file(Some("~/expenses.json")),
                home.join("expenses.json")
            );
        }
    }
}
