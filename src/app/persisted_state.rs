// SPDX-License-Identifier: MPL-2.0
//! Session state persisted between runs in CBOR.
//!
//! Unlike `settings.toml`, nothing here is meant to be edited by hand: it
//! holds what the application remembers on its own, such as the last
//! listings query.
//!
//! # Path Resolution
//!
//! 1. `load_from()`/`save_to()` with an explicit directory
//! 2. `SOUQ_GALLERY_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use super::paths;
use crate::listings::FilterValues;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Filters of the last listings request that succeeded.
    #[serde(default)]
    pub last_query: Option<FilterValues>,
}

impl AppState {
    /// Loads state from the default location.
    ///
    /// Returns the state and, when something went wrong, the i18n key of a
    /// warning to show. Failures fall back to the default state.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the default location when `None`.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "state file is corrupt");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot read state file");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves state to the default location.
    ///
    /// Returns the i18n key of a warning if saving failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state under `base_dir`, creating the directory when needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
                    tracing::warn!(path = %path.display(), %err, "cannot write state file");
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Remembers `query` as the last successful one, minus its page number.
    ///
    /// Returns `true` when the stored query changed.
    pub fn remember_query(&mut self, query: &FilterValues) -> bool {
        let query = FilterValues {
            page: 1,
            ..query.clone()
        };
        if self.last_query.as_ref() == Some(&query) {
            return false;
        }
        self.last_query = Some(query);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::SortBy;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_query() {
        assert!(AppState::default().last_query.is_none());
    }

    #[test]
    fn state_round_trips_through_directory() {
        let dir = tempdir().expect("temp dir");
        let mut state = AppState::default();
        state.remember_query(&FilterValues {
            q: "sofa".to_string(),
            sort_by: SortBy::PriceHigh,
            ..FilterValues::default()
        });

        assert!(state.save_to(Some(dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn missing_file_loads_default_without_warning() {
        let dir = tempdir().expect("temp dir");
        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_warns_and_loads_default() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(STATE_FILE), b"\xff\xff not cbor").expect("write");
        let (state, warning) = AppState::load_from(Some(dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }

    #[test]
    fn remembered_query_drops_page() {
        let mut state = AppState::default();
        let query = FilterValues {
            location: "Mbita".to_string(),
            page: 4,
            ..FilterValues::default()
        };
        assert!(state.remember_query(&query));
        assert_eq!(state.last_query.as_ref().map(|q| q.page), Some(1));
        assert!(!state.remember_query(&FilterValues { page: 2, ..query }));
    }
}
