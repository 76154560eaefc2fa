// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[server]` - Storefront base URL, listings path, CSRF token, timeout
//! - `[gallery]` - Placeholder image, swipe threshold, zoom behavior
//! - `[listings]` - Filter debounce, grid layout, and category choices
//! - `[cache]` - Decoded image cache size
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `SOUQ_GALLERY_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use souq_gallery::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// What happens to the zoom toggle when the active image changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomOnNavigate {
    /// Zoom is cleared whenever another image becomes active.
    #[default]
    Reset,
    /// Zoom stays on until toggled off or cleared with Escape.
    Keep,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Storefront server settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Origin every relative reference is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the listings page answering filter requests.
    #[serde(default = "default_listings_path")]
    pub listings_path: String,

    /// Token sent as `X-CSRFToken`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listings_path: default_listings_path(),
            csrf_token: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Effective request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Gallery behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Reference substituted for images that fail to load.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Horizontal displacement a swipe must exceed, in logical pixels.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Zoom behavior when the active image changes.
    #[serde(default)]
    pub zoom_on_navigate: ZoomOnNavigate,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            swipe_threshold_px: default_swipe_threshold(),
            zoom_on_navigate: ZoomOnNavigate::default(),
        }
    }
}

/// Listings panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingsConfig {
    /// Debounce for search and price inputs, in milliseconds.
    #[serde(default = "default_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,

    /// Cards per grid row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,

    /// Category choices offered by the filter panel.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryOption>,
}

/// A selectable listing category (`id` is what the server filters on).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
}

impl std::fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            columns: default_columns(),
            categories: Vec::new(),
        }
    }
}

impl ListingsConfig {
    /// Effective debounce delay.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        let ms = self
            .debounce_ms
            .unwrap_or(DEFAULT_DEBOUNCE_MS)
            .min(MAX_DEBOUNCE_MS);
        Duration::from_millis(ms)
    }

    /// Effective column count.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }
}

/// Image cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Number of decoded images kept in memory.
    #[serde(
        default = "default_image_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_entries: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            image_entries: default_image_entries(),
        }
    }
}

impl CacheConfig {
    /// Effective cache capacity.
    #[must_use]
    pub fn image_entries(&self) -> usize {
        self.image_entries
            .unwrap_or(DEFAULT_IMAGE_CACHE_ENTRIES)
            .clamp(MIN_IMAGE_CACHE_ENTRIES, MAX_IMAGE_CACHE_ENTRIES)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub listings: ListingsConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_listings_path() -> String {
    DEFAULT_LISTINGS_PATH.to_string()
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_debounce_ms() -> Option<u64> {
    Some(DEFAULT_DEBOUNCE_MS)
}

fn default_columns() -> Option<usize> {
    Some(DEFAULT_GRID_COLUMNS)
}

fn default_image_entries() -> Option<usize> {
    Some(DEFAULT_IMAGE_CACHE_ENTRIES)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config unreadable, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            server: ServerConfig {
                base_url: "https://souq.example".to_string(),
                csrf_token: Some("token".to_string()),
                ..ServerConfig::default()
            },
            gallery: GalleryConfig {
                swipe_threshold_px: Some(60.0),
                zoom_on_navigate: ZoomOnNavigate::Keep,
                ..GalleryConfig::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[server]\nbase_url = \"http://shop.local\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.server.base_url, "http://shop.local");
        assert_eq!(loaded.server.listings_path, DEFAULT_LISTINGS_PATH);
        assert_eq!(loaded.gallery.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(loaded.gallery.zoom_on_navigate, ZoomOnNavigate::Reset);
    }

    #[test]
    fn zoom_policy_parses_kebab_case() {
        let config: Config =
            toml::from_str("[gallery]\nzoom_on_navigate = \"keep\"\n").expect("valid toml");
        assert_eq!(config.gallery.zoom_on_navigate, ZoomOnNavigate::Keep);
    }

    #[test]
    fn categories_parse_as_array_of_tables() {
        let config: Config = toml::from_str(
            "[[listings.categories]]\nid = \"3\"\nname = \"Electronics\"\n",
        )
        .expect("valid toml");
        assert_eq!(
            config.listings.categories,
            vec![CategoryOption {
                id: "3".to_string(),
                name: "Electronics".to_string(),
            }]
        );
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.gallery.swipe_threshold_px,
            Some(DEFAULT_SWIPE_THRESHOLD_PX)
        );
        assert_eq!(config.listings.debounce_ms, Some(DEFAULT_DEBOUNCE_MS));
        assert_eq!(config.cache.image_entries, Some(DEFAULT_IMAGE_CACHE_ENTRIES));
    }

    #[test]
    fn effective_values_are_clamped() {
        let server = ServerConfig {
            request_timeout_secs: Some(0),
            ..ServerConfig::default()
        };
        assert_eq!(
            server.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );

        let listings = ListingsConfig {
            debounce_ms: Some(60_000),
            columns: Some(40),
            ..ListingsConfig::default()
        };
        assert_eq!(listings.debounce(), Duration::from_millis(MAX_DEBOUNCE_MS));
        assert_eq!(listings.columns(), MAX_GRID_COLUMNS);

        let cache = CacheConfig {
            image_entries: Some(1),
        };
        assert_eq!(cache.image_entries(), MIN_IMAGE_CACHE_ENTRIES);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let mut config = Config::default();
        config.listings.columns = Some(4);

        save_with_override(&config, base.clone()).expect("save should succeed");
        let (loaded, warning) = load_with_override(base);
        assert!(warning.is_none());
        assert_eq!(loaded.listings.columns, Some(4));
    }
}
