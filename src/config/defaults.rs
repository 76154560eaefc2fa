// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Server**: Storefront endpoint and request settings
//! - **Gallery**: Placeholder image, swipe threshold
//! - **Listings**: Filter debounce and grid layout
//! - **Cache**: Decoded image cache size

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Storefront server used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the listings page answering AJAX filter requests.
pub const DEFAULT_LISTINGS_PATH: &str = "/all-listings/";

/// Default request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Image substituted when an image element fails to load.
pub const DEFAULT_PLACEHOLDER: &str = "/static/images/placeholder.jpg";

/// Horizontal touch displacement (in logical pixels) a swipe must exceed.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 40.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 1.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Listings Defaults
// ==========================================================================

/// Delay after the last keystroke in a text filter before refreshing.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Maximum accepted debounce delay.
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

/// Number of listing cards per grid row.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Smallest grid row width.
pub const MIN_GRID_COLUMNS: usize = 1;

/// Largest grid row width.
pub const MAX_GRID_COLUMNS: usize = 6;

/// Height of a listing card in the results grid (logical pixels).
pub const GRID_ROW_HEIGHT: f32 = 280.0;

/// Viewport height assumed for lazy loading until the grid reports one.
pub const INITIAL_VIEWPORT_HEIGHT: f32 = 720.0;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Minimum number of cached images.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 8;

/// Maximum number of cached images.
pub const MAX_IMAGE_CACHE_ENTRIES: usize = 512;
