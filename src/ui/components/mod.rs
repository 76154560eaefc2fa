// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - Error panel with title, explanation, and an action
//! - [`picture`] - Cached image, or a frame while it loads or after it failed

pub mod error_display;
pub mod picture;
