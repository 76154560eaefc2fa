// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! state owned by the listings panel or the gallery page and emit messages
//! the application routes back to them.
//!
//! # Screens
//!
//! - [`listings_view`] - Filter sidebar, result grid, and pagination
//! - [`gallery_view`] - One gallery: stage, controls, thumbnails or indicators
//! - [`fullscreen_view`] - Modal overlay over the whole window
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display, picture)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod fullscreen_view;
pub mod gallery_view;
pub mod listings_view;
pub mod notifications;
pub mod styles;
pub mod theming;
