// SPDX-License-Identifier: MPL-2.0
//! Gallery navigation and fullscreen viewing.
//!
//! Nested TEA components, each with its own Message, Effect, and `handle()`:
//!
//! ```text
//! page.rs (host page)
//!     ├── controller  - One gallery: cursor, slides or main image, thumbnails
//!     ├── fullscreen  - Overlay with its own cursor over an image snapshot
//!     └── listeners   - Document-level keyboard listeners and disposers
//! ```
//!
//! Supporting modules: `source` (image collection), `capabilities`
//! (optional controls resolved once), `fallback` (one-shot placeholder),
//! `input` (keys and swipes).

pub mod capabilities;
pub mod controller;
pub mod fallback;
pub mod fullscreen;
pub mod input;
pub mod listeners;
pub mod page;
pub mod source;

pub use capabilities::{Capabilities, GalleryLayout};
pub use controller::{GalleryController, GalleryOptions};
pub use fullscreen::FullscreenOverlay;
pub use input::Key;
pub use page::GalleryPage;
pub use source::{GallerySource, SlideSpec};
