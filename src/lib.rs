// SPDX-License-Identifier: MPL-2.0
//! `souq_gallery` is a storefront listing browser built with the Iced GUI
//! framework.
//!
//! It browses listings through a filter panel, shows each listing's images in
//! a gallery with thumbnails, zoom and a fullscreen overlay, and lets the user
//! like a listing. Text is localized with Fluent; preferences and the last
//! query are persisted between runs.

#![doc(html_root_url = "https://docs.rs/souq_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod listings;
pub mod logging;
pub mod media;
pub mod ui;
