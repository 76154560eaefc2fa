// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::ImageRef;
use crate::error::Error;
use crate::gallery::page;
use crate::listings::favorite;
use crate::media::ImageData;
use crate::ui::listings_view;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Listings(listings_view::Message),
    /// Messages for the gallery page of the detail or standalone screen.
    Gallery(page::Message),
    Favorite(favorite::Message),
    BackToListings,
    /// A background image fetch settled.
    ImageFetched(ImageRef, Result<ImageData, Error>),
    Notification(notifications::NotificationMessage),
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Storefront origin overriding `[server] base_url`.
    pub base_url: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Optional data directory override (`--data-dir`).
    pub data_dir: Option<String>,
    /// Image references for a standalone gallery; empty opens the listings.
    pub images: Vec<String>,
}
