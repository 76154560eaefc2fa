// SPDX-License-Identifier: MPL-2.0
//! Screens and the state only the listing detail screen needs.

use crate::domain::gallery::GalleryId;
use crate::listings::{FavoriteButton, Listing};

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Filter panel and results grid.
    Listings,
    /// One listing with its gallery and favorite button.
    Detail,
    /// Galleries built from command-line image references.
    Gallery,
}

/// The listing shown on the detail screen.
#[derive(Debug)]
pub struct Detail {
    pub listing: Listing,
    /// `None` when the listing has no image at all.
    pub gallery: Option<GalleryId>,
    pub favorite: FavoriteButton,
}
