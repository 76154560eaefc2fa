// SPDX-License-Identifier: MPL-2.0
//! Wire types of the storefront's AJAX endpoints.

use crate::domain::gallery::ImageRef;
use crate::gallery::GallerySource;
use serde::{Deserialize, Serialize};

/// One card of the listings grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub title: String,
    /// Decimal price as rendered by the server (`"1500.00"`).
    pub price: String,
    pub image_url: String,
    pub category: String,
    pub location: String,
    /// Human-readable creation date (`"Mar 04, 2025"`).
    pub date_created: String,
    /// Detail page path on the storefront.
    pub url: String,
    /// Additional photos for the detail gallery. Absent from older servers.
    #[serde(default)]
    pub images: Vec<String>,
    /// Favorite state for the signed-in user, when the server reports it.
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub favorite_count: u32,
}

impl Listing {
    #[must_use]
    pub fn image(&self) -> ImageRef {
        ImageRef::new(self.image_url.clone())
    }

    /// Images for the detail gallery: the cover followed by extra photos,
    /// without repeating the cover.
    #[must_use]
    pub fn gallery_source(&self) -> Option<GallerySource> {
        let cover = self.image();
        let mut images = vec![cover.clone()];
        images.extend(
            self.images
                .iter()
                .map(|image| ImageRef::new(image.clone()))
                .filter(|image| *image != cover),
        );
        GallerySource::from_images(images)
    }
}

/// One page of filtered listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingsPage {
    pub listings: Vec<Listing>,
    pub has_next: bool,
    pub has_previous: bool,
    pub current_page: u32,
    pub num_pages: u32,
    pub total_count: u64,
}

impl Default for ListingsPage {
    fn default() -> Self {
        Self {
            listings: Vec::new(),
            has_next: false,
            has_previous: false,
            current_page: 1,
            num_pages: 1,
            total_count: 0,
        }
    }
}

/// Reply of the favorite toggle endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub is_favorited: bool,
    pub favorite_count: u32,
}
