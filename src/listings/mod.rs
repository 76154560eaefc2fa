// SPDX-License-Identifier: MPL-2.0
//! Storefront listings: filter panel, AJAX client, and favorite toggle.

pub mod client;
pub mod favorite;
pub mod filter;
pub mod model;
pub mod panel;

pub use client::ListingsClient;
pub use favorite::FavoriteButton;
pub use filter::{FilterValues, SortBy};
pub use model::{FavoriteResponse, Listing, ListingsPage};
pub use panel::ListingsPanel;
