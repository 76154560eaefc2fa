// SPDX-License-Identifier: MPL-2.0
//! Listings filter, sort, and pagination panel.
//!
//! The panel owns the filter inputs, the request-in-flight flag, and the
//! last page received. Text inputs debounce before refreshing; selects,
//! price presets, and buttons refresh at once. Every filter change goes back
//! to page 1.
//!
//! Only one request runs at a time. A refresh asked for while a request is
//! in flight is remembered and issued once that request settles, with the
//! filter values current at that point.

use super::filter::{FilterChip, FilterField, FilterValues, PricePreset, SortBy};
use super::model::{Listing, ListingsPage};
use crate::config::{GRID_ROW_HEIGHT, INITIAL_VIEWPORT_HEIGHT};
use crate::domain::gallery::ImageRef;
use crate::error::Error;
use crate::gallery::fallback::ImageElement;
use crate::media::{visible_range, LazyImages};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    MinPriceChanged(String),
    MaxPriceChanged(String),
    CategorySelected(String),
    LocationSelected(String),
    SortSelected(SortBy),
    PresetPressed(PricePreset),
    ApplyPressed,
    ResetPressed,
    ChipRemoved(FilterField),
    PageRequested(u32),
    NextPage,
    PreviousPage,
    ReloadPressed,
    /// A debounce timer fired; stale generations are ignored.
    DebounceElapsed(u64),
    /// A listings request settled.
    Loaded(FilterValues, Result<ListingsPage, Error>),
    /// The results grid scrolled or was resized.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    ImageLoaded(ImageRef),
    ImageFailed(ImageRef),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Start a timer, then send `Message::DebounceElapsed(generation)`.
    Debounce { generation: u64, delay: Duration },
    /// Request listings for these filters.
    Fetch(FilterValues),
    /// Fetch card images that scrolled into view.
    LoadImages(Vec<ImageRef>),
}

/// What the results area shows.
#[derive(Debug, Clone, Default)]
pub enum Status {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loaded,
    Failed(Error),
}

#[derive(Debug)]
pub struct ListingsPanel {
    values: FilterValues,
    debounce: Duration,
    debounce_generation: u64,
    in_flight: bool,
    refresh_pending: bool,
    status: Status,
    page: ListingsPage,
    applied: Option<FilterValues>,
    columns: usize,
    offset_y: f32,
    viewport_height: f32,
    lazy: LazyImages<u64>,
    /// Card images revealed so far, by listing id.
    cards: HashMap<u64, ImageElement>,
    placeholder: ImageRef,
}

impl ListingsPanel {
    /// Creates a panel starting from `values` (a restored query or defaults).
    #[must_use]
    pub fn new(
        values: FilterValues,
        debounce: Duration,
        columns: usize,
        placeholder: ImageRef,
    ) -> Self {
        Self {
            values,
            debounce,
            debounce_generation: 0,
            in_flight: false,
            refresh_pending: false,
            status: Status::Idle,
            page: ListingsPage::default(),
            applied: None,
            columns: columns.max(1),
            offset_y: 0.0,
            viewport_height: INITIAL_VIEWPORT_HEIGHT,
            lazy: LazyImages::default(),
            cards: HashMap::new(),
            placeholder,
        }
    }

    /// Issues the first request.
    pub fn start(&mut self) -> Effect {
        self.refresh()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SearchChanged(q) => {
                self.values.q = q;
                self.debounced_change()
            }
            Message::MinPriceChanged(value) => {
                self.values.min_price = value;
                self.debounced_change()
            }
            Message::MaxPriceChanged(value) => {
                self.values.max_price = value;
                self.debounced_change()
            }
            Message::CategorySelected(category) => {
                self.values.category = category;
                self.immediate_change()
            }
            Message::LocationSelected(location) => {
                self.values.location = location;
                self.immediate_change()
            }
            Message::SortSelected(sort_by) => {
                self.values.sort_by = sort_by;
                self.immediate_change()
            }
            Message::PresetPressed(preset) => {
                self.values.apply_preset(preset);
                self.immediate_change()
            }
            Message::ApplyPressed => self.immediate_change(),
            Message::ResetPressed => {
                self.values = FilterValues::default();
                self.immediate_change()
            }
            Message::ChipRemoved(field) => {
                self.values.clear(field);
                self.immediate_change()
            }
            Message::PageRequested(page) => self.go_to_page(page),
            Message::NextPage => {
                if self.page.has_next {
                    self.go_to_page(self.page.current_page.saturating_add(1))
                } else {
                    Effect::None
                }
            }
            Message::PreviousPage => {
                if self.page.has_previous {
                    self.go_to_page(self.page.current_page.saturating_sub(1))
                } else {
                    Effect::None
                }
            }
            Message::ReloadPressed => self.refresh(),
            Message::DebounceElapsed(generation) => {
                if generation == self.debounce_generation {
                    self.refresh()
                } else {
                    Effect::None
                }
            }
            Message::Loaded(requested, result) => self.on_loaded(requested, result),
            Message::Scrolled {
                offset_y,
                viewport_height,
            } => {
                self.offset_y = offset_y;
                self.viewport_height = viewport_height;
                self.reveal_visible()
            }
            Message::ImageLoaded(reference) => {
                for card in self.cards.values_mut() {
                    card.on_loaded(&reference);
                }
                Effect::None
            }
            Message::ImageFailed(reference) => {
                let mut loads: Vec<ImageRef> = Vec::new();
                for replacement in self
                    .cards
                    .values_mut()
                    .filter_map(|card| card.on_failed(&reference, &self.placeholder))
                {
                    if !loads.contains(&replacement) {
                        loads.push(replacement);
                    }
                }
                if loads.is_empty() {
                    Effect::None
                } else {
                    Effect::LoadImages(loads)
                }
            }
        }
    }

    fn debounced_change(&mut self) -> Effect {
        self.values.page = 1;
        self.debounce_generation = self.debounce_generation.wrapping_add(1);
        Effect::Debounce {
            generation: self.debounce_generation,
            delay: self.debounce,
        }
    }

    fn immediate_change(&mut self) -> Effect {
        self.values.page = 1;
        // The request below already carries any pending text input.
        self.debounce_generation = self.debounce_generation.wrapping_add(1);
        self.refresh()
    }

    fn go_to_page(&mut self, page: u32) -> Effect {
        let page = page.clamp(1, self.page.num_pages.max(1));
        self.values.page = page;
        self.refresh()
    }

    fn refresh(&mut self) -> Effect {
        if self.in_flight {
            tracing::debug!("listings request in flight, refresh deferred");
            self.refresh_pending = true;
            return Effect::None;
        }
        self.in_flight = true;
        Effect::Fetch(self.values.clone())
    }

    fn on_loaded(&mut self, requested: FilterValues, result: Result<ListingsPage, Error>) -> Effect {
        self.in_flight = false;
        match result {
            Ok(page) => {
                tracing::debug!(
                    total = page.total_count,
                    page = page.current_page,
                    "listings loaded"
                );
                self.lazy.clear();
                self.cards.clear();
                for listing in &page.listings {
                    self.lazy.observe(listing.id, listing.image());
                }
                self.page = page;
                self.applied = Some(requested);
                self.status = Status::Loaded;
                self.offset_y = 0.0;
            }
            Err(err) => {
                tracing::error!(%err, "listings request failed");
                self.status = Status::Failed(err);
            }
        }

        if self.refresh_pending {
            self.refresh_pending = false;
            return self.refresh();
        }
        self.reveal_visible()
    }

    fn reveal_visible(&mut self) -> Effect {
        if !matches!(self.status, Status::Loaded) {
            return Effect::None;
        }
        let range = visible_range(
            self.offset_y,
            self.viewport_height,
            GRID_ROW_HEIGHT,
            self.columns,
            self.page.listings.len(),
        );
        let visible = self.page.listings[range].iter().map(|listing| listing.id);
        let revealed: Vec<ImageRef> = self
            .lazy
            .reveal(visible)
            .into_iter()
            .filter_map(|(id, reference)| {
                let card = ImageElement::with_src(reference);
                let load = card.pending().cloned();
                self.cards.insert(id, card);
                load
            })
            .collect();
        if revealed.is_empty() {
            Effect::None
        } else {
            Effect::LoadImages(revealed)
        }
    }

    /// Current input values (what the next request will send).
    #[must_use]
    pub fn values(&self) -> &FilterValues {
        &self.values
    }

    /// Filters of the last successful request, the page's effective query.
    #[must_use]
    pub fn applied(&self) -> Option<&FilterValues> {
        self.applied.as_ref()
    }

    /// Chips for the filters of the last successful request.
    #[must_use]
    pub fn active_chips(&self) -> Vec<FilterChip> {
        self.applied
            .as_ref()
            .map(FilterValues::active_chips)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.page.listings
    }

    #[must_use]
    pub fn page(&self) -> &ListingsPage {
        &self.page
    }

    /// Total result count once a request has succeeded.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        matches!(self.status, Status::Loaded).then_some(self.page.total_count)
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Image element of a revealed card; `None` until it scrolls into view.
    #[must_use]
    pub fn card_image(&self, listing_id: u64) -> Option<&ImageElement> {
        self.cards.get(&listing_id)
    }

    /// Whether a revealed card shows `reference`.
    #[must_use]
    pub fn shows(&self, reference: &ImageRef) -> bool {
        self.cards.values().any(|card| card.src() == Some(reference))
    }
}
