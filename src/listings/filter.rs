// SPDX-License-Identifier: MPL-2.0
//! Filter values of the listings panel and their query-string form.

use serde::{Deserialize, Serialize};

/// Select value meaning "no restriction".
pub const ANY: &str = "all";

/// Storefront locations as `(code, label)` pairs.
pub const LOCATIONS: &[(&str, &str)] = &[
    ("HB_Town", "Homa Bay Town"),
    ("Kendu_Bay", "Kendu Bay"),
    ("Rodi_Kopany", "Rodi Kopany"),
    ("Mbita", "Mbita"),
    ("Oyugis", "Oyugis"),
    ("Rangwe", "Rangwe"),
    ("Ndhiwa", "Ndhiwa"),
    ("Suba", "Suba"),
];

/// Looks up the display label of a location code.
#[must_use]
pub fn location_label(code: &str) -> Option<&'static str> {
    LOCATIONS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, label)| *label)
}

/// Sort order understood by the listings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    Oldest,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Newest,
        SortBy::PriceLow,
        SortBy::PriceHigh,
        SortBy::Oldest,
    ];

    /// Query-string value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Newest => "newest",
            SortBy::PriceLow => "price_low",
            SortBy::PriceHigh => "price_high",
            SortBy::Oldest => "oldest",
        }
    }

    /// Parses a query-string value; unknown values sort by newest like the server.
    #[must_use]
    pub fn from_query(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == value)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SortBy::Newest => "listings-sort-newest",
            SortBy::PriceLow => "listings-sort-price-low",
            SortBy::PriceHigh => "listings-sort-price-high",
            SortBy::Oldest => "listings-sort-oldest",
        }
    }
}

/// A quick price range offered as a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePreset {
    pub min: u32,
    pub max: Option<u32>,
}

pub const PRICE_PRESETS: [PricePreset; 4] = [
    PricePreset {
        min: 0,
        max: Some(1_000),
    },
    PricePreset {
        min: 1_000,
        max: Some(5_000),
    },
    PricePreset {
        min: 5_000,
        max: Some(20_000),
    },
    PricePreset {
        min: 20_000,
        max: None,
    },
];

/// Individually clearable filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Category,
    Location,
    MinPrice,
    MaxPrice,
    Sort,
}

/// One active filter, shown as a removable chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub field: FilterField,
    pub value: String,
}

/// Everything the listings endpoint filters on.
///
/// Text fields hold the raw input; empty strings and [`ANY`] mean "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValues {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub min_price: String,
    #[serde(default)]
    pub max_price: String,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for FilterValues {
    fn default() -> Self {
        Self {
            q: String::new(),
            category: ANY.to_string(),
            location: ANY.to_string(),
            min_price: String::new(),
            max_price: String::new(),
            sort_by: SortBy::Newest,
            page: 1,
        }
    }
}

fn is_set(value: &str) -> bool {
    !value.is_empty() && value != ANY
}

impl FilterValues {
    /// Query parameters in request order, skipping unset values.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let page = self.page.max(1).to_string();
        [
            ("q", self.q.as_str()),
            ("category", self.category.as_str()),
            ("location", self.location.as_str()),
            ("min_price", self.min_price.as_str()),
            ("max_price", self.max_price.as_str()),
            ("sort_by", self.sort_by.as_str()),
            ("page", page.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| is_set(value))
        .map(|(key, value)| (key, value.to_string()))
        .collect()
    }

    /// Filters that differ from the defaults, in display order.
    #[must_use]
    pub fn active_chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        let mut push = |field: FilterField, value: &str| {
            if is_set(value) {
                chips.push(FilterChip {
                    field,
                    value: value.to_string(),
                });
            }
        };
        push(FilterField::Search, self.q.as_str());
        push(FilterField::Category, self.category.as_str());
        push(FilterField::Location, self.location.as_str());
        push(FilterField::MinPrice, self.min_price.as_str());
        push(FilterField::MaxPrice, self.max_price.as_str());
        if self.sort_by != SortBy::Newest {
            push(FilterField::Sort, self.sort_by.as_str());
        }
        chips
    }

    /// Resets one field to its default.
    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Search => self.q.clear(),
            FilterField::Category => self.category = ANY.to_string(),
            FilterField::Location => self.location = ANY.to_string(),
            FilterField::MinPrice => self.min_price.clear(),
            FilterField::MaxPrice => self.max_price.clear(),
            FilterField::Sort => self.sort_by = SortBy::Newest,
        }
    }

    /// Fills both price inputs from a preset; an open-ended preset clears the maximum.
    pub fn apply_preset(&mut self, preset: PricePreset) {
        self.min_price = preset.min.to_string();
        self.max_price = preset.max.map(|max| max.to_string()).unwrap_or_default();
    }
}
