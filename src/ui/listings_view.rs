// SPDX-License-Identifier: MPL-2.0
//! Listings screen: filter sidebar, active chips, card grid, and pagination.

use crate::config::CategoryOption;
use crate::i18n::fluent::I18n;
use crate::listings::filter::{location_label, FilterChip, FilterField, ANY, LOCATIONS, PRICE_PRESETS};
use crate::listings::panel::{self, ListingsPanel, Status};
use crate::listings::{Listing, SortBy};
use crate::media::ImageCache;
use crate::ui::components::{error_display::ErrorDisplay, picture};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, mouse_area, pick_list, text_input, Column, Container, Row, Scrollable, Space, Text,
};
use iced::{ContentFit, Element, Length, Theme};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Message {
    Panel(panel::Message),
    /// A card was clicked.
    OpenListing(u64),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a ImageCache,
    pub categories: &'a [CategoryOption],
}

/// A pick-list entry: the query value and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Choice {
    value: String,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn with_any(i18n: &I18n, key: &str, rest: impl Iterator<Item = Choice>) -> Vec<Choice> {
    std::iter::once(Choice {
        value: ANY.to_string(),
        label: i18n.tr(key),
    })
    .chain(rest)
    .collect()
}

fn selected(options: &[Choice], value: &str) -> Option<Choice> {
    options.iter().find(|choice| choice.value == value).cloned()
}

fn panel_message(msg: panel::Message) -> Message {
    Message::Panel(msg)
}

pub fn view<'a>(panel: &'a ListingsPanel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(view_sidebar(panel, ctx))
        .push(view_results(panel, ctx))
        .into()
}

fn view_sidebar<'a>(panel: &'a ListingsPanel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let values = panel.values();

    let label = |key: &str| Text::new(i18n.tr(key)).size(typography::CAPTION);

    let categories = with_any(
        i18n,
        "filter-category-all",
        ctx.categories.iter().map(|category| Choice {
            value: category.id.clone(),
            label: category.name.clone(),
        }),
    );
    let category_selected = selected(&categories, &values.category);

    let locations = with_any(
        i18n,
        "filter-location-all",
        LOCATIONS.iter().map(|(code, label)| Choice {
            value: (*code).to_string(),
            label: (*label).to_string(),
        }),
    );
    let location_selected = selected(&locations, &values.location);

    let sorts: Vec<Choice> = SortBy::ALL
        .into_iter()
        .map(|sort| Choice {
            value: sort.as_str().to_string(),
            label: i18n.tr(sort.i18n_key()),
        })
        .collect();
    let sort_selected = selected(&sorts, values.sort_by.as_str());

    let presets = PRICE_PRESETS.into_iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, preset| {
            let text = match preset.max {
                Some(max) => format!("{} - {}", preset.min, max),
                None => format!("{}+", preset.min),
            };
            row.push(
                button(Text::new(text).size(typography::CAPTION))
                    .on_press(panel_message(panel::Message::PresetPressed(preset)))
                    .style(styles::button::secondary),
            )
        },
    );

    let column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("filter-title")).size(typography::TITLE_SM))
        .push(label("filter-search"))
        .push(
            text_input(&i18n.tr("filter-search-placeholder"), &values.q)
                .on_input(|q| panel_message(panel::Message::SearchChanged(q))),
        )
        .push(label("filter-category"))
        .push(
            pick_list(categories, category_selected, |choice: Choice| {
                panel_message(panel::Message::CategorySelected(choice.value))
            })
            .width(Length::Fill),
        )
        .push(label("filter-location"))
        .push(
            pick_list(locations, location_selected, |choice: Choice| {
                panel_message(panel::Message::LocationSelected(choice.value))
            })
            .width(Length::Fill),
        )
        .push(label("filter-price"))
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(
                    text_input(&i18n.tr("filter-min-price"), &values.min_price)
                        .on_input(|v| panel_message(panel::Message::MinPriceChanged(v))),
                )
                .push(
                    text_input(&i18n.tr("filter-max-price"), &values.max_price)
                        .on_input(|v| panel_message(panel::Message::MaxPriceChanged(v))),
                ),
        )
        .push(presets)
        .push(label("filter-sort"))
        .push(
            pick_list(sorts, sort_selected, |choice: Choice| {
                panel_message(panel::Message::SortSelected(SortBy::from_query(&choice.value)))
            })
            .width(Length::Fill),
        )
        .push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    button(Text::new(i18n.tr("filter-apply")).size(typography::BODY))
                        .on_press(panel_message(panel::Message::ApplyPressed))
                        .style(styles::button::primary),
                )
                .push(
                    button(Text::new(i18n.tr("filter-reset")).size(typography::BODY))
                        .on_press(panel_message(panel::Message::ResetPressed))
                        .style(styles::button::secondary),
                ),
        );

    Container::new(column)
        .width(Length::Fixed(sizing::FILTER_SIDEBAR_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}

fn chip_label(chip: &FilterChip, ctx: &ViewContext<'_>) -> String {
    let value = match chip.field {
        FilterField::Category => ctx
            .categories
            .iter()
            .find(|category| category.id == chip.value)
            .map_or_else(|| chip.value.clone(), |category| category.name.clone()),
        FilterField::Location => location_label(&chip.value)
            .map_or_else(|| chip.value.clone(), str::to_string),
        FilterField::Sort => ctx.i18n.tr(SortBy::from_query(&chip.value).i18n_key()),
        FilterField::Search | FilterField::MinPrice | FilterField::MaxPrice => chip.value.clone(),
    };
    let key = match chip.field {
        FilterField::Search => "chip-search",
        FilterField::Category => "chip-category",
        FilterField::Location => "chip-location",
        FilterField::MinPrice => "chip-min-price",
        FilterField::MaxPrice => "chip-max-price",
        FilterField::Sort => "chip-sort",
    };
    ctx.i18n.tr_with_args(key, &[("value", value.as_str())])
}

fn view_results<'a>(panel: &'a ListingsPanel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut header = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if let Some(count) = panel.total_count() {
        header = header.push(
            Text::new(i18n.tr_with_args("listings-results-count", &[("count", &count.to_string())]))
                .size(typography::BODY),
        );
    }
    if panel.is_loading() {
        header = header.push(
            Text::new(i18n.tr("listings-loading"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let chips = panel
        .active_chips()
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, chip| {
            let content = Row::new()
                .spacing(spacing::XXS)
                .align_y(Vertical::Center)
                .push(Text::new(chip_label(&chip, ctx)).size(typography::CAPTION))
                .push(
                    button(Text::new("×").size(typography::CAPTION))
                        .padding(0)
                        .on_press(panel_message(panel::Message::ChipRemoved(chip.field)))
                        .style(styles::button::secondary),
                );
            row.push(
                Container::new(content)
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::chip),
            )
        });

    let body: Element<'a, Message> = match panel.status() {
        Status::Failed(err) => ErrorDisplay::new()
            .title(i18n.tr("listings-error-title"))
            .message(i18n.tr("listings-error-message"))
            .details(format!("{}: {err}", i18n.tr(err.i18n_key())))
            .action(
                i18n.tr("listings-reload"),
                panel_message(panel::Message::ReloadPressed),
            )
            .view(),
        Status::Idle => Container::new(Text::new(i18n.tr("listings-loading")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
        Status::Loaded if panel.listings().is_empty() => {
            Container::new(Text::new(i18n.tr("listings-empty")).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
        }
        Status::Loaded => view_grid(panel, ctx),
    };

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(header)
        .push(chips)
        .push(body)
        .push(view_pagination(panel, i18n))
        .into()
}

fn view_grid<'a>(panel: &'a ListingsPanel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = panel.columns();
    let grid = panel
        .listings()
        .chunks(columns)
        .fold(Column::new().spacing(spacing::SM), |grid, chunk| {
            let mut row = Row::new().spacing(spacing::SM);
            for listing in chunk {
                row = row.push(view_card(panel, listing, ctx));
            }
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::FillPortion(1)));
            }
            grid.push(row)
        });

    Scrollable::new(grid)
        .on_scroll(|viewport: Viewport| {
            panel_message(panel::Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_card<'a>(
    panel: &'a ListingsPanel,
    listing: &'a Listing,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let height = Length::Fixed(sizing::CARD_IMAGE_HEIGHT);
    let image: Element<'a, Message> = match panel.card_image(listing.id) {
        Some(element) => picture::view(element, ctx.cache, ContentFit::Cover, Length::Fill, height),
        None => Container::new(Space::new())
            .width(Length::Fill)
            .height(height)
            .style(styles::container::image_frame)
            .into(),
    };

    let location = location_label(&listing.location).unwrap_or(listing.location.as_str());
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(image)
        .push(Text::new(listing.title.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr_with_args("listing-price", &[("price", listing.price.as_str())]))
                .size(typography::BODY)
                .color(palette::PRIMARY_600),
        )
        .push(
            Text::new(format!("{} · {location}", listing.category))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(
            Text::new(listing.date_created.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    mouse_area(
        Container::new(content)
            .padding(spacing::XS)
            .width(Length::FillPortion(1))
            .style(styles::container::card),
    )
    .on_release(Message::OpenListing(listing.id))
    .into()
}

fn view_pagination<'a>(panel: &'a ListingsPanel, i18n: &I18n) -> Element<'a, Message> {
    let page = panel.page();
    if page.num_pages <= 1 {
        return Space::new().into();
    }

    let previous = button(Text::new(i18n.tr("pagination-previous")).size(typography::BODY))
        .on_press_maybe(page.has_previous.then_some(panel_message(panel::Message::PreviousPage)))
        .style(styles::button::secondary);
    let next = button(Text::new(i18n.tr("pagination-next")).size(typography::BODY))
        .on_press_maybe(page.has_next.then_some(panel_message(panel::Message::NextPage)))
        .style(styles::button::secondary);

    let numbers = (1..=page.num_pages).fold(Row::new().spacing(spacing::XXS), |row, number| {
        let current = number == page.current_page;
        let style: fn(&Theme, button::Status) -> button::Style = if current {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        row.push(
            button(Text::new(number.to_string()).size(typography::BODY))
                .on_press_maybe((!current).then_some(panel_message(panel::Message::PageRequested(number))))
                .style(style),
        )
    });

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(previous)
            .push(numbers)
            .push(next)
            .push(
                Text::new(i18n.tr_with_args(
                    "pagination-page-of",
                    &[
                        ("page", &page.current_page.to_string()),
                        ("pages", &page.num_pages.to_string()),
                    ],
                ))
                .size(typography::CAPTION),
            ),
    )
    .width(Length::Fill)
    .padding([spacing::XS, 0.0])
    .align_x(Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn any_choice_comes_first() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let options = with_any(&i18n, "filter-location-all", std::iter::empty());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, ANY);
    }

    #[test]
    fn chip_labels_resolve_display_names() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let cache = ImageCache::default();
        let categories = vec![CategoryOption {
            id: "4".to_string(),
            name: "Electronics".to_string(),
        }];
        let ctx = ViewContext {
            i18n: &i18n,
            cache: &cache,
            categories: &categories,
        };
        let category = FilterChip {
            field: FilterField::Category,
            value: "4".to_string(),
        };
        let location = FilterChip {
            field: FilterField::Location,
            value: "HB_Town".to_string(),
        };
        assert!(chip_label(&category, &ctx).contains("Electronics"));
        assert!(chip_label(&location, &ctx).contains("Homa Bay Town"));
    }
}
