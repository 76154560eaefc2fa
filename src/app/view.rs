// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The current screen is the bottom layer; the fullscreen overlay, when
//! open, and the toasts are stacked above it.

use super::screen::{Detail, Screen};
use super::Message;
use crate::config::CategoryOption;
use crate::gallery::GalleryPage;
use crate::i18n::fluent::I18n;
use crate::listings::filter::location_label;
use crate::listings::{favorite, ListingsPanel};
use crate::media::ImageCache;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::{fullscreen_view, gallery_view, listings_view, styles};
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub panel: &'a ListingsPanel,
    pub page: &'a GalleryPage,
    pub detail: Option<&'a Detail>,
    pub cache: &'a ImageCache,
    pub categories: &'a [CategoryOption],
    pub notifications: &'a notifications::Manager,
}

/// Renders the current screen with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current: Element<'_, Message> = match ctx.screen {
        Screen::Listings => listings_view::view(
            ctx.panel,
            &listings_view::ViewContext {
                i18n: ctx.i18n,
                cache: ctx.cache,
                categories: ctx.categories,
            },
        )
        .map(Message::Listings),
        Screen::Detail => match ctx.detail {
            Some(detail) => view_detail(detail, &ctx),
            None => Space::new().into(),
        },
        Screen::Gallery => view_galleries(&ctx),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current);

    if ctx.screen != Screen::Listings {
        if let Some(overlay) = ctx.page.overlay() {
            layers = layers.push(
                fullscreen_view::view(overlay, ctx.i18n, ctx.cache).map(Message::Gallery),
            );
        }
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_galleries<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gallery_ctx = gallery_view::ViewContext {
        i18n: ctx.i18n,
        cache: ctx.cache,
    };
    let focused = ctx.page.focused();
    let column = ctx
        .page
        .galleries()
        .fold(Column::new().spacing(spacing::LG), |column, (id, gallery)| {
            column.push(
                gallery_view::view(id, gallery, &gallery_ctx, focused == Some(id))
                    .map(Message::Gallery),
            )
        });

    Scrollable::new(Container::new(column).padding(spacing::MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_detail<'a>(detail: &'a Detail, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let listing = &detail.listing;

    let back = button(Text::new(i18n.tr("detail-back")).size(typography::BODY))
        .on_press(Message::BackToListings)
        .style(styles::button::secondary);

    let favorite_button = button(Text::new(detail.favorite.label(i18n)).size(typography::BODY))
        .on_press_maybe(
            (!detail.favorite.is_pending())
                .then_some(Message::Favorite(favorite::Message::Pressed)),
        )
        .style(styles::button::favorite(detail.favorite.is_favorited()));

    let location = location_label(&listing.location).unwrap_or(listing.location.as_str());
    let info = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(listing.title.as_str()).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr_with_args("listing-price", &[("price", listing.price.as_str())]))
                .size(typography::TITLE_SM)
                .color(palette::PRIMARY_600),
        )
        .push(
            Text::new(format!("{} · {location} · {}", listing.category, listing.date_created))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let gallery: Element<'a, Message> = match detail
        .gallery
        .and_then(|id| ctx.page.gallery(id).map(|gallery| (id, gallery)))
    {
        Some((id, gallery)) => gallery_view::view(
            id,
            gallery,
            &gallery_view::ViewContext {
                i18n,
                cache: ctx.cache,
            },
            ctx.page.focused() == Some(id),
        )
        .map(Message::Gallery),
        None => Text::new(i18n.tr("gallery-empty"))
            .size(typography::BODY)
            .into(),
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(back)
                .push(Space::new().width(Length::Fill))
                .push(favorite_button),
        )
        .push(gallery)
        .push(info);

    Scrollable::new(Container::new(content).padding(spacing::MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
