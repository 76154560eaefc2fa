// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: stage, arrows, counter, thumbnail strip, and toggles.

use crate::domain::gallery::GalleryId;
use crate::gallery::controller::{self, GalleryController, Stage};
use crate::gallery::page;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::components::picture;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Everything a gallery view reads besides the gallery itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub cache: &'a ImageCache,
}

fn gallery_message(id: GalleryId, msg: controller::Message) -> page::Message {
    page::Message::Gallery(id, msg)
}

/// Renders one gallery of a page.
pub fn view<'a>(
    id: GalleryId,
    gallery: &'a GalleryController,
    ctx: &ViewContext<'a>,
    focused: bool,
) -> Element<'a, page::Message> {
    if gallery.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .padding(spacing::MD)
            .into();
    }

    let capabilities = gallery.capabilities();
    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(view_stage(id, gallery, ctx));

    if capabilities.thumbnails && matches!(gallery.stage(), Stage::MainImage { .. }) {
        column = column.push(view_strip(id, gallery, ctx));
    }

    let mut toolbar = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if capabilities.zoom {
        let key = if gallery.is_zoomed() {
            "gallery-zoom-out"
        } else {
            "gallery-zoom-in"
        };
        toolbar = toolbar.push(
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .on_press(gallery_message(id, controller::Message::ToggleZoom))
                .style(styles::button::secondary),
        );
    }
    if capabilities.fullscreen {
        toolbar = toolbar.push(
            button(Text::new(ctx.i18n.tr("gallery-fullscreen")).size(typography::BODY))
                .on_press(gallery_message(id, controller::Message::OpenFullscreen))
                .style(styles::button::secondary),
        );
    }
    if focused {
        toolbar = toolbar.push(Space::new().width(Length::Fill)).push(
            Text::new(ctx.i18n.tr("gallery-focused-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    column = column.push(toolbar);

    mouse_area(column)
        .on_enter(page::Message::PointerEntered(id))
        .on_exit(page::Message::PointerLeft(id))
        .on_press(page::Message::Focus(id))
        .into()
}

fn view_stage<'a>(
    id: GalleryId,
    gallery: &'a GalleryController,
    ctx: &ViewContext<'a>,
) -> Element<'a, page::Message> {
    let capabilities = gallery.capabilities();
    let height = Length::Fixed(sizing::GALLERY_HEIGHT);

    let base: Element<'a, page::Message> = match (gallery.stage(), gallery.active_image()) {
        (Stage::MainImage { zoomed: true, image }, _) => Scrollable::new(picture::view(
            image,
            ctx.cache,
            ContentFit::None,
            Length::Shrink,
            Length::Shrink,
        ))
        .direction(iced::widget::scrollable::Direction::Both {
            vertical: iced::widget::scrollable::Scrollbar::new(),
            horizontal: iced::widget::scrollable::Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(height)
        .into(),
        (_, Some(image)) => {
            picture::view(image, ctx.cache, ContentFit::Contain, Length::Fill, height)
        }
        (_, None) => Space::new().width(Length::Fill).height(height).into(),
    };

    let mut stack = Stack::new().push(base);

    if capabilities.prev_next {
        let arrow = |glyph: &'static str, msg: controller::Message| {
            button(Text::new(glyph).size(typography::TITLE_SM))
                .width(Length::Fixed(sizing::NAV_BUTTON))
                .height(Length::Fixed(sizing::NAV_BUTTON))
                .on_press(gallery_message(id, msg))
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_HOVER,
                ))
        };
        stack = stack.push(
            Container::new(
                Row::new()
                    .push(arrow("◀", controller::Message::Previous))
                    .push(Space::new().width(Length::Fill))
                    .push(arrow("▶", controller::Message::Next)),
            )
            .width(Length::Fill)
            .height(height)
            .padding(spacing::SM)
            .align_y(Vertical::Center),
        );
    }

    if capabilities.counter {
        if let Some((position, count)) = gallery.position() {
            stack = stack.push(
                Container::new(
                    Container::new(
                        Text::new(format!("{position} / {count}")).size(typography::CAPTION),
                    )
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::overlay::indicator(radius::FULL)),
                )
                .width(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Right),
            );
        }
    }

    if let Stage::Slides(_) = gallery.stage() {
        if capabilities.thumbnails {
            stack = stack.push(
                Container::new(view_indicators(id, gallery))
                    .width(Length::Fill)
                    .height(height)
                    .padding(spacing::SM)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Bottom),
            );
        }
    }

    stack.into()
}

/// Thumbnail strip under a main image.
fn view_strip<'a>(
    id: GalleryId,
    gallery: &'a GalleryController,
    ctx: &ViewContext<'a>,
) -> Element<'a, page::Message> {
    let capabilities = gallery.capabilities();
    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);

    if capabilities.thumb_strip_nav {
        row = row.push(
            button(Text::new("‹").size(typography::TITLE_SM))
                .on_press(gallery_message(id, controller::Message::ThumbStripPrevious))
                .style(styles::button::secondary),
        );
    }

    let thumbs = gallery
        .thumbnails()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, thumbnail)| {
            let content: Element<'a, page::Message> = match &thumbnail.image {
                Some(element) => picture::view(
                    element,
                    ctx.cache,
                    ContentFit::Cover,
                    Length::Fixed(sizing::THUMBNAIL),
                    Length::Fixed(sizing::THUMBNAIL),
                ),
                None => Space::new()
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .into(),
            };
            row.push(
                button(content)
                    .padding(spacing::XXS)
                    .on_press(gallery_message(
                        id,
                        controller::Message::ThumbnailPressed(index),
                    ))
                    .style(styles::button::thumbnail(thumbnail.selected)),
            )
        });
    row = row.push(
        Scrollable::new(thumbs)
            .direction(iced::widget::scrollable::Direction::Horizontal(
                iced::widget::scrollable::Scrollbar::new(),
            ))
            .width(Length::Fill),
    );

    if capabilities.thumb_strip_nav {
        row = row.push(
            button(Text::new("›").size(typography::TITLE_SM))
                .on_press(gallery_message(id, controller::Message::ThumbStripNext))
                .style(styles::button::secondary),
        );
    }
    row.into()
}

fn view_indicators<'a>(id: GalleryId, gallery: &'a GalleryController) -> Element<'a, page::Message> {
    gallery
        .thumbnails()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, thumbnail)| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::INDICATOR))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .on_press(gallery_message(
                        id,
                        controller::Message::ThumbnailPressed(index),
                    ))
                    .style(styles::button::indicator(thumbnail.selected)),
            )
        })
        .into()
}
