// SPDX-License-Identifier: MPL-2.0
//! Fullscreen overlay drawn above the page.

use crate::gallery::fullscreen::{self, FullscreenOverlay};
use crate::gallery::page;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::components::picture;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

fn overlay_message(msg: fullscreen::Message) -> page::Message {
    page::Message::Overlay(msg)
}

fn nav_button<'a>(glyph: &'a str, msg: fullscreen::Message) -> Element<'a, page::Message> {
    button(Text::new(glyph).size(typography::TITLE_LG))
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .on_press(overlay_message(msg))
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_HOVER,
        ))
        .into()
}

/// Backdrop, current image, close and arrow buttons, and the counter.
pub fn view<'a>(
    overlay: &'a FullscreenOverlay,
    i18n: &I18n,
    cache: &ImageCache,
) -> Element<'a, page::Message> {
    let top = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(overlay.counter_text()).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::FULL)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("fullscreen-close")).size(typography::BODY))
                .on_press(overlay_message(fullscreen::Message::Close))
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_SUBTLE,
                    opacity::OVERLAY_HOVER,
                )),
        );

    let mut middle = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .height(Length::Fill);
    let multiple = overlay.images().len() > 1;
    if multiple {
        middle = middle.push(nav_button("◀", fullscreen::Message::Previous));
    }
    middle = middle.push(picture::view(
        overlay.image(),
        cache,
        ContentFit::Contain,
        Length::Fill,
        Length::Fill,
    ));
    if multiple {
        middle = middle.push(nav_button("▶", fullscreen::Message::Next));
    }

    let backdrop = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(top)
            .push(middle),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Center)
    .style(styles::overlay::backdrop);

    // Capture presses so the galleries underneath stay untouched.
    mouse_area(backdrop)
        .on_press(overlay_message(fullscreen::Message::BackdropPressed))
        .into()
}
