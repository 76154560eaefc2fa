// SPDX-License-Identifier: MPL-2.0
//! Renders an image element from the decoded image cache.

use crate::gallery::fallback::{ImageElement, LoadStatus};
use crate::media::ImageCache;
use crate::ui::design_tokens::typography;
use crate::ui::styles::container as container_styles;
use iced::widget::{image, text, Container};
use iced::{alignment, ContentFit, Element, Length};

/// Shows `element`'s image when decoded, otherwise a frame with a status glyph.
pub fn view<'a, Message: 'a>(
    element: &ImageElement,
    cache: &ImageCache,
    fit: ContentFit,
    width: Length,
    height: Length,
) -> Element<'a, Message> {
    if let Some(data) = element.src().and_then(|src| cache.peek(src)) {
        return image(data.handle.clone())
            .content_fit(fit)
            .width(width)
            .height(height)
            .into();
    }

    let glyph = match element.status() {
        LoadStatus::Failed => "⚠",
        LoadStatus::Idle | LoadStatus::Loading | LoadStatus::Loaded => "…",
    };
    Container::new(text(glyph).size(typography::TITLE_SM))
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::image_frame)
        .into()
}
