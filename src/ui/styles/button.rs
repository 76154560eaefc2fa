// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main action (apply filters, reload).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Secondary action and unselected toggles (reset, page numbers, chips).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Prev/next arrows drawn over an image.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Gallery thumbnail frame, highlighted when selected.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = match (selected, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: if selected { 3.0 } else { 2.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Carousel slide indicator dot.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (active, status) {
            (true, _) => opacity::OPAQUE,
            (false, button::Status::Hovered) => opacity::OVERLAY_HOVER,
            (false, _) => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Favorite toggle: filled accent when favorited.
pub fn favorite(favorited: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if favorited {
            button::Style {
                background: Some(Background::Color(palette::FAVORITE_500)),
                text_color: WHITE,
                border: Border {
                    color: palette::FAVORITE_500,
                    width: 1.0,
                    radius: radius::FULL.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        } else {
            let mut style = secondary(theme, status);
            style.border.radius = radius::FULL.into();
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn selected_thumbnail_has_brand_border() {
        let style = thumbnail(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        let idle = thumbnail(false)(&Theme::Light, button::Status::Active);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn favorited_button_uses_accent() {
        let style = favorite(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::FAVORITE_500)));
    }
}
