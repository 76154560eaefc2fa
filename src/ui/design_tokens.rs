// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the listings grid, gallery, and fullscreen
overlay.

## Organization

- **Palette**: Base colors (brand green of the storefront)
- **Opacity**: Overlay and surface transparency levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Thumbnails, cards, controls
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use souq_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
let gap = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);

    // Brand colors (green scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.86, 0.96, 0.9);
    pub const PRIMARY_400: Color = Color::from_rgb(0.3, 0.75, 0.5);
    pub const PRIMARY_500: Color = Color::from_rgb(0.16, 0.65, 0.4);
    pub const PRIMARY_600: Color = Color::from_rgb(0.1, 0.55, 0.33);

    // Favorite accent
    pub const FAVORITE_500: Color = Color::from_rgb(0.9, 0.25, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Fullscreen overlay backdrop.
    pub const BACKDROP: f32 = 0.92;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Square thumbnail in a gallery strip.
    pub const THUMBNAIL: f32 = 72.0;

    /// Slide indicator dot of a carousel.
    pub const INDICATOR: f32 = 10.0;

    /// Image area of a listing card.
    pub const CARD_IMAGE_HEIGHT: f32 = 180.0;

    /// Main image area of a detail gallery.
    pub const GALLERY_HEIGHT: f32 = 420.0;

    /// Square prev/next arrow button.
    pub const NAV_BUTTON: f32 = 44.0;

    pub const FILTER_SIDEBAR_WIDTH: f32 = 260.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings.
    pub const TITLE_LG: f32 = 26.0;

    /// Card titles, listing title on the detail page.
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body text.
    pub const BODY: f32 = 14.0;

    /// Badges, counters, dates.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(sizing::THUMBNAIL > sizing::INDICATOR);
    assert!(sizing::GALLERY_HEIGHT > sizing::CARD_IMAGE_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn card_fits_in_grid_row() {
        assert!(sizing::CARD_IMAGE_HEIGHT < crate::config::GRID_ROW_HEIGHT);
    }
}
