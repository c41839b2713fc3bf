// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens.

## Organization

- **Palette**: Brand colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use leaf_loaf::ui::design_tokens::{palette, spacing, with_alpha};

// A translucent pill background
let pill_bg = with_alpha(palette::BLUE_100, 0.5);

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

/// Returns `color` with its alpha channel replaced.
///
/// The translucency helper the components lean on for tinted surfaces,
/// struck-through prices, and divider lines.
#[must_use]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale / neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const NEUTRAL_200: Color = Color::from_rgb8(0xE5, 0xE5, 0xE5);
    pub const NEUTRAL_300: Color = Color::from_rgb8(0xCC, 0xCC, 0xCC);
    pub const NEUTRAL_400: Color = Color::from_rgb8(0xB3, 0xB3, 0xB3);

    // Accent scales
    pub const BLUE_100: Color = Color::from_rgb8(0xAE, 0xC6, 0xDA);
    pub const BLUE_200: Color = Color::from_rgb8(0x5C, 0x8C, 0xB5);
    pub const ORANGE_100: Color = Color::from_rgb8(0xE0, 0xB4, 0x80);
    pub const ORANGE_200: Color = Color::from_rgb8(0xC3, 0x80, 0x30);
    pub const ORANGE_300: Color = Color::from_rgb8(0x9B, 0x66, 0x26);

    // Text scale (warm browns)
    pub const BROWN_300: Color = Color::from_rgb8(0x48, 0x30, 0x12);
    pub const BROWN_400: Color = Color::from_rgb8(0x21, 0x16, 0x08);

    // Background surfaces
    pub const CREAM_100: Color = Color::from_rgb8(0xF5, 0xEF, 0xE8);
    pub const GRADIENT_TOP: Color = Color::from_rgb8(0xD2, 0xE0, 0xE6);
    pub const GRADIENT_BOTTOM: Color = Color::from_rgb8(0xF6, 0xEB, 0xAB);
    pub const GREEN_300: Color = Color::from_rgb8(0x45, 0x4E, 0x3E);

    // Semantic colors
    pub const RED_200: Color = Color::from_rgb8(0xDE, 0x20, 0x31);
    pub const RED_300: Color = Color::from_rgb8(0xCC, 0x12, 0x22);

    // App-level aliases
    pub const BACKGROUND: Color = WHITE;
    pub const WELCOME_BACKGROUND: Color = BROWN_400;
    pub const HEADING: Color = BROWN_400;
    pub const BUTTON_PRIMARY: Color = BLACK;
    pub const BUTTON_PRIMARY_TEXT: Color = WHITE;
    pub const ACTIVE_INPUT: Color = ORANGE_300;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Body text relative to heading color.
    pub const BODY_TEXT: f32 = 0.7;
    /// Disabled controls.
    pub const DISABLED: f32 = 0.5;
    /// Tinted pill backgrounds.
    pub const PILL: f32 = 0.5;
    /// Struck-through original prices.
    pub const MUTED_PRICE: f32 = 0.3;
    /// Hairline dividers.
    pub const DIVIDER: f32 = 0.1;
    /// Modal scrim behind alerts.
    pub const SCRIM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 2.0;
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 60.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Product thumbnail edge length.
    pub const CARD_IMAGE: f32 = 32.0;
    /// Placeholder glyph inside an empty thumbnail.
    pub const CARD_IMAGE_PLACEHOLDER: f32 = 16.0;
    /// Round add-button on recommendation cards.
    pub const ADD_BUTTON: f32 = 24.0;
    /// Minimum height of primary/secondary buttons.
    pub const BUTTON_MIN_HEIGHT: f32 = 52.0;
    /// Onboarding progress dot diameter.
    pub const PROGRESS_DOT: f32 = 8.0;
    /// Note card tile width/height in the notes grid.
    pub const NOTE_CARD_WIDTH: f32 = 102.0;
    pub const NOTE_CARD_HEIGHT: f32 = 93.0;
    /// Widest a modal alert is allowed to grow.
    pub const ALERT_MAX_WIDTH: f32 = 400.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const H2: f32 = 28.0;
    pub const H3: f32 = 24.0;
    pub const H4: f32 = 20.0;
    pub const H5: f32 = 16.0;
    pub const B1: f32 = 14.0;
    pub const B2: f32 = 12.0;
    pub const B3: f32 = 10.0;
    pub const L2: f32 = 8.0;
    pub const L3: f32 = 6.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    /// Fully rounded (pills, round buttons).
    pub const FULL: f32 = 50.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector { x: 0.0, y: 0.0 },
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba8(0x21, 0x16, 0x08, 0.12),
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_only_touches_the_alpha_channel() {
        let tinted = with_alpha(palette::ORANGE_200, 0.3);
        assert_eq!(tinted.r, palette::ORANGE_200.r);
        assert_eq!(tinted.g, palette::ORANGE_200.g);
        assert_eq!(tinted.b, palette::ORANGE_200.b);
        assert_eq!(tinted.a, 0.3);
    }

    #[test]
    fn spacing_scale_is_monotonic() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
        assert!(spacing::SM < spacing::MD);
        assert!(spacing::MD < spacing::LG);
        assert!(spacing::LG < spacing::XL);
        assert!(spacing::XL < spacing::XXL);
    }

    #[test]
    fn opacity_levels_are_fractions() {
        for level in [
            opacity::BODY_TEXT,
            opacity::DISABLED,
            opacity::PILL,
            opacity::MUTED_PRICE,
            opacity::DIVIDER,
            opacity::SCRIM,
        ] {
            assert!(level > 0.0 && level < 1.0);
        }
    }
}
