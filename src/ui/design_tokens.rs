// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the Smart workspace client.
//!
//! Centralizes the palette, spacing scale, typography sizes, and radii used
//! by every view. Components never hard-code colors or sizes; they pull
//! from here so light/dark theming stays consistent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Slate scale (surfaces and text)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const SLATE_900: Color = Color::from_rgb(0.06, 0.09, 0.16);
    pub const SLATE_800: Color = Color::from_rgb(0.12, 0.16, 0.23);
    pub const SLATE_700: Color = Color::from_rgb(0.2, 0.25, 0.33);
    pub const SLATE_400: Color = Color::from_rgb(0.58, 0.64, 0.72);
    pub const SLATE_200: Color = Color::from_rgb(0.89, 0.91, 0.94);
    pub const SLATE_100: Color = Color::from_rgb(0.95, 0.96, 0.98);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.38, 0.65, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.06, 0.73, 0.51);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
    pub const ERROR_500: Color = Color::from_rgb(0.86, 0.15, 0.15);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
    /// Badge tint for summary-kind review items.
    pub const ACCENT_500: Color = Color::from_rgb(0.66, 0.33, 0.97);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const BADGE_TINT: f32 = 0.15;
    pub const OVERLAY_STRONG: f32 = 0.7;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const SIDEBAR_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const CONTENT_MAX_WIDTH: f32 = 840.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY_SM: f32 = 14.0;
    pub const BODY: f32 = 16.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const TITLE: f32 = 22.0;
    pub const TITLE_LG: f32 = 28.0;
    pub const DISPLAY: f32 = 34.0;
}

// ============================================================================
// Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 16.0;
    pub const PILL: f32 = 999.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_doubles_from_xs_to_md() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn brand_palette_is_blue_dominant() {
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.g);
    }
}
