//! Colour palette shared by the chart renderers.

use plotters::style::RGBColor;

pub const TEAL: RGBColor = RGBColor(0x1F, 0xB8, 0xCD);
pub const SEA_GREEN: RGBColor = RGBColor(0x2E, 0x8B, 0x57);
pub const CORAL_RED: RGBColor = RGBColor(0xDB, 0x45, 0x45);
pub const SLATE: RGBColor = RGBColor(0x5D, 0x87, 0x8F);
pub const MUSTARD: RGBColor = RGBColor(0xD2, 0xBA, 0x4C);
pub const BRICK: RGBColor = RGBColor(0xB4, 0x41, 0x3C);
pub const RUST: RGBColor = RGBColor(0x96, 0x43, 0x25);
pub const MULBERRY: RGBColor = RGBColor(0x94, 0x44, 0x54);
pub const DEEP_TEAL: RGBColor = RGBColor(0x13, 0x34, 0x3B);
pub const OFF_WHITE: RGBColor = RGBColor(0xF9, 0xF9, 0xF9);

pub const INK: RGBColor = RGBColor(0x33, 0x33, 0x33); // Connectors, borders
pub const EDGE_GRAY: RGBColor = RGBColor(0xCC, 0xCC, 0xCC);
pub const GRID_GRAY: RGBColor = RGBColor(0xD3, 0xD3, 0xD3);
pub const CAPTION_GRAY: RGBColor = RGBColor(0x80, 0x80, 0x80);

pub const TEXT_LIGHT: RGBColor = RGBColor(0xFF, 0xFF, 0xFF);
pub const TEXT_DARK: RGBColor = RGBColor(0x00, 0x00, 0x00);

/// Fills at or above this luma get dark text.
pub const LIGHT_FILL_LUMA: f64 = 0.65;

/// Perceived brightness in `[0, 1]` (Rec. 601 weights).
pub fn luma(color: RGBColor) -> f64 {
    let RGBColor(r, g, b) = color;
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0
}

/// Label colour readable on `fill`: white on saturated fills, black on light ones.
pub fn contrast_text(fill: RGBColor) -> RGBColor {
    if luma(fill) >= LIGHT_FILL_LUMA {
        TEXT_DARK
    } else {
        TEXT_LIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(TEXT_DARK), 0.0);
        assert!((luma(TEXT_LIGHT) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_light_fills_get_dark_text() {
        assert_eq!(contrast_text(OFF_WHITE), TEXT_DARK);
        assert_eq!(contrast_text(MUSTARD), TEXT_DARK);
    }

    #[test]
    fn test_saturated_fills_get_light_text() {
        for fill in [TEAL, SEA_GREEN, CORAL_RED, SLATE, BRICK, RUST, MULBERRY, DEEP_TEAL] {
            assert_eq!(contrast_text(fill), TEXT_LIGHT, "{:?}", fill);
        }
    }
}
