//! Hex color parsing for overlay tints

use once_cell::sync::Lazy;

/// Default highlight tint (#1397C5)
pub static DEFAULT_HIGHLIGHT_COLOR: Lazy<Color> = Lazy::new(|| Color::from_hex("#1397C5"));

/// RGBA color with components normalized to [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string.
    ///
    /// Non-alphanumeric characters (a leading `#`, whitespace) are stripped
    /// before parsing. Accepted digit counts: 3 (RGB, each nibble scaled by
    /// 17), 6 (RGB) and 8 (ARGB). Anything else, including non-hex digits,
    /// yields fully transparent rather than an error.
    pub fn from_hex(text: &str) -> Color {
        let hex: String = text.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

        let value = match u32::from_str_radix(&hex, 16) {
            Ok(v) => v,
            Err(_) => return Color::TRANSPARENT,
        };

        let (a, r, g, b) = match hex.len() {
            3 => (
                255,
                (value >> 8) * 17,
                (value >> 4 & 0xF) * 17,
                (value & 0xF) * 17,
            ),
            6 => (255, value >> 16, value >> 8 & 0xFF, value & 0xFF),
            8 => (
                value >> 24,
                value >> 16 & 0xFF,
                value >> 8 & 0xFF,
                value & 0xFF,
            ),
            _ => return Color::TRANSPARENT,
        };

        Color::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Convert to 8-bit RGBA channels
    pub fn rgba8(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex() {
        let c = Color::from_hex("#1397C5");
        assert_eq!(c.rgba8(), [0x13, 0x97, 0xC5, 0xFF]);
    }

    #[test]
    fn three_digit_hex_scales_nibbles_by_17() {
        let c = Color::from_hex("abc");
        assert_eq!(c.rgba8(), [0xA * 17, 0xB * 17, 0xC * 17, 0xFF]);
    }

    #[test]
    fn eight_digit_hex_is_argb() {
        let c = Color::from_hex("80FF0000");
        assert_eq!(c.rgba8(), [0xFF, 0x00, 0x00, 0x80]);
    }

    #[test]
    fn invalid_input_degrades_to_transparent() {
        assert_eq!(Color::from_hex(""), Color::TRANSPARENT);
        assert_eq!(Color::from_hex("#12345"), Color::TRANSPARENT);
        assert_eq!(Color::from_hex("zzzzzz"), Color::TRANSPARENT);
    }

    #[test]
    fn default_highlight_is_1397c5() {
        assert_eq!(DEFAULT_HIGHLIGHT_COLOR.rgba8(), [0x13, 0x97, 0xC5, 0xFF]);
    }
}
