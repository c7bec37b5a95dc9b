//! Hex colors and the page palette

use crate::error::ColorError;

/// sRGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Cloud cyan
pub const CYAN: Color = Color::from_rgb_u32(0x00d4ff);
/// Data-node violet
pub const VIOLET: Color = Color::from_rgb_u32(0x8b5cf6);
/// Connectivity blue
pub const BLUE: Color = Color::from_rgb_u32(0x3b82f6);
pub const TEAL: Color = Color::from_rgb_u32(0x06b6d4);
/// Background fog
pub const FOG: Color = Color::from_rgb_u32(0x0a0a1a);
pub const WHITE: Color = Color::from_rgb_u32(0xffffff);
pub const BLACK: Color = Color::from_rgb_u32(0x000000);

/// Accent colors, cycled by index
pub const ACCENT_PALETTE: [Color; 4] = [CYAN, VIOLET, BLUE, TEAL];

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from a packed `0xRRGGBB` value
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ColorError::Length(hex.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(hex.to_string()));
        }
        let rgb = u32::from_str_radix(digits, 16).map_err(|_| ColorError::Digit(hex.to_string()))?;
        Ok(Self::from_rgb_u32(rgb))
    }

    /// `#rrggbb` representation
    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }

    /// Component-wise linear value for shading
    pub fn to_linear(&self) -> [f32; 3] {
        fn convert(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [convert(self.r), convert(self.g), convert(self.b)]
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn with_alpha(&self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }

    pub fn scaled(&self, factor: f32) -> Color {
        Color::new(self.r * factor, self.g * factor, self.b * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::from_hex("#00d4ff").unwrap(), CYAN);
        assert_eq!(Color::from_hex("8b5cf6").unwrap(), VIOLET);
        assert_eq!(CYAN.to_hex(), "#00d4ff");
        assert_eq!(FOG.to_hex(), "#0a0a1a");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Color::from_hex("#fff"),
            Err(ColorError::Length("#fff".to_string()))
        );
        assert_eq!(
            Color::from_hex("#zzzzzz"),
            Err(ColorError::Digit("#zzzzzz".to_string()))
        );
    }

    #[test]
    fn test_linear_conversion_bounds() {
        assert_eq!(BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let white = WHITE.to_linear();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-5));
    }
}
