//! Normalized RGBA color with byte and packed-hex conversion.

/// An RGBA color with each channel in `[0, 1]`.
///
/// Pure value type. Convertible to and from 0–255 channels and 32-bit packed
/// `AARRGGBB` hex.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from normalized channels. Values are not clamped.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from normalized channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 0–255 channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from packed `AARRGGBB` hex.
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgb8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            ((hex >> 24) & 0xFF) as u8,
        )
    }

    /// Pack into `AARRGGBB` hex. Channels are clamped then rounded.
    pub fn to_hex(self) -> u32 {
        let quant = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (quant(self.a) << 24) | (quant(self.r) << 16) | (quant(self.g) << 8) | quant(self.b)
    }

    /// Whether this color contributes any ink when painted.
    #[inline]
    pub fn is_visible(self) -> bool {
        self.a > 0.0
    }

    /// Linear interpolation between `self` and `other` by `t` in `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Color = Color::rgb(0.75, 0.75, 0.75);
    pub const DARK_GRAY: Color = Color::rgb(0.25, 0.25, 0.25);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const BROWN: Color = Color::rgb(0.6, 0.3, 0.0);
    pub const PINK: Color = Color::rgb(1.0, 0.75, 0.8);
    pub const NAVY: Color = Color::rgb(0.0, 0.0, 0.5);
    pub const TEAL: Color = Color::rgb(0.0, 0.5, 0.5);
    pub const OLIVE: Color = Color::rgb(0.5, 0.5, 0.0);
    pub const MAROON: Color = Color::rgb(0.5, 0.0, 0.0);
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb8_normalizes() {
        let c = Color::from_rgb8(255, 0, 128, 255);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn hex_unpack() {
        let c = Color::from_hex(0xFF112233);
        assert_eq!(c.to_hex(), 0xFF112233);
        assert!((c.r - 0x11 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn hex_round_trip_quantized() {
        // Every channel combination over a coarse grid survives the
        // byte -> hex -> byte round trip exactly.
        for &r in &[0u8, 64, 128, 255] {
            for &g in &[0u8, 64, 128, 255] {
                for &b in &[0u8, 64, 128, 255] {
                    for &a in &[0u8, 64, 128, 255] {
                        let hex = Color::from_rgb8(r, g, b, a).to_hex();
                        let back = Color::from_hex(hex);
                        assert_eq!(back.to_hex(), hex, "rgba({r},{g},{b},{a})");
                    }
                }
            }
        }
    }

    #[test]
    fn to_hex_clamps() {
        let c = Color::new(2.0, -1.0, 0.5, 1.0);
        let hex = c.to_hex();
        assert_eq!((hex >> 16) & 0xFF, 255);
        assert_eq!((hex >> 8) & 0xFF, 0);
    }

    #[test]
    fn visibility() {
        assert!(!Color::TRANSPARENT.is_visible());
        assert!(Color::WHITE.is_visible());
        assert!(Color::new(0.0, 0.0, 0.0, 0.01).is_visible());
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5).r, 0.5);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Color::RED.to_hex(), 0xFFFF0000);
        assert_eq!(Color::BLUE.to_hex(), 0xFF0000FF);
        assert_eq!(Color::TRANSPARENT.to_hex(), 0x00000000);
    }
}
