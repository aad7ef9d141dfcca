//! Render hints attached to particles and constraints.
//!
//! The kernel never draws. Styles are carried so a host renderer can read
//! them back alongside positions.

use crate::float::Float;

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |i: usize| -> Option<u8> {
            u8::from_str_radix(digits.get(i..i + 2)?, 16).ok()
        };
        match digits.len() {
            6 => Some(Rgba::opaque(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

/// Default particle fill.
pub const PARTICLE_COLOR: Rgba = Rgba::opaque(0x2d, 0xad, 0x8f);
/// Default stroke for distance-like constraints.
pub const LINK_COLOR: Rgba = Rgba::opaque(0xd8, 0xdd, 0xe2);
/// Default fill for pin markers (`rgba(0,153,255,0.1)`).
pub const PIN_COLOR: Rgba = Rgba::new(0, 153, 255, 26);
/// Default stroke for angle constraints (`rgba(255,255,0,0.2)`).
pub const ANGLE_COLOR: Rgba = Rgba::new(255, 255, 0, 51);

/// Optional per-particle style.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ParticleStyle<F: Float> {
    pub color: Option<Rgba>,
    /// Also used as the physical radius by collision and plane constraints.
    pub radius: Option<F>,
}

/// Optional per-constraint style.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ConstraintStyle<F: Float> {
    pub color: Option<Rgba>,
    pub line_width: Option<F>,
    pub radius: Option<F>,
}

/// A fully resolved style: every field has a value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderHint<F: Float> {
    pub color: Rgba,
    pub line_width: F,
    pub radius: F,
}

impl<F: Float> RenderHint<F> {
    pub(crate) fn resolve(style: Option<&ConstraintStyle<F>>, defaults: RenderHint<F>) -> Self {
        match style {
            None => defaults,
            Some(s) => RenderHint {
                color: s.color.unwrap_or(defaults.color),
                line_width: s.line_width.unwrap_or(defaults.line_width),
                radius: s.radius.unwrap_or(defaults.radius),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Rgba::from_hex("#2dad8f"), Some(PARTICLE_COLOR));
        assert_eq!(Rgba::from_hex("#0099ff1a"), Some(Rgba::new(0, 153, 255, 26)));
        assert_eq!(Rgba::from_hex("2dad8f"), None);
        assert_eq!(Rgba::from_hex("#2dad"), None);
        assert_eq!(Rgba::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn resolve_fills_missing_fields() {
        let defaults = RenderHint { color: LINK_COLOR, line_width: 1.0f32, radius: 0.0 };
        let style = ConstraintStyle { color: None, line_width: Some(3.0), radius: None };
        let hint = RenderHint::resolve(Some(&style), defaults);
        assert_eq!(hint.color, LINK_COLOR);
        assert_eq!(hint.line_width, 3.0);
        assert_eq!(RenderHint::resolve(None, defaults), defaults);
    }
}
