use std::fmt;

use crate::foundation::error::{StudioError, StudioResult};

/// Accent swatches offered next to the accent color picker.
pub const ACCENT_SWATCHES: [&str; 4] = ["#5AC8FA", "#64D2FF", "#0A84FF", "#FF2D55"];

/// Base swatches offered next to the base color picker.
pub const BASE_SWATCHES: [&str; 4] = ["#0B0C10", "#0E1116", "#101216", "#111318"];

/// A `#RRGGBB` color string.
///
/// Only the format is checked; the casing of the digits is kept as written so that a value
/// survives a persistence or share round trip byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse `#RRGGBB` (the leading `#` is optional; case-insensitive).
    pub fn parse(s: &str) -> StudioResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StudioError::validation(format!(
                "color must be #RRGGBB, got \"{s}\""
            )));
        }
        Ok(Self(format!("#{digits}")))
    }

    /// Wrap a literal already known to be `#RRGGBB`.
    pub(crate) fn trusted(s: &str) -> Self {
        debug_assert!(Self::parse(s).is_ok(), "bad color literal {s}");
        Self(s.to_owned())
    }

    /// The color as written, always with a leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Channel values.
    pub fn rgb(&self) -> Rgb {
        // Format was checked on construction.
        Rgb::from_hex_lossy(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = StudioError;

    fn try_from(s: String) -> StudioResult<Self> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 8-bit sRGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, mapping anything unparseable to black.
    ///
    /// Render paths use this so that a bad color never stops a frame.
    pub fn from_hex_lossy(s: &str) -> Self {
        parse_rgb(s).unwrap_or(Self::BLACK)
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn parse_rgb(s: &str) -> Option<Rgb> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |pair: &str| u8::from_str_radix(pair, 16).ok();
    Some(Rgb {
        r: byte(&s[0..2])?,
        g: byte(&s[2..4])?,
        b: byte(&s[4..6])?,
    })
}

fn channel(x: f64) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

/// Linear blend from `a` to `b` by `p` (0 keeps `a`, 1 yields `b`).
pub fn mix(a: Rgb, b: Rgb, p: f64) -> Rgb {
    let lerp = |x: u8, y: u8| f64::from(x) + (f64::from(y) - f64::from(x)) * p;
    Rgb {
        r: channel(lerp(a.r, b.r)),
        g: channel(lerp(a.g, b.g)),
        b: channel(lerp(a.b, b.b)),
    }
}

/// Move `hex` toward white by `amt` percent.
pub fn tint(hex: &str, amt: f64) -> String {
    mix(Rgb::from_hex_lossy(hex), Rgb::WHITE, amt / 100.0).to_hex()
}

/// Move `hex` toward black by `amt` percent.
pub fn shade(hex: &str, amt: f64) -> String {
    mix(Rgb::from_hex_lossy(hex), Rgb::BLACK, amt / 100.0).to_hex()
}

/// CSS `rgba(r,g,b,a)` for `hex` at `alpha`.
pub fn rgba_css(hex: &str, alpha: f64) -> String {
    let Rgb { r, g, b } = Rgb::from_hex_lossy(hex);
    format!("rgba({r},{g},{b},{alpha})")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
