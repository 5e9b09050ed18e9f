// SPDX-License-Identifier: MIT
//
// Color distance model: hex colors, HSL, and distances on the hue wheel.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// convention in color science and are kept here on purpose.
//
// Every theme in the catalog is keyed by one representative color. The
// rotation engine only ever asks two questions about it:
//
//   1. Where does this color sit on the hue wheel?   → `Rgb::hue`
//   2. How far apart are two positions on the wheel? → `hue_distance`
//
// The wheel is a circle of circumference 360, so distance is measured
// the short way round: 350° and 10° are 20° apart, not 340°.

use std::fmt;
use std::str::FromStr;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color string that is not six hex digits (optionally prefixed by `#`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Wrong number of digits after stripping the optional `#`.
    #[error("expected 6 hex digits in {input:?}, found {len}")]
    InvalidLength { input: String, len: usize },

    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit {digit:?} in {input:?}")]
    InvalidDigit { input: String, digit: char },
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// This is also the "RGB channel triple" the style layer composes with an
/// opacity, e.g. `rgba(139, 92, 246, 0.2)`; see [`Rgb::triple`].
///
/// # Examples
///
/// ```
/// use rotor_color::Rgb;
///
/// let violet = Rgb::parse("#8B5CF6")?;
/// assert_eq!(violet, Rgb::new(139, 92, 246));
/// assert_eq!(violet.triple(), "139, 92, 246");
/// assert!((violet.hue() - 258.3).abs() < 0.1);
/// # Ok::<(), rotor_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `RRGGBB` color (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidLength`] unless exactly six digits
    /// remain after the optional `#`, and [`ColorError::InvalidDigit`] for
    /// any non-hex character.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let len = digits.chars().count();
        if len != 6 {
            return Err(ColorError::InvalidLength {
                input: s.to_string(),
                len,
            });
        }

        let mut channels = [0u8; 3];
        let mut chars = digits.chars();
        for channel in &mut channels {
            let hi = hex_digit(s, chars.next())?;
            let lo = hex_digit(s, chars.next())?;
            *channel = hi << 4 | lo;
        }

        Ok(Self::new(channels[0], channels[1], channels[2]))
    }

    /// Channels normalized to `[0.0, 1.0]`.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Whether all three channels are equal (gray, black, white).
    #[inline]
    #[must_use]
    pub const fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Hue angle in degrees, always in `[0, 360)`.
    ///
    /// Uses the max-channel / chroma definition: the sector is chosen by
    /// whichever channel is largest, and the offset inside the sector by
    /// the other two. Achromatic colors have no hue and report `0.0`.
    #[must_use]
    pub fn hue(self) -> f64 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        if max == min {
            return 0.0;
        }

        let (r, g, b) = self.to_unit();
        let chroma = f64::from(max - min) / 255.0;

        // Max channel decides the sector (R: 0, G: 2, B: 4 in units of 60°).
        let sector = if max == self.r {
            ((g - b) / chroma).rem_euclid(6.0)
        } else if max == self.g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };

        normalize_hue(sector * 60.0)
    }

    /// Full HSL conversion.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = self.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if self.is_achromatic() {
            return Hsl { h: 0.0, s: 0.0, l: l * 100.0 };
        }

        let chroma = max - min;
        let s = chroma / (1.0 - 2.0f64.mul_add(l, -1.0).abs());

        Hsl {
            h: self.hue(),
            s: (s * 100.0).clamp(0.0, 100.0),
            l: l * 100.0,
        }
    }

    /// The channels as `"r, g, b"`, ready to be wrapped in `rgba(…, alpha)`.
    #[must_use]
    pub fn triple(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[inline]
fn hex_digit(input: &str, c: Option<char>) -> Result<u8, ColorError> {
    // Length was checked by the caller, so `None` cannot happen in practice.
    let c = c.unwrap_or('\0');
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidDigit {
            input: input.to_string(),
            digit: c,
        }),
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Hue / saturation / lightness.
///
/// - `h`: degrees in `[0, 360)`
/// - `s`: percent in `[0, 100]`
/// - `l`: percent in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

// ─── Hue wheel ───────────────────────────────────────────────────────────────

/// Wrap any angle into `[0, 360)`.
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Shortest angular distance between two hues, in `[0, 180]`.
///
/// Symmetric, and zero exactly when the hues coincide modulo 360.
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_hue(a) - normalize_hue(b)).abs();
    d.min(360.0 - d)
}

/// Parse a hex color and return its hue.
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a six-digit hex color.
pub fn hex_to_hue(hex: &str) -> Result<f64, ColorError> {
    Rgb::parse(hex).map(Rgb::hue)
}

/// Parse a hex color and return its HSL representation.
///
/// # Errors
///
/// Returns a [`ColorError`] if `hex` is not a six-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Rgb::parse(hex).map(Rgb::to_hsl)
}

/// Hue distance between two hex colors.
///
/// # Errors
///
/// Returns the first [`ColorError`] encountered.
pub fn hue_difference(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(hue_distance(hex_to_hue(a)?, hex_to_hue(b)?))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
