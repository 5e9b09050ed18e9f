//! Theme records: declared once as static text, validated once, never mutated.
//!
//! A [`ThemeSpec`] is the catalog's source form: every field is a string,
//! exactly as a designer would write it. [`Theme::from_spec`] parses the
//! colors, checks that nothing is blank, derives the RGB triples, and
//! caches the primary hue used for ordering. Everything downstream works
//! on validated [`Theme`]s, so the style layer never has to special-case
//! a missing field.

use rotor_color::{ColorError, Rgb};

use crate::order::Hued;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a [`ThemeSpec`] could not become a [`Theme`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A color field is not a six-digit hex color.
    #[error("theme {theme:?}: field `{field}` is not a valid color")]
    Format {
        theme: String,
        field: &'static str,
        #[source]
        source: ColorError,
    },

    /// A required field is empty.
    #[error("theme {theme:?} is missing required field `{field}`")]
    Incomplete { theme: String, field: &'static str },
}

// ---------------------------------------------------------------------------
// ThemeSpec
// ---------------------------------------------------------------------------

/// Source form of a theme: every field as text.
///
/// Colors are `#RRGGBB` strings; composites (gradients) are CSS values
/// passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSpec<'a> {
    pub name: &'a str,
    pub primary: &'a str,
    pub primary_light: &'a str,
    pub secondary: &'a str,
    pub accent: &'a str,
    /// Primary gradient (buttons, logo, section underline).
    pub gradient: &'a str,
    /// One color per glow orb.
    pub glow: [&'a str; 3],
    /// Page, secondary and tertiary background shades.
    pub background: [&'a str; 3],
    pub bg_gradient: &'a str,
    pub nav_gradient: &'a str,
    pub section_gradients: [&'a str; 2],
}

const GLOW_FIELDS: [&str; 3] = ["glow[0]", "glow[1]", "glow[2]"];
const BACKGROUND_FIELDS: [&str; 3] = ["background[0]", "background[1]", "background[2]"];
const SECTION_FIELDS: [&str; 2] = ["section_gradients[0]", "section_gradients[1]"];

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A validated, immutable theme.
///
/// Fields are read through accessors; there is no way to change a theme
/// after [`from_spec`](Self::from_spec), so the cached hue can never go
/// stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    primary: Rgb,
    primary_light: Rgb,
    secondary: Rgb,
    accent: Rgb,
    gradient: String,
    glow: [Rgb; 3],
    background: [Rgb; 3],
    bg_gradient: String,
    nav_gradient: String,
    section_gradients: [String; 2],
    hue: f64,
}

impl Theme {
    /// Validate a spec and build the theme.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::Incomplete`] if any field is blank.
    /// - [`ThemeError::Format`] if a color field is not a hex color.
    pub fn from_spec(spec: &ThemeSpec<'_>) -> Result<Self, ThemeError> {
        let name = spec.name.trim();
        if name.is_empty() {
            return Err(ThemeError::Incomplete {
                theme: String::new(),
                field: "name",
            });
        }

        let v = Validator { theme: name };

        let primary = v.color("primary", spec.primary)?;
        let glow = [
            v.color(GLOW_FIELDS[0], spec.glow[0])?,
            v.color(GLOW_FIELDS[1], spec.glow[1])?,
            v.color(GLOW_FIELDS[2], spec.glow[2])?,
        ];
        let background = [
            v.color(BACKGROUND_FIELDS[0], spec.background[0])?,
            v.color(BACKGROUND_FIELDS[1], spec.background[1])?,
            v.color(BACKGROUND_FIELDS[2], spec.background[2])?,
        ];

        Ok(Self {
            name: name.to_string(),
            primary,
            primary_light: v.color("primary_light", spec.primary_light)?,
            secondary: v.color("secondary", spec.secondary)?,
            accent: v.color("accent", spec.accent)?,
            gradient: v.composite("gradient", spec.gradient)?,
            glow,
            background,
            bg_gradient: v.composite("bg_gradient", spec.bg_gradient)?,
            nav_gradient: v.composite("nav_gradient", spec.nav_gradient)?,
            section_gradients: [
                v.composite(SECTION_FIELDS[0], spec.section_gradients[0])?,
                v.composite(SECTION_FIELDS[1], spec.section_gradients[1])?,
            ],
            hue: primary.hue(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The representative color; ordering is keyed on its hue.
    #[must_use]
    pub const fn primary(&self) -> Rgb {
        self.primary
    }

    #[must_use]
    pub const fn primary_light(&self) -> Rgb {
        self.primary_light
    }

    #[must_use]
    pub const fn secondary(&self) -> Rgb {
        self.secondary
    }

    #[must_use]
    pub const fn accent(&self) -> Rgb {
        self.accent
    }

    #[must_use]
    pub fn gradient(&self) -> &str {
        &self.gradient
    }

    /// Glow orb color `i` (0, 1 or 2).
    #[must_use]
    pub const fn glow(&self, i: usize) -> Rgb {
        self.glow[i % 3]
    }

    /// Background shade `i`: 0 = page, 1 = secondary, 2 = tertiary.
    #[must_use]
    pub const fn background(&self, i: usize) -> Rgb {
        self.background[i % 3]
    }

    #[must_use]
    pub fn bg_gradient(&self) -> &str {
        &self.bg_gradient
    }

    #[must_use]
    pub fn nav_gradient(&self) -> &str {
        &self.nav_gradient
    }

    /// Section gradient `i` (0 or 1), alternating down the page.
    #[must_use]
    pub fn section_gradient(&self, i: usize) -> &str {
        &self.section_gradients[i % 2]
    }

    /// The four colors particles are drawn from.
    #[must_use]
    pub const fn particle_palette(&self) -> [Rgb; 4] {
        [self.primary, self.secondary, self.accent, self.primary_light]
    }

    /// Cached hue of the primary color, in `[0, 360)`.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }
}

impl Hued for Theme {
    fn hue(&self) -> f64 {
        self.hue
    }
}

/// Field-by-field checks for one theme, carrying its name into errors.
struct Validator<'a> {
    theme: &'a str,
}

impl Validator<'_> {
    fn require<'v>(&self, field: &'static str, value: &'v str) -> Result<&'v str, ThemeError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ThemeError::Incomplete {
                theme: self.theme.to_string(),
                field,
            });
        }
        Ok(value)
    }

    fn color(&self, field: &'static str, value: &str) -> Result<Rgb, ThemeError> {
        let value = self.require(field, value)?;
        Rgb::parse(value).map_err(|source| ThemeError::Format {
            theme: self.theme.to_string(),
            field,
            source,
        })
    }

    fn composite(&self, field: &'static str, value: &str) -> Result<String, ThemeError> {
        self.require(field, value).map(str::to_string)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spec() -> ThemeSpec<'static> {
        ThemeSpec {
            name: "Ocean",
            primary: "#0EA5E9",
            primary_light: "#38BDF8",
            secondary: "#06B6D4",
            accent: "#22D3EE",
            gradient: "linear-gradient(135deg, #0EA5E9 0%, #06B6D4 100%)",
            glow: ["#0EA5E9", "#06B6D4", "#22D3EE"],
            background: ["#0a1628", "#0f2137", "#0c1a2e"],
            bg_gradient: "linear-gradient(135deg, #0a1628 0%, #0a2035 100%)",
            nav_gradient: "linear-gradient(135deg, #0EA5E9 0%, #06B6D4 100%)",
            section_gradients: [
                "linear-gradient(180deg, #0a1628 0%, #0f2a40 100%)",
                "linear-gradient(180deg, #0f2137 0%, #0a2035 100%)",
            ],
        }
    }

    #[test]
    fn valid_spec_builds() {
        let t = Theme::from_spec(&spec()).unwrap();
        assert_eq!(t.name(), "Ocean");
        assert_eq!(t.primary(), Rgb::new(14, 165, 233));
        assert_eq!(t.background(1), Rgb::new(0x0f, 0x21, 0x37));
        assert_eq!(t.section_gradient(1), spec().section_gradients[1]);
    }

    #[test]
    fn hue_is_cached_from_primary() {
        let t = Theme::from_spec(&spec()).unwrap();
        assert_eq!(t.hue(), t.primary().hue());
        assert!((t.hue() - 198.6).abs() < 0.1, "hue = {}", t.hue());
    }

    #[test]
    fn triples_come_from_parsed_colors() {
        let t = Theme::from_spec(&spec()).unwrap();
        assert_eq!(t.primary().triple(), "14, 165, 233");
        assert_eq!(t.secondary().triple(), "6, 182, 212");
    }

    #[test]
    fn particle_palette_order() {
        let t = Theme::from_spec(&spec()).unwrap();
        assert_eq!(
            t.particle_palette(),
            [t.primary(), t.secondary(), t.accent(), t.primary_light()]
        );
    }

    #[test]
    fn blank_name_is_incomplete() {
        let s = ThemeSpec { name: "  ", ..spec() };
        assert_eq!(
            Theme::from_spec(&s),
            Err(ThemeError::Incomplete { theme: String::new(), field: "name" })
        );
    }

    #[test]
    fn blank_color_is_incomplete() {
        let s = ThemeSpec { accent: "", ..spec() };
        assert_eq!(
            Theme::from_spec(&s),
            Err(ThemeError::Incomplete { theme: "Ocean".into(), field: "accent" })
        );
    }

    #[test]
    fn blank_composite_is_incomplete() {
        let s = ThemeSpec { section_gradients: [spec().section_gradients[0], ""], ..spec() };
        assert_eq!(
            Theme::from_spec(&s),
            Err(ThemeError::Incomplete {
                theme: "Ocean".into(),
                field: "section_gradients[1]",
            })
        );
    }

    #[test]
    fn bad_color_is_format_error() {
        let s = ThemeSpec { glow: ["#0EA5E9", "#06B6D", "#22D3EE"], ..spec() };
        let err = Theme::from_spec(&s).unwrap_err();
        assert!(
            matches!(err, ThemeError::Format { field: "glow[1]", .. }),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn error_messages_name_theme_and_field() {
        let s = ThemeSpec { primary: "#XYZXYZ", ..spec() };
        let msg = Theme::from_spec(&s).unwrap_err().to_string();
        assert!(msg.contains("Ocean"), "{msg}");
        assert!(msg.contains("primary"), "{msg}");
    }

    #[test]
    fn index_accessors_wrap() {
        let t = Theme::from_spec(&spec()).unwrap();
        assert_eq!(t.glow(3), t.glow(0));
        assert_eq!(t.background(4), t.background(1));
        assert_eq!(t.section_gradient(2), t.section_gradient(0));
    }
}
