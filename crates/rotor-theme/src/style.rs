//! Style values: what a theme pushes onto one style property.
//!
//! Values stay typed until the host asks for text. `Display` renders the
//! CSS form, so a web host can write `value.to_string()` straight into a
//! style property while a terminal host can match on the variant and pull
//! out the colors it understands.

use std::fmt;
use std::time::Duration;

use rotor_color::Rgb;

/// One color stop source in a generated gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    /// A color composed with an opacity, rendered as `rgba(r, g, b, a)`.
    Alpha(Rgb, f32),
}

impl Paint {
    /// The underlying color, ignoring opacity.
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Solid(c) | Self::Alpha(c, _) => c,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(c) => write!(f, "{c}"),
            Self::Alpha(c, a) => write!(f, "rgba({}, {a})", c.triple()),
        }
    }
}

/// A resolved style property value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A plain color, `#rrggbb`.
    Color(Rgb),
    /// A color at reduced opacity, `rgba(r, g, b, a)`.
    Rgba(Rgb, f32),
    /// The bare channel triple `r, g, b`, for custom properties that other
    /// rules wrap in `rgba(var(--x), a)`.
    Triple(Rgb),
    /// A catalog-supplied composite, passed through verbatim.
    Composite(String),
    /// A gradient generated from theme colors.
    LinearGradient {
        angle: u16,
        stops: Vec<(Paint, u8)>,
    },
    /// Outer glow: `0 0 <blur>px rgba(…)`.
    Glow { blur: u8, color: Rgb, alpha: f32 },
    /// Filter glow: `drop-shadow(0 0 <blur>px rgba(…))`.
    DropShadow { blur: u8, color: Rgb, alpha: f32 },
    /// Transition declaration for the property being animated.
    Transition {
        property: &'static str,
        duration: Duration,
    },
    /// A set of colors the host picks from per element (particles).
    Palette(Vec<Rgb>),
    /// A fixed keyword that must be re-asserted on every pass.
    Keyword(&'static str),
}

impl StyleValue {
    /// The most representative color in this value, if it carries one.
    ///
    /// Gradients report their first stop, palettes their first entry.
    #[must_use]
    pub fn dominant_color(&self) -> Option<Rgb> {
        match self {
            Self::Color(c)
            | Self::Rgba(c, _)
            | Self::Triple(c)
            | Self::Glow { color: c, .. }
            | Self::DropShadow { color: c, .. } => Some(*c),
            Self::LinearGradient { stops, .. } => stops.first().map(|(p, _)| p.rgb()),
            Self::Palette(colors) => colors.first().copied(),
            Self::Composite(_) | Self::Transition { .. } | Self::Keyword(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Rgba(c, a) => write!(f, "rgba({}, {a})", c.triple()),
            Self::Triple(c) => f.write_str(&c.triple()),
            Self::Composite(css) => f.write_str(css),
            Self::LinearGradient { angle, stops } => {
                write!(f, "linear-gradient({angle}deg")?;
                for (paint, at) in stops {
                    write!(f, ", {paint} {at}%")?;
                }
                f.write_str(")")
            }
            Self::Glow { blur, color, alpha } => {
                write!(f, "0 0 {blur}px rgba({}, {alpha})", color.triple())
            }
            Self::DropShadow { blur, color, alpha } => {
                write!(f, "drop-shadow(0 0 {blur}px rgba({}, {alpha}))", color.triple())
            }
            Self::Transition { property, duration } => {
                write!(f, "{property} {} ease", format_duration(*duration))
            }
            Self::Palette(colors) => {
                for (i, c) in colors.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
            Self::Keyword(k) => f.write_str(k),
        }
    }
}

/// CSS time: whole seconds as `2s`, anything else as `1500ms`.
fn format_duration(d: Duration) -> String {
    let ms = d.as_millis();
    if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        format!("{ms}ms")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIOLET: Rgb = Rgb::new(139, 92, 246);
    const CYAN: Rgb = Rgb::new(6, 182, 212);

    #[test]
    fn color_and_rgba() {
        assert_eq!(StyleValue::Color(VIOLET).to_string(), "#8b5cf6");
        assert_eq!(StyleValue::Rgba(VIOLET, 0.15).to_string(), "rgba(139, 92, 246, 0.15)");
        assert_eq!(StyleValue::Triple(CYAN).to_string(), "6, 182, 212");
    }

    #[test]
    fn generated_gradient() {
        let v = StyleValue::LinearGradient {
            angle: 135,
            stops: vec![(Paint::Alpha(VIOLET, 0.2), 0), (Paint::Alpha(CYAN, 0.15), 100)],
        };
        assert_eq!(
            v.to_string(),
            "linear-gradient(135deg, rgba(139, 92, 246, 0.2) 0%, rgba(6, 182, 212, 0.15) 100%)"
        );
    }

    #[test]
    fn gradient_with_solid_stops() {
        let v = StyleValue::LinearGradient {
            angle: 180,
            stops: vec![(Paint::Solid(Rgb::WHITE), 0), (Paint::Solid(VIOLET), 100)],
        };
        assert_eq!(v.to_string(), "linear-gradient(180deg, #ffffff 0%, #8b5cf6 100%)");
    }

    #[test]
    fn shadows() {
        let glow = StyleValue::Glow { blur: 30, color: VIOLET, alpha: 0.3 };
        assert_eq!(glow.to_string(), "0 0 30px rgba(139, 92, 246, 0.3)");
        let drop = StyleValue::DropShadow { blur: 10, color: VIOLET, alpha: 0.3 };
        assert_eq!(drop.to_string(), "drop-shadow(0 0 10px rgba(139, 92, 246, 0.3))");
    }

    #[test]
    fn transition_durations() {
        let whole = StyleValue::Transition {
            property: "background",
            duration: Duration::from_secs(2),
        };
        assert_eq!(whole.to_string(), "background 2s ease");
        let frac = StyleValue::Transition {
            property: "background",
            duration: Duration::from_millis(1500),
        };
        assert_eq!(frac.to_string(), "background 1500ms ease");
    }

    #[test]
    fn palette_lists_colors() {
        let v = StyleValue::Palette(vec![VIOLET, CYAN]);
        assert_eq!(v.to_string(), "#8b5cf6, #06b6d4");
    }

    #[test]
    fn dominant_colors() {
        assert_eq!(StyleValue::Rgba(CYAN, 0.2).dominant_color(), Some(CYAN));
        assert_eq!(StyleValue::Palette(vec![VIOLET, CYAN]).dominant_color(), Some(VIOLET));
        assert_eq!(StyleValue::Keyword("text").dominant_color(), None);
        assert_eq!(StyleValue::Composite("x".into()).dominant_color(), None);
    }
}
