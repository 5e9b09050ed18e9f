//! The shipped catalog: twelve dark themes, one per hue family.
//!
//! The catalog is static configuration. It is validated as a whole by
//! [`builtin_catalog`]; a typo in any entry is a programming error that the
//! `catalog_validates` test catches before it can ship.

use crate::theme::{Theme, ThemeError, ThemeSpec};

/// Source specs for every builtin theme, in catalog (not rotation) order.
///
/// The first entry seeds the rotation cycle.
pub static CATALOG: [ThemeSpec<'static>; 12] = [
    ThemeSpec {
        name: "梦幻紫",
        primary: "#8B5CF6",
        primary_light: "#A78BFA",
        secondary: "#06B6D4",
        accent: "#F472B6",
        gradient: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
        glow: ["#8B5CF6", "#F472B6", "#06B6D4"],
        background: ["#0F0F23", "#1A1A2E", "#16162a"],
        bg_gradient: "linear-gradient(135deg, #0F0F23 0%, #1a1a3e 50%, #2d1b4e 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(102, 126, 234, 0.85) 0%, rgba(118, 75, 162, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #0F0F23 0%, #1a1a3e 100%)",
            "linear-gradient(180deg, #1A1A2E 0%, #2d1b4e 100%)",
        ],
    },
    ThemeSpec {
        name: "海洋蓝",
        primary: "#0EA5E9",
        primary_light: "#38BDF8",
        secondary: "#06B6D4",
        accent: "#22D3EE",
        gradient: "linear-gradient(135deg, #0EA5E9 0%, #06B6D4 100%)",
        glow: ["#0EA5E9", "#06B6D4", "#22D3EE"],
        background: ["#0a1628", "#0f2137", "#0c1a2e"],
        bg_gradient: "linear-gradient(135deg, #0a1628 0%, #0f2a40 50%, #0a2035 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(14, 165, 233, 0.85) 0%, rgba(6, 182, 212, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #0a1628 0%, #0f2a40 100%)",
            "linear-gradient(180deg, #0f2137 0%, #0a2035 100%)",
        ],
    },
    ThemeSpec {
        name: "樱花粉",
        primary: "#EC4899",
        primary_light: "#F472B6",
        secondary: "#F43F5E",
        accent: "#FB7185",
        gradient: "linear-gradient(135deg, #EC4899 0%, #F43F5E 100%)",
        glow: ["#EC4899", "#F472B6", "#FB7185"],
        background: ["#1a0a14", "#2a1020", "#200d1a"],
        bg_gradient: "linear-gradient(135deg, #1a0a14 0%, #2d1025 50%, #3a1530 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(236, 72, 153, 0.85) 0%, rgba(244, 63, 94, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #1a0a14 0%, #2d1025 100%)",
            "linear-gradient(180deg, #2a1020 0%, #3a1530 100%)",
        ],
    },
    ThemeSpec {
        name: "翡翠绿",
        primary: "#10B981",
        primary_light: "#34D399",
        secondary: "#14B8A6",
        accent: "#2DD4BF",
        gradient: "linear-gradient(135deg, #10B981 0%, #14B8A6 100%)",
        glow: ["#10B981", "#34D399", "#2DD4BF"],
        background: ["#0a1a14", "#0f2a20", "#0c201a"],
        bg_gradient: "linear-gradient(135deg, #0a1a14 0%, #0f2d22 50%, #0a2a1c 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(16, 185, 129, 0.85) 0%, rgba(20, 184, 166, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #0a1a14 0%, #0f2d22 100%)",
            "linear-gradient(180deg, #0f2a20 0%, #0a2a1c 100%)",
        ],
    },
    ThemeSpec {
        name: "日落橙",
        primary: "#F97316",
        primary_light: "#FB923C",
        secondary: "#EAB308",
        accent: "#FBBF24",
        gradient: "linear-gradient(135deg, #F97316 0%, #EAB308 100%)",
        glow: ["#F97316", "#FB923C", "#FBBF24"],
        background: ["#1a120a", "#2a1c0f", "#20160c"],
        bg_gradient: "linear-gradient(135deg, #1a120a 0%, #2d1f10 50%, #3a2815 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(249, 115, 22, 0.85) 0%, rgba(234, 179, 8, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #1a120a 0%, #2d1f10 100%)",
            "linear-gradient(180deg, #2a1c0f 0%, #3a2815 100%)",
        ],
    },
    ThemeSpec {
        name: "极光青",
        primary: "#06B6D4",
        primary_light: "#22D3EE",
        secondary: "#10B981",
        accent: "#34D399",
        gradient: "linear-gradient(135deg, #06B6D4 0%, #10B981 100%)",
        glow: ["#06B6D4", "#22D3EE", "#34D399"],
        background: ["#0a1618", "#0f2225", "#0c1c1e"],
        bg_gradient: "linear-gradient(135deg, #0a1618 0%, #0f2830 50%, #0a2028 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(6, 182, 212, 0.85) 0%, rgba(16, 185, 129, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #0a1618 0%, #0f2830 100%)",
            "linear-gradient(180deg, #0f2225 0%, #0a2028 100%)",
        ],
    },
    ThemeSpec {
        name: "玫瑰红",
        primary: "#E11D48",
        primary_light: "#FB7185",
        secondary: "#BE123C",
        accent: "#FDA4AF",
        gradient: "linear-gradient(135deg, #E11D48 0%, #BE123C 100%)",
        glow: ["#E11D48", "#FB7185", "#FDA4AF"],
        background: ["#1a0a0e", "#2a0f16", "#200c12"],
        bg_gradient: "linear-gradient(135deg, #1a0a0e 0%, #2d1018 50%, #3a1520 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(225, 29, 72, 0.85) 0%, rgba(190, 18, 60, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #1a0a0e 0%, #2d1018 100%)",
            "linear-gradient(180deg, #2a0f16 0%, #3a1520 100%)",
        ],
    },
    ThemeSpec {
        name: "星空靛",
        primary: "#6366F1",
        primary_light: "#818CF8",
        secondary: "#8B5CF6",
        accent: "#A78BFA",
        gradient: "linear-gradient(135deg, #6366F1 0%, #8B5CF6 100%)",
        glow: ["#6366F1", "#818CF8", "#A78BFA"],
        background: ["#0e0e1e", "#14142e", "#101026"],
        bg_gradient: "linear-gradient(135deg, #0e0e1e 0%, #181838 50%, #201848 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(99, 102, 241, 0.85) 0%, rgba(139, 92, 246, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #0e0e1e 0%, #181838 100%)",
            "linear-gradient(180deg, #14142e 0%, #201848 100%)",
        ],
    },
    ThemeSpec {
        name: "薄荷绿",
        primary: "#14B8A6",
        primary_light: "#2DD4BF",
        secondary: "#0D9488",
        accent: "#5EEAD4",
        gradient: "linear-gradient(135deg, #14B8A6 0%, #0D9488 100%)",
        glow: ["#14B8A6", "#2DD4BF", "#5EEAD4"],
        background: ["#0a1614", "#0f2220", "#0c1c1a"],
        bg_gradient: "linear-gradient(135deg, #0a1614 0%, #0f2a26 50%, #0a2420 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(20, 184, 166, 0.85) 0%, rgba(13, 148, 136, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #0a1614 0%, #0f2a26 100%)",
            "linear-gradient(180deg, #0f2220 0%, #0a2420 100%)",
        ],
    },
    ThemeSpec {
        name: "琥珀金",
        primary: "#F59E0B",
        primary_light: "#FBBF24",
        secondary: "#D97706",
        accent: "#FCD34D",
        gradient: "linear-gradient(135deg, #F59E0B 0%, #D97706 100%)",
        glow: ["#F59E0B", "#FBBF24", "#FCD34D"],
        background: ["#1a140a", "#2a1e0f", "#20180c"],
        bg_gradient: "linear-gradient(135deg, #1a140a 0%, #2d2210 50%, #3a2c15 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(245, 158, 11, 0.85) 0%, rgba(217, 119, 6, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #1a140a 0%, #2d2210 100%)",
            "linear-gradient(180deg, #2a1e0f 0%, #3a2c15 100%)",
        ],
    },
    ThemeSpec {
        name: "紫罗兰",
        primary: "#7C3AED",
        primary_light: "#8B5CF6",
        secondary: "#6D28D9",
        accent: "#A78BFA",
        gradient: "linear-gradient(135deg, #7C3AED 0%, #6D28D9 100%)",
        glow: ["#7C3AED", "#8B5CF6", "#A78BFA"],
        background: ["#120a1a", "#1c0f2a", "#160c20"],
        bg_gradient: "linear-gradient(135deg, #120a1a 0%, #1f1030 50%, #2a1540 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(124, 58, 237, 0.85) 0%, rgba(109, 40, 217, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #120a1a 0%, #1f1030 100%)",
            "linear-gradient(180deg, #1c0f2a 0%, #2a1540 100%)",
        ],
    },
    ThemeSpec {
        name: "珊瑚橘",
        primary: "#FB7185",
        primary_light: "#FDA4AF",
        secondary: "#F43F5E",
        accent: "#FECDD3",
        gradient: "linear-gradient(135deg, #FB7185 0%, #F43F5E 100%)",
        glow: ["#FB7185", "#FDA4AF", "#FECDD3"],
        background: ["#1a0e10", "#2a1418", "#201014"],
        bg_gradient: "linear-gradient(135deg, #1a0e10 0%, #2d1820 50%, #3a2028 100%)",
        nav_gradient: "linear-gradient(135deg, rgba(251, 113, 133, 0.85) 0%, rgba(244, 63, 94, 0.85) 100%)",
        section_gradients: [
            "linear-gradient(180deg, #1a0e10 0%, #2d1820 100%)",
            "linear-gradient(180deg, #2a1418 0%, #3a2028 100%)",
        ],
    },
];

/// Validate and build the full catalog.
///
/// # Errors
///
/// Returns the first [`ThemeError`] in catalog order.
pub fn builtin_catalog() -> Result<Vec<Theme>, ThemeError> {
    CATALOG.iter().map(Theme::from_spec).collect()
}

/// Look up a builtin theme by name.
///
/// Returns `None` if the name is not recognized or its entry fails to
/// validate.
#[must_use]
pub fn builtin_theme(name: &str) -> Option<Theme> {
    CATALOG
        .iter()
        .find(|spec| spec.name == name)
        .and_then(|spec| Theme::from_spec(spec).ok())
}

/// Names of all builtin themes, in catalog order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|spec| spec.name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rotor_color::hue_distance;
    use std::collections::HashSet;

    #[test]
    fn catalog_validates() {
        let themes = builtin_catalog().unwrap();
        assert_eq!(themes.len(), 12);
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = builtin_names().collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            assert!(builtin_theme(name).is_some(), "Builtin '{name}' failed to resolve");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_theme("nonexistent").is_none());
    }

    #[test]
    fn first_entry_is_violet() {
        let first = builtin_catalog().unwrap().remove(0);
        assert_eq!(first.name(), "梦幻紫");
        assert!((first.hue() - 258.3).abs() < 0.1);
    }

    #[test]
    fn primaries_are_distinct_hues() {
        let themes = builtin_catalog().unwrap();
        for (i, a) in themes.iter().enumerate() {
            for b in &themes[i + 1..] {
                assert!(
                    hue_distance(a.hue(), b.hue()) > 1.0,
                    "{} and {} share a hue",
                    a.name(),
                    b.name()
                );
            }
        }
    }

    #[test]
    fn backgrounds_are_dark() {
        for theme in builtin_catalog().unwrap() {
            for i in 0..3 {
                let l = theme.background(i).to_hsl().l;
                assert!(l < 20.0, "{} background {i} too light: {l}", theme.name());
            }
        }
    }
}
