//! Style registry: the closed set of places a theme is written to.
//!
//! Every [`Target`] is a category of page elements (the header, the glow
//! orbs, the tech-tag chips, ...) and owns a fixed list of [`Property`]
//! keys. [`Target::styles`] resolves all of them for one theme with an
//! exhaustive `match`, so adding a target without saying what it receives
//! does not compile.
//!
//! Values come out typed ([`StyleValue`]); hosts render or interpret them.

use std::fmt;
use std::time::Duration;

use rotor_color::Rgb;

use crate::style::{Paint, StyleValue};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Custom properties
// ---------------------------------------------------------------------------

/// A document-level custom property (`--name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssVar {
    ColorPrimary,
    ColorPrimaryLight,
    ColorPrimaryRgb,
    ColorSecondary,
    ColorSecondaryRgb,
    ColorAccent,
    ColorAccentRgb,
    GradientPrimary,
    ShadowGlow,
    ColorBackground,
    ColorBackgroundSecondary,
    BgColor3,
    GlassBorder,
    BgGradient,
    SectionGradient1,
    SectionGradient2,
    NavGradient,
    GlowColor1,
    GlowColor2,
    GlowColor3,
    ScrollbarColor,
    /// Scoped to the chat button, not the root.
    BtnGradient,
}

impl CssVar {
    /// Variables set on the document root, in write order.
    pub const ROOT: [Self; 21] = [
        Self::ColorPrimary,
        Self::ColorPrimaryLight,
        Self::ColorPrimaryRgb,
        Self::ColorSecondary,
        Self::ColorSecondaryRgb,
        Self::ColorAccent,
        Self::ColorAccentRgb,
        Self::GradientPrimary,
        Self::ShadowGlow,
        Self::ColorBackground,
        Self::ColorBackgroundSecondary,
        Self::BgColor3,
        Self::GlassBorder,
        Self::BgGradient,
        Self::SectionGradient1,
        Self::SectionGradient2,
        Self::NavGradient,
        Self::GlowColor1,
        Self::GlowColor2,
        Self::GlowColor3,
        Self::ScrollbarColor,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ColorPrimary => "--color-primary",
            Self::ColorPrimaryLight => "--color-primary-light",
            Self::ColorPrimaryRgb => "--color-primary-rgb",
            Self::ColorSecondary => "--color-secondary",
            Self::ColorSecondaryRgb => "--color-secondary-rgb",
            Self::ColorAccent => "--color-accent",
            Self::ColorAccentRgb => "--color-accent-rgb",
            Self::GradientPrimary => "--gradient-primary",
            Self::ShadowGlow => "--shadow-glow",
            Self::ColorBackground => "--color-background",
            Self::ColorBackgroundSecondary => "--color-background-secondary",
            Self::BgColor3 => "--bg-color-3",
            Self::GlassBorder => "--glass-border",
            Self::BgGradient => "--bg-gradient",
            Self::SectionGradient1 => "--section-gradient-1",
            Self::SectionGradient2 => "--section-gradient-2",
            Self::NavGradient => "--nav-gradient",
            Self::GlowColor1 => "--glow-color-1",
            Self::GlowColor2 => "--glow-color-2",
            Self::GlowColor3 => "--glow-color-3",
            Self::ScrollbarColor => "--scrollbar-color",
            Self::BtnGradient => "--btn-gradient",
        }
    }

    /// The value this variable takes under `theme`.
    #[must_use]
    pub fn resolve(self, theme: &Theme) -> StyleValue {
        match self {
            Self::ColorPrimary | Self::ScrollbarColor => StyleValue::Color(theme.primary()),
            Self::ColorPrimaryLight => StyleValue::Color(theme.primary_light()),
            Self::ColorPrimaryRgb => StyleValue::Triple(theme.primary()),
            Self::ColorSecondary => StyleValue::Color(theme.secondary()),
            Self::ColorSecondaryRgb => StyleValue::Triple(theme.secondary()),
            Self::ColorAccent => StyleValue::Color(theme.accent()),
            Self::ColorAccentRgb => StyleValue::Triple(theme.accent()),
            Self::GradientPrimary | Self::BtnGradient => composite(theme.gradient()),
            Self::ShadowGlow => glow(30, theme.primary()),
            Self::ColorBackground => StyleValue::Color(theme.background(0)),
            Self::ColorBackgroundSecondary => StyleValue::Color(theme.background(1)),
            Self::BgColor3 => StyleValue::Color(theme.background(2)),
            Self::GlassBorder => rgba(theme.primary(), 0.2),
            Self::BgGradient => composite(theme.bg_gradient()),
            Self::SectionGradient1 => composite(theme.section_gradient(0)),
            Self::SectionGradient2 => composite(theme.section_gradient(1)),
            Self::NavGradient => composite(theme.nav_gradient()),
            Self::GlowColor1 => StyleValue::Color(theme.glow(0)),
            Self::GlowColor2 => StyleValue::Color(theme.glow(1)),
            Self::GlowColor3 => StyleValue::Color(theme.glow(2)),
        }
    }
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// A style property key on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Background,
    BackgroundColor,
    BorderColor,
    BorderTopColor,
    BorderBottomColor,
    TextColor,
    TextFillColor,
    BackgroundClip,
    BoxShadow,
    Filter,
    BackdropFilter,
    Transition,
    /// Stored as element data and read by a hover rule.
    HoverBackground,
    Var(CssVar),
}

impl Property {
    /// CSS property (or data attribute) name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::BackgroundColor => "background-color",
            Self::BorderColor => "border-color",
            Self::BorderTopColor => "border-top-color",
            Self::BorderBottomColor => "border-bottom-color",
            Self::TextColor => "color",
            Self::TextFillColor => "-webkit-text-fill-color",
            Self::BackgroundClip => "background-clip",
            Self::BoxShadow => "box-shadow",
            Self::Filter => "filter",
            Self::BackdropFilter => "backdrop-filter",
            Self::Transition => "transition",
            Self::HoverBackground => "data-hover-bg",
            Self::Var(v) => v.name(),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// Per-pass inputs that do not come from the theme itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleContext {
    /// How long the surface should animate each color change.
    pub transition: Duration,
}

impl Default for StyleContext {
    fn default() -> Self {
        Self {
            transition: Duration::from_secs(2),
        }
    }
}

/// A category of styled elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Target {
    Root,
    Body,
    PrimarySections,
    SecondarySections,
    Header,
    Footer,
    GlowOrb1,
    GlowOrb2,
    GlowOrb3,
    Particles,
    HighlightTags,
    IntroGreeting,
    SectionTitles,
    SectionUnderline,
    Logo,
    ActiveNavLink,
    Tags,
    TagSports,
    TagLeisure,
    TagTech,
    TagFriendly,
    Cards,
    HobbyCardIcon,
    IconSports,
    IconLeisure,
    IconTech,
    IconFriendly,
    IconPatient,
    IconCaring,
    IconCurious,
    IconWechat,
    IconGithub,
    IconEmail,
    Buttons,
    ChatButton,
    FooterTitle,
    ContactHints,
    ContactValues,
    SocialLinks,
    FormFields,
    HobbyItems,
    CriteriaIcons,
}

impl Target {
    /// Every target, in apply order.
    pub const ALL: [Self; 42] = [
        Self::Root,
        Self::Body,
        Self::PrimarySections,
        Self::SecondarySections,
        Self::Header,
        Self::Footer,
        Self::GlowOrb1,
        Self::GlowOrb2,
        Self::GlowOrb3,
        Self::Particles,
        Self::HighlightTags,
        Self::IntroGreeting,
        Self::SectionTitles,
        Self::SectionUnderline,
        Self::Logo,
        Self::ActiveNavLink,
        Self::Tags,
        Self::TagSports,
        Self::TagLeisure,
        Self::TagTech,
        Self::TagFriendly,
        Self::Cards,
        Self::HobbyCardIcon,
        Self::IconSports,
        Self::IconLeisure,
        Self::IconTech,
        Self::IconFriendly,
        Self::IconPatient,
        Self::IconCaring,
        Self::IconCurious,
        Self::IconWechat,
        Self::IconGithub,
        Self::IconEmail,
        Self::Buttons,
        Self::ChatButton,
        Self::FooterTitle,
        Self::ContactHints,
        Self::ContactValues,
        Self::SocialLinks,
        Self::FormFields,
        Self::HobbyItems,
        Self::CriteriaIcons,
    ];

    /// Short identifier for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Body => "body",
            Self::PrimarySections => "primary-sections",
            Self::SecondarySections => "secondary-sections",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::GlowOrb1 => "glow-orb-1",
            Self::GlowOrb2 => "glow-orb-2",
            Self::GlowOrb3 => "glow-orb-3",
            Self::Particles => "particles",
            Self::HighlightTags => "highlight-tags",
            Self::IntroGreeting => "intro-greeting",
            Self::SectionTitles => "section-titles",
            Self::SectionUnderline => "section-underline",
            Self::Logo => "logo",
            Self::ActiveNavLink => "active-nav-link",
            Self::Tags => "tags",
            Self::TagSports => "tag-sports",
            Self::TagLeisure => "tag-leisure",
            Self::TagTech => "tag-tech",
            Self::TagFriendly => "tag-friendly",
            Self::Cards => "cards",
            Self::HobbyCardIcon => "hobby-card-icon",
            Self::IconSports => "icon-sports",
            Self::IconLeisure => "icon-leisure",
            Self::IconTech => "icon-tech",
            Self::IconFriendly => "icon-friendly",
            Self::IconPatient => "icon-patient",
            Self::IconCaring => "icon-caring",
            Self::IconCurious => "icon-curious",
            Self::IconWechat => "icon-wechat",
            Self::IconGithub => "icon-github",
            Self::IconEmail => "icon-email",
            Self::Buttons => "buttons",
            Self::ChatButton => "chat-button",
            Self::FooterTitle => "footer-title",
            Self::ContactHints => "contact-hints",
            Self::ContactValues => "contact-values",
            Self::SocialLinks => "social-links",
            Self::FormFields => "form-fields",
            Self::HobbyItems => "hobby-items",
            Self::CriteriaIcons => "criteria-icons",
        }
    }

    /// Element selector a document host would query for this target.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Root => ":root",
            Self::Body => "body",
            Self::PrimarySections => ".introduction-section, .traits-section",
            Self::SecondarySections => ".hobbies-section, .friendship-section, .contact-section",
            Self::Header => ".site-header",
            Self::Footer => ".site-footer",
            Self::GlowOrb1 => ".glow-orb:nth-of-type(1)",
            Self::GlowOrb2 => ".glow-orb:nth-of-type(2)",
            Self::GlowOrb3 => ".glow-orb:nth-of-type(3)",
            Self::Particles => ".particle",
            Self::HighlightTags => ".highlight-tag",
            Self::IntroGreeting => ".intro-greeting",
            Self::SectionTitles => ".section-title",
            Self::SectionUnderline => ".section-title::after",
            Self::Logo => ".logo-link",
            Self::ActiveNavLink => ".nav-link.active",
            Self::Tags => ".tag",
            Self::TagSports => ".tag-sports",
            Self::TagLeisure => ".tag-leisure",
            Self::TagTech => ".tag-tech",
            Self::TagFriendly => ".tag-friendly",
            Self::Cards => {
                ".hobby-card, .trait-card, .friend-type-card, .contact-card, \
                 .criteria-item, .contact-form-wrapper, .friendship-cta"
            }
            Self::HobbyCardIcon => ".hobby-card-icon",
            Self::IconSports => ".icon-sports",
            Self::IconLeisure => ".icon-leisure",
            Self::IconTech => ".icon-tech, .icon-tech-partner",
            Self::IconFriendly => ".icon-friendly",
            Self::IconPatient => ".icon-patient, .icon-play-partner",
            Self::IconCaring => ".icon-caring",
            Self::IconCurious => ".icon-curious",
            Self::IconWechat => ".icon-wechat",
            Self::IconGithub => ".icon-github",
            Self::IconEmail => ".icon-email",
            Self::Buttons => ".cta-button, .form-submit, .modal-btn-primary",
            Self::ChatButton => ".intro-chat-btn",
            Self::FooterTitle => ".footer-title",
            Self::ContactHints => ".contact-card-hint",
            Self::ContactValues => ".contact-card-value",
            Self::SocialLinks => ".social-link",
            Self::FormFields => ".form-input, .form-textarea",
            Self::HobbyItems => ".hobby-item",
            Self::CriteriaIcons => ".criteria-icon",
        }
    }

    /// Registry entries for this target, in write order.
    fn rules(self) -> &'static [Rule] {
        match self {
            Self::Root => &ROOT_RULES,
            Self::Body | Self::PrimarySections => PAGE,
            Self::SecondarySections => SECONDARY_PAGE,
            Self::Header => HEADER,
            Self::Footer => FOOTER,
            Self::GlowOrb1 => GLOW_ORB_1,
            Self::GlowOrb2 => GLOW_ORB_2,
            Self::GlowOrb3 => GLOW_ORB_3,
            Self::Particles => PARTICLES,
            Self::HighlightTags | Self::ContactHints | Self::ContactValues => LIGHT_TEXT,
            Self::IntroGreeting => INTRO_GREETING,
            Self::SectionTitles => SECTION_TITLES,
            Self::Logo | Self::FooterTitle => GRADIENT_TEXT,
            Self::SectionUnderline | Self::Buttons => GRADIENT_FILL,
            Self::ActiveNavLink => ACTIVE_NAV_LINK,
            Self::Tags => TAGS,
            Self::TagSports => TAG_SECONDARY,
            Self::TagLeisure | Self::TagFriendly => TAG_ACCENT,
            Self::TagTech => TAG_PRIMARY,
            Self::Cards => CARDS,
            Self::HobbyCardIcon | Self::IconSports | Self::IconWechat => ICON_SECONDARY,
            Self::IconLeisure | Self::IconEmail => ICON_ACCENT,
            Self::IconTech | Self::IconGithub => ICON_PRIMARY,
            Self::IconFriendly | Self::IconCaring => ICON_ACCENT_WIDE,
            Self::IconPatient | Self::IconCurious => ICON_SECONDARY_WIDE,
            Self::ChatButton => CHAT_BUTTON,
            Self::SocialLinks | Self::FormFields => OUTLINED,
            Self::HobbyItems => HOBBY_ITEMS,
            Self::CriteriaIcons => CRITERIA_ICONS,
        }
    }

    /// The property keys this target receives, in write order.
    pub fn properties(self) -> impl Iterator<Item = Property> {
        self.rules().iter().copied().map(Rule::property)
    }

    /// Resolve every property of this target for `theme`, in write order.
    #[must_use]
    pub fn styles(self, theme: &Theme, ctx: &StyleContext) -> Vec<(Property, StyleValue)> {
        self.rules()
            .iter()
            .map(|rule| (rule.property(), rule.resolve(theme, ctx)))
            .collect()
    }

    /// Resolve one property, or `None` if this target does not own it.
    #[must_use]
    pub fn resolve(self, theme: &Theme, property: Property, ctx: &StyleContext) -> Option<StyleValue> {
        self.rules()
            .iter()
            .find(|rule| rule.property() == property)
            .map(|rule| rule.resolve(theme, ctx))
    }

    /// The single-bit set for this target.
    #[must_use]
    pub const fn flag(self) -> TargetSet {
        TargetSet::from_bits_retain(1 << self as u8)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Total number of (target, property) pairs in the registry.
#[must_use]
pub fn registry_size() -> usize {
    Target::ALL.iter().map(|t| t.rules().len()).sum()
}

// ---------------------------------------------------------------------------
// TargetSet
// ---------------------------------------------------------------------------

bitflags::bitflags! {
    /// A set of targets, one bit per [`Target`] in declaration order.
    ///
    /// ```
    /// use rotor_theme::registry::{Target, TargetSet};
    ///
    /// let touched = Target::Header.flag() | Target::Footer.flag();
    /// assert!(touched.contains(TargetSet::HEADER));
    /// assert!(!touched.contains(TargetSet::ROOT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct TargetSet: u64 {
        const ROOT               = 1 << 0;
        const BODY               = 1 << 1;
        const PRIMARY_SECTIONS   = 1 << 2;
        const SECONDARY_SECTIONS = 1 << 3;
        const HEADER             = 1 << 4;
        const FOOTER             = 1 << 5;
        const GLOW_ORB_1         = 1 << 6;
        const GLOW_ORB_2         = 1 << 7;
        const GLOW_ORB_3         = 1 << 8;
        const PARTICLES          = 1 << 9;
        const HIGHLIGHT_TAGS     = 1 << 10;
        const INTRO_GREETING     = 1 << 11;
        const SECTION_TITLES     = 1 << 12;
        const SECTION_UNDERLINE  = 1 << 13;
        const LOGO               = 1 << 14;
        const ACTIVE_NAV_LINK    = 1 << 15;
        const TAGS               = 1 << 16;
        const TAG_SPORTS         = 1 << 17;
        const TAG_LEISURE        = 1 << 18;
        const TAG_TECH           = 1 << 19;
        const TAG_FRIENDLY       = 1 << 20;
        const CARDS              = 1 << 21;
        const HOBBY_CARD_ICON    = 1 << 22;
        const ICON_SPORTS        = 1 << 23;
        const ICON_LEISURE       = 1 << 24;
        const ICON_TECH          = 1 << 25;
        const ICON_FRIENDLY      = 1 << 26;
        const ICON_PATIENT       = 1 << 27;
        const ICON_CARING        = 1 << 28;
        const ICON_CURIOUS       = 1 << 29;
        const ICON_WECHAT        = 1 << 30;
        const ICON_GITHUB        = 1 << 31;
        const ICON_EMAIL         = 1 << 32;
        const BUTTONS            = 1 << 33;
        const CHAT_BUTTON        = 1 << 34;
        const FOOTER_TITLE       = 1 << 35;
        const CONTACT_HINTS      = 1 << 36;
        const CONTACT_VALUES     = 1 << 37;
        const SOCIAL_LINKS       = 1 << 38;
        const FORM_FIELDS        = 1 << 39;
        const HOBBY_ITEMS        = 1 << 40;
        const CRITERIA_ICONS     = 1 << 41;
    }
}

impl TargetSet {
    /// Targets in this set, in apply order.
    pub fn targets(self) -> impl Iterator<Item = Target> {
        Target::ALL.into_iter().filter(move |t| self.contains(t.flag()))
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

const fn rgba(c: Rgb, alpha: f32) -> StyleValue {
    StyleValue::Rgba(c, alpha)
}

fn composite(css: &str) -> StyleValue {
    StyleValue::Composite(css.to_string())
}

const fn glow(blur: u8, color: Rgb) -> StyleValue {
    StyleValue::Glow {
        blur,
        color,
        alpha: 0.3,
    }
}

fn gradient<const N: usize>(angle: u16, stops: [(Paint, u8); N]) -> StyleValue {
    StyleValue::LinearGradient {
        angle,
        stops: stops.to_vec(),
    }
}

/// Translucent diagonal wash of one color.
fn wash(c: Rgb, from: f32, to: f32) -> StyleValue {
    gradient(135, [(Paint::Alpha(c, from), 0), (Paint::Alpha(c, to), 100)])
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

type Resolver = fn(&Theme, &StyleContext) -> StyleValue;

/// One registry entry: a property key and how its value is derived.
///
/// The key and its value come from the same entry, so a target cannot
/// declare a property it has no value for.
#[derive(Clone, Copy)]
enum Rule {
    /// A custom property valued by [`CssVar::resolve`].
    Var(CssVar),
    Style(Property, Resolver),
}

impl Rule {
    const fn property(self) -> Property {
        match self {
            Self::Var(v) => Property::Var(v),
            Self::Style(p, _) => p,
        }
    }

    fn resolve(self, theme: &Theme, ctx: &StyleContext) -> StyleValue {
        match self {
            Self::Var(v) => v.resolve(theme),
            Self::Style(_, f) => f(theme, ctx),
        }
    }
}

static ROOT_RULES: [Rule; 21] = {
    let mut out = [Rule::Var(CssVar::ColorPrimary); 21];
    let mut i = 0;
    while i < out.len() {
        out[i] = Rule::Var(CssVar::ROOT[i]);
        i += 1;
    }
    out
};

const TRANSITION: Rule = Rule::Style(Property::Transition, |_, ctx| StyleValue::Transition {
    property: "background",
    duration: ctx.transition,
});
const CLIP_TO_TEXT: Rule =
    Rule::Style(Property::BackgroundClip, |_, _| StyleValue::Keyword("text"));
const TRANSPARENT_FILL: Rule =
    Rule::Style(Property::TextFillColor, |_, _| StyleValue::Keyword("transparent"));

const PAGE: &[Rule] = &[Rule::Style(Property::BackgroundColor, |t, _| {
    StyleValue::Color(t.background(0))
})];
const SECONDARY_PAGE: &[Rule] = &[Rule::Style(Property::BackgroundColor, |t, _| {
    StyleValue::Color(t.background(1))
})];

const HEADER: &[Rule] = &[
    Rule::Style(Property::BackgroundColor, |t, _| rgba(t.primary(), 0.15)),
    Rule::Style(Property::Background, |t, _| {
        gradient(
            135,
            [(Paint::Alpha(t.primary(), 0.2), 0), (Paint::Alpha(t.secondary(), 0.15), 100)],
        )
    }),
    Rule::Style(Property::BackdropFilter, |_, _| StyleValue::Keyword("blur(20px)")),
    Rule::Style(Property::BorderBottomColor, |t, _| rgba(t.primary(), 0.2)),
];

const FOOTER: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| {
        gradient(
            180,
            [(Paint::Solid(t.background(1)), 0), (Paint::Solid(t.background(2)), 100)],
        )
    }),
    Rule::Style(Property::BorderTopColor, |t, _| rgba(t.primary(), 0.2)),
];

const GLOW_ORB_1: &[Rule] = &[
    TRANSITION,
    Rule::Style(Property::Background, |t, _| StyleValue::Color(t.glow(0))),
];
const GLOW_ORB_2: &[Rule] = &[
    TRANSITION,
    Rule::Style(Property::Background, |t, _| StyleValue::Color(t.glow(1))),
];
const GLOW_ORB_3: &[Rule] = &[
    TRANSITION,
    Rule::Style(Property::Background, |t, _| StyleValue::Color(t.glow(2))),
];
const PARTICLES: &[Rule] = &[
    TRANSITION,
    Rule::Style(Property::Background, |t, _| {
        StyleValue::Palette(t.particle_palette().to_vec())
    }),
];

const LIGHT_TEXT: &[Rule] = &[Rule::Style(Property::TextColor, |t, _| {
    StyleValue::Color(t.primary_light())
})];

const INTRO_GREETING: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| {
        gradient(
            135,
            [
                (Paint::Solid(Rgb::WHITE), 0),
                (Paint::Solid(t.primary_light()), 50),
                (Paint::Solid(t.accent()), 100),
            ],
        )
    }),
    CLIP_TO_TEXT,
    TRANSPARENT_FILL,
];
const SECTION_TITLES: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| {
        gradient(
            135,
            [(Paint::Solid(Rgb::WHITE), 0), (Paint::Solid(t.primary_light()), 100)],
        )
    }),
    CLIP_TO_TEXT,
    TRANSPARENT_FILL,
];
const GRADIENT_TEXT: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| composite(t.gradient())),
    CLIP_TO_TEXT,
    TRANSPARENT_FILL,
];
const GRADIENT_FILL: &[Rule] =
    &[Rule::Style(Property::Background, |t, _| composite(t.gradient()))];

const ACTIVE_NAV_LINK: &[Rule] =
    &[Rule::Style(Property::BackgroundColor, |t, _| rgba(t.primary(), 0.2))];

const TAGS: &[Rule] = &[Rule::Style(Property::BorderColor, |t, _| rgba(t.primary(), 0.3))];
const TAG_SECONDARY: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.secondary(), 0.2, 0.1)),
    Rule::Style(Property::BorderColor, |t, _| rgba(t.secondary(), 0.3)),
    Rule::Style(Property::TextColor, |t, _| StyleValue::Color(t.secondary())),
];
const TAG_ACCENT: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.accent(), 0.2, 0.1)),
    Rule::Style(Property::BorderColor, |t, _| rgba(t.accent(), 0.3)),
    Rule::Style(Property::TextColor, |t, _| StyleValue::Color(t.accent())),
];
const TAG_PRIMARY: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.primary(), 0.2, 0.1)),
    Rule::Style(Property::BorderColor, |t, _| rgba(t.primary(), 0.3)),
    Rule::Style(Property::TextColor, |t, _| StyleValue::Color(t.primary_light())),
];

const CARDS: &[Rule] = &[Rule::Style(Property::BorderColor, |t, _| rgba(t.primary(), 0.15))];

// Icons: a translucent wash plus a glow; trait icons glow wider.
const ICON_SECONDARY: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.secondary(), 0.3, 0.1)),
    Rule::Style(Property::BoxShadow, |t, _| glow(30, t.secondary())),
];
const ICON_ACCENT: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.accent(), 0.3, 0.1)),
    Rule::Style(Property::BoxShadow, |t, _| glow(30, t.accent())),
];
const ICON_PRIMARY: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.primary(), 0.3, 0.1)),
    Rule::Style(Property::BoxShadow, |t, _| glow(30, t.primary())),
];
const ICON_ACCENT_WIDE: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.accent(), 0.3, 0.1)),
    Rule::Style(Property::BoxShadow, |t, _| glow(40, t.accent())),
];
const ICON_SECONDARY_WIDE: &[Rule] = &[
    Rule::Style(Property::Background, |t, _| wash(t.secondary(), 0.3, 0.1)),
    Rule::Style(Property::BoxShadow, |t, _| glow(40, t.secondary())),
];

const CHAT_BUTTON: &[Rule] = &[Rule::Var(CssVar::BtnGradient)];
const OUTLINED: &[Rule] = &[Rule::Style(Property::BorderColor, |t, _| rgba(t.primary(), 0.2))];
const HOBBY_ITEMS: &[Rule] =
    &[Rule::Style(Property::HoverBackground, |t, _| rgba(t.primary(), 0.1))];
const CRITERIA_ICONS: &[Rule] = &[Rule::Style(Property::Filter, |t, _| StyleValue::DropShadow {
    blur: 10,
    color: t.primary(),
    alpha: 0.3,
})];
// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_catalog;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn ocean() -> Theme {
        builtin_catalog()
            .unwrap()
            .into_iter()
            .find(|t| t.name() == "海洋蓝")
            .unwrap()
    }

    #[test]
    fn styles_match_declared_properties() {
        let ctx = StyleContext::default();
        for theme in builtin_catalog().unwrap() {
            for target in Target::ALL {
                let keys: Vec<Property> =
                    target.styles(&theme, &ctx).into_iter().map(|(k, _)| k).collect();
                let declared: Vec<Property> = target.properties().collect();
                assert_eq!(keys, declared, "{target} under {}", theme.name());
            }
        }
    }

    #[test]
    fn no_target_repeats_a_property() {
        for target in Target::ALL {
            let declared: Vec<Property> = target.properties().collect();
            let unique: HashSet<_> = declared.iter().collect();
            assert_eq!(unique.len(), declared.len(), "{target}");
        }
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (i, target) in Target::ALL.iter().enumerate() {
            assert_eq!(*target as usize, i);
        }
    }

    #[test]
    fn flags_cover_every_target_once() {
        let mut union = TargetSet::empty();
        for target in Target::ALL {
            let flag = target.flag();
            assert_eq!(flag.bits().count_ones(), 1, "{target}");
            assert!(!union.intersects(flag), "{target} shares a bit");
            union |= flag;
        }
        assert_eq!(union, TargetSet::all());
    }

    #[test]
    fn named_flags_line_up() {
        assert_eq!(Target::Root.flag(), TargetSet::ROOT);
        assert_eq!(Target::Header.flag(), TargetSet::HEADER);
        assert_eq!(Target::IconEmail.flag(), TargetSet::ICON_EMAIL);
        assert_eq!(Target::CriteriaIcons.flag(), TargetSet::CRITERIA_ICONS);
    }

    #[test]
    fn targets_iterates_members() {
        let set = TargetSet::FOOTER | TargetSet::ROOT;
        assert_eq!(set.targets().collect::<Vec<_>>(), vec![Target::Root, Target::Footer]);
        assert_eq!(TargetSet::all().targets().count(), Target::ALL.len());
    }

    #[test]
    fn root_writes_every_root_variable() {
        let names: Vec<&str> = Target::Root.properties().map(Property::css_name).collect();
        assert_eq!(names.len(), 21);
        assert!(names.contains(&"--color-primary-rgb"));
        assert!(names.contains(&"--scrollbar-color"));
        assert!(!names.contains(&"--btn-gradient"));
    }

    #[test]
    fn root_follows_variable_order() {
        let declared: Vec<Property> = Target::Root.properties().collect();
        assert_eq!(declared, CssVar::ROOT.map(Property::Var).to_vec());
    }

    #[test]
    fn resolve_agrees_with_styles() {
        let ctx = StyleContext::default();
        for theme in builtin_catalog().unwrap() {
            for target in Target::ALL {
                for (property, value) in target.styles(&theme, &ctx) {
                    assert_eq!(
                        target.resolve(&theme, property, &ctx),
                        Some(value),
                        "{target}/{property} under {}",
                        theme.name()
                    );
                }
            }
        }
    }

    #[test]
    fn chat_button_scopes_its_gradient() {
        let t = ocean();
        let chip = Target::ChatButton.styles(&t, &StyleContext::default());
        assert_eq!(
            chip,
            vec![(
                Property::Var(CssVar::BtnGradient),
                StyleValue::Composite(t.gradient().to_string())
            )]
        );
    }

    #[test]
    fn registry_size_counts_pairs() {
        assert_eq!(
            registry_size(),
            Target::ALL.iter().map(|t| t.properties().count()).sum::<usize>()
        );
        assert!(registry_size() > Target::ALL.len());
    }

    #[test]
    fn header_values() {
        let t = ocean();
        let ctx = StyleContext::default();
        let header = Target::Header.styles(&t, &ctx);
        assert_eq!(header[0].1.to_string(), "rgba(14, 165, 233, 0.15)");
        assert_eq!(
            header[1].1.to_string(),
            "linear-gradient(135deg, rgba(14, 165, 233, 0.2) 0%, rgba(6, 182, 212, 0.15) 100%)"
        );
        assert_eq!(header[2].1.to_string(), "blur(20px)");
        assert_eq!(header[3].1.to_string(), "rgba(14, 165, 233, 0.2)");
    }

    #[test]
    fn root_triples_and_glow() {
        let t = ocean();
        let ctx = StyleContext::default();
        assert_eq!(
            Target::Root
                .resolve(&t, Property::Var(CssVar::ColorPrimaryRgb), &ctx)
                .map(|v| v.to_string()),
            Some("14, 165, 233".to_string())
        );
        assert_eq!(
            Target::Root
                .resolve(&t, Property::Var(CssVar::ShadowGlow), &ctx)
                .map(|v| v.to_string()),
            Some("0 0 30px rgba(14, 165, 233, 0.3)".to_string())
        );
    }

    #[test]
    fn glow_orbs_carry_transition() {
        let t = ocean();
        let ctx = StyleContext {
            transition: Duration::from_millis(2000),
        };
        let orb = Target::GlowOrb2.styles(&t, &ctx);
        assert_eq!(orb[0].1.to_string(), "background 2s ease");
        assert_eq!(orb[1].1, StyleValue::Color(t.glow(1)));
    }

    #[test]
    fn particles_offer_palette() {
        let t = ocean();
        let value = Target::Particles
            .resolve(&t, Property::Background, &StyleContext::default())
            .unwrap();
        assert_eq!(value, StyleValue::Palette(t.particle_palette().to_vec()));
    }

    #[test]
    fn tech_tag_uses_light_text() {
        let t = ocean();
        let chip = Target::TagTech.styles(&t, &StyleContext::default());
        assert_eq!(chip[2].1, StyleValue::Color(t.primary_light()));
        assert_eq!(chip[1].1, StyleValue::Rgba(t.primary(), 0.3));
    }

    #[test]
    fn trait_icons_glow_wider() {
        let t = ocean();
        let ctx = StyleContext::default();
        let shadow = |target: Target| target.resolve(&t, Property::BoxShadow, &ctx);
        assert!(matches!(shadow(Target::IconPatient), Some(StyleValue::Glow { blur: 40, .. })));
        assert!(matches!(shadow(Target::IconGithub), Some(StyleValue::Glow { blur: 30, .. })));
    }

    #[test]
    fn resolve_unknown_property_is_none() {
        let t = ocean();
        assert_eq!(Target::Body.resolve(&t, Property::Filter, &StyleContext::default()), None);
    }

    #[test]
    fn names_and_selectors_are_unique() {
        let names: HashSet<_> = Target::ALL.iter().map(|t| t.name()).collect();
        let selectors: HashSet<_> = Target::ALL.iter().map(|t| t.selector()).collect();
        assert_eq!(names.len(), Target::ALL.len());
        assert_eq!(selectors.len(), Target::ALL.len());
    }
}
