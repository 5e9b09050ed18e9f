//! # rotor-theme: theme catalog, hue ordering, and style registry
//!
//! Holds the shipped color themes, arranges them into a rotation cycle
//! that keeps consecutive hues close, and resolves a theme into the typed
//! style values every styled target receives.
//!
//! # Architecture
//!
//! ```text
//! builtin.rs:  static ThemeSpec catalog
//!     │
//!     ▼
//! theme.rs:    validate → Theme (parsed colors, cached hue)
//!     │
//!     ▼
//! order.rs:    greedy nearest-neighbor cycle (+ optional 2-opt)
//!     │
//!     ▼
//! registry.rs: Target × Property → StyleValue (style.rs)
//! ```
//!
//! Ordering and resolution are pure. Nothing here touches a clock or a
//! surface; that lives in `rotor-engine`.

// Hue math mixes small integer indices with float degrees.
#![allow(clippy::cast_precision_loss)]
// One match arm per target.
#![allow(clippy::too_many_lines)]

pub mod builtin;
pub mod order;
pub mod particle;
pub mod registry;
pub mod style;
pub mod theme;

pub use builtin::{builtin_catalog, builtin_names, builtin_theme};
pub use order::{Hued, max_step, refine_two_opt, sort_by_color_similarity, tour_length};
pub use particle::ParticlePicker;
pub use registry::{CssVar, Property, StyleContext, Target, TargetSet, registry_size};
pub use style::{Paint, StyleValue};
pub use theme::{Theme, ThemeError, ThemeSpec};
