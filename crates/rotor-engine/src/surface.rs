// SPDX-License-Identifier: MIT
//
// Surface: where resolved styles land.
//
// The engine never renders anything itself. A host implements `Surface`
// for whatever it draws on (a DOM bridge, a terminal, a test recorder)
// and `apply` walks the whole registry into it, one write per
// (target, property) pair, in registry order.
//
// Failure is not rolled back. If the surface rejects a write halfway
// through, targets already written keep the new theme and the rest keep
// the old one until the next successful pass.

use std::collections::{HashMap, VecDeque};

use rotor_theme::{Property, StyleContext, StyleValue, Target, TargetSet, Theme};
use tracing::trace;

use crate::error::SurfaceError;

/// A writable style registry.
///
/// Only [`set_style`](Surface::set_style) is required. The frame hooks
/// bracket each apply pass; use them to batch output.
pub trait Surface {
    /// Called once before the first write of a pass.
    ///
    /// # Errors
    ///
    /// Aborts the pass before anything is written.
    fn begin_frame(&mut self, _theme: &Theme) -> Result<(), SurfaceError> {
        Ok(())
    }

    /// Write one property on one target.
    ///
    /// # Errors
    ///
    /// Aborts the pass; earlier writes stay in place.
    fn set_style(
        &mut self,
        target: Target,
        property: Property,
        value: &StyleValue,
    ) -> Result<(), SurfaceError>;

    /// Called once after the last write of a pass.
    ///
    /// # Errors
    ///
    /// Reported as a failed pass even though every write landed.
    fn end_frame(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }
}

/// What one completed apply pass touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyReport {
    pub touched: TargetSet,
    pub writes: usize,
}

/// Push every registry value for `theme` onto `surface`.
///
/// # Errors
///
/// Returns the first [`SurfaceError`]; writes before it are not undone.
pub fn apply<S: Surface + ?Sized>(
    surface: &mut S,
    theme: &Theme,
    ctx: &StyleContext,
) -> Result<ApplyReport, SurfaceError> {
    surface.begin_frame(theme)?;

    let mut report = ApplyReport {
        touched: TargetSet::empty(),
        writes: 0,
    };
    for target in Target::ALL {
        for (property, value) in target.styles(theme, ctx) {
            trace!(%target, %property, %value, "set style");
            surface.set_style(target, property, &value)?;
            report.writes += 1;
        }
        report.touched |= target.flag();
    }

    surface.end_frame()?;
    Ok(report)
}

// ---------------------------------------------------------------------------
// RecordingSurface
// ---------------------------------------------------------------------------

/// One apply pass as seen by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub theme: String,
    pub writes: Vec<(Target, Property)>,
}

/// Passes a [`RecordingSurface`] remembers by default.
pub const FRAME_LOG: usize = 64;

/// In-memory surface that keeps the latest value per key and a log of the
/// most recent passes. Useful for headless hosts and for inspecting what a
/// theme resolves to.
///
/// The log is a ring: once it holds `limit` frames, each new pass evicts
/// the oldest, so memory stays flat however long the rotation runs.
#[derive(Debug)]
pub struct RecordingSurface {
    values: HashMap<(Target, Property), StyleValue>,
    frames: VecDeque<Frame>,
    limit: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::with_frame_limit(FRAME_LOG)
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` frames. Zero disables the log; values are
    /// still recorded.
    #[must_use]
    pub fn with_frame_limit(limit: usize) -> Self {
        Self {
            values: HashMap::new(),
            frames: VecDeque::with_capacity(limit.min(FRAME_LOG)),
            limit,
        }
    }

    /// Latest value written for `property` on `target`.
    #[must_use]
    pub fn get(&self, target: Target, property: Property) -> Option<&StyleValue> {
        self.values.get(&(target, property))
    }

    /// Number of distinct keys ever written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The retained passes, oldest first.
    #[must_use]
    pub const fn frames(&self) -> &VecDeque<Frame> {
        &self.frames
    }

    /// Theme of the most recent logged pass.
    #[must_use]
    pub fn current_theme(&self) -> Option<&str> {
        self.frames.back().map(|f| f.theme.as_str())
    }
}

impl Surface for RecordingSurface {
    fn begin_frame(&mut self, theme: &Theme) -> Result<(), SurfaceError> {
        if self.limit == 0 {
            return Ok(());
        }
        if self.frames.len() == self.limit {
            self.frames.pop_front();
        }
        self.frames.push_back(Frame {
            theme: theme.name().to_string(),
            writes: Vec::new(),
        });
        Ok(())
    }

    fn set_style(
        &mut self,
        target: Target,
        property: Property,
        value: &StyleValue,
    ) -> Result<(), SurfaceError> {
        self.values.insert((target, property), value.clone());
        if let Some(frame) = self.frames.back_mut() {
            frame.writes.push((target, property));
        }
        Ok(())
    }
}
