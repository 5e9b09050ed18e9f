// SPDX-License-Identifier: MIT
//
// Sequencer: the rotation state machine.
//
// Owns the ordered cycle, the cursor into it, and the surface themes are
// applied to. Two states:
//
//   Idle ──start()──▶ Running ──advance()──▶ Running
//
// There is no way back to Idle; stopping the clock is the driver's job,
// and a stopped sequencer simply stops being advanced.
//
// Every method takes `&mut self`, so overlapping advances are ruled out
// by the borrow checker rather than by a lock.

use rotor_color::hue_distance;
use rotor_theme::{
    StyleContext, Theme, max_step, refine_two_opt, sort_by_color_similarity, tour_length,
};
use tracing::{debug, info, warn};

use crate::config::RotationConfig;
use crate::error::RotorError;
use crate::surface::{ApplyReport, Surface, apply};

/// Lifecycle of a [`Sequencer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Cycle computed, nothing applied yet.
    Idle,
    /// A theme has been applied; `advance` is allowed.
    Running,
}

/// Rotates a fixed catalog of themes onto a [`Surface`].
#[derive(Debug)]
pub struct Sequencer<S> {
    cycle: Vec<Theme>,
    cursor: usize,
    state: State,
    surface: S,
    ctx: StyleContext,
    applied: u64,
}

impl<S: Surface> Sequencer<S> {
    /// Order `catalog` into a cycle and park at its first theme.
    ///
    /// The catalog is only read; the sequencer keeps its own ordered copy.
    pub fn new(catalog: &[Theme], surface: S, config: &RotationConfig) -> Self {
        let mut cycle = sort_by_color_similarity(catalog);
        if config.refine {
            refine_two_opt(&mut cycle);
        }
        debug!(
            themes = cycle.len(),
            tour = tour_length(&cycle),
            max_step = max_step(&cycle),
            "cycle ordered"
        );

        Self {
            cycle,
            cursor: 0,
            state: State::Idle,
            surface,
            ctx: StyleContext {
                transition: config.transition,
            },
            applied: 0,
        }
    }

    /// Apply the first theme and enter [`State::Running`].
    ///
    /// If the surface fails, the sequencer stays Idle and `start` may be
    /// retried.
    ///
    /// # Errors
    ///
    /// - [`RotorError::AlreadyRunning`] if already started.
    /// - [`RotorError::EmptyCycle`] if the catalog was empty.
    /// - [`RotorError::Surface`] if the first apply fails.
    pub fn start(&mut self) -> Result<&Theme, RotorError> {
        if self.state == State::Running {
            return Err(RotorError::AlreadyRunning);
        }
        if self.cycle.is_empty() {
            return Err(RotorError::EmptyCycle);
        }

        self.cursor = 0;
        self.apply_current()?;
        self.state = State::Running;

        let theme = &self.cycle[self.cursor];
        info!(theme = theme.name(), themes = self.cycle.len(), "rotation started");
        Ok(theme)
    }

    /// Move to the next theme in the cycle (wrapping) and apply it.
    ///
    /// The cursor moves before the apply, so a failed apply still leaves
    /// the cursor on the new theme.
    ///
    /// # Errors
    ///
    /// - [`RotorError::NotRunning`] before [`start`](Self::start).
    /// - [`RotorError::Surface`] if the surface fails mid-apply.
    pub fn advance(&mut self) -> Result<&Theme, RotorError> {
        if self.state != State::Running {
            return Err(RotorError::NotRunning);
        }

        let from = self.cursor;
        self.cursor = (self.cursor + 1) % self.cycle.len();
        self.apply_current()?;

        let theme = &self.cycle[self.cursor];
        debug!(
            theme = theme.name(),
            cursor = self.cursor,
            step = hue_distance(self.cycle[from].hue(), theme.hue()),
            "advanced"
        );
        Ok(theme)
    }

    fn apply_current(&mut self) -> Result<ApplyReport, RotorError> {
        let theme = &self.cycle[self.cursor];
        match apply(&mut self.surface, theme, &self.ctx) {
            Ok(report) => {
                self.applied += 1;
                Ok(report)
            }
            Err(err) => {
                warn!(theme = theme.name(), error = %err, "apply failed");
                Err(err.into())
            }
        }
    }

    /// The theme under the cursor. `None` only for an empty cycle.
    #[must_use]
    pub fn current(&self) -> Option<&Theme> {
        self.cycle.get(self.cursor)
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The ordered cycle.
    #[must_use]
    pub fn cycle(&self) -> &[Theme] {
        &self.cycle
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cycle.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cycle.is_empty()
    }

    /// Completed apply passes since construction.
    #[must_use]
    pub const fn applied(&self) -> u64 {
        self.applied
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, ending the sequencer.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
