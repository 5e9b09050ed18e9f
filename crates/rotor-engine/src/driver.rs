// SPDX-License-Identifier: MIT
//
// Driver: wires the ticker to the sequencer.
//
// `Rotor::run` spawns the ticker, then loops on the tick channel with a
// short `recv_timeout` so a stop request is noticed even between ticks.
// Every received tick becomes one `advance()` on the calling thread; the
// sequencer is never shared across threads.
//
// A tick that came due while the previous apply was still running is
// dropped. A surface that stalls for several periods therefore gets one
// advance on the next fresh tick, not a burst of catch-up advances.
//
// The loop ends on the first of:
//
//   1. `StopHandle::stop()` from any thread
//   2. the optional tick limit
//   3. the tick channel disconnecting
//   4. an apply error, which is returned and ends rotation for good

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

use crate::config::RotationConfig;
use crate::error::RotorError;
use crate::sequencer::{Sequencer, State};
use crate::surface::Surface;
use crate::ticker::{Tick, Ticker};

/// How long the loop waits on the channel before re-checking the stop flag.
const POLL: Duration = Duration::from_millis(50);

/// Why [`Rotor::run`] returned without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Stopped,
    TickLimit,
    Disconnected,
}

/// Ends a running [`Rotor`] from anywhere.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Timed auto-advance for a [`Sequencer`].
///
/// # Example
///
/// ```no_run
/// use rotor_engine::{RecordingSurface, Rotor, RotationConfig, Sequencer};
/// use rotor_theme::builtin_catalog;
///
/// let config = RotationConfig::default();
/// let mut seq = Sequencer::new(&builtin_catalog()?, RecordingSurface::new(), &config);
///
/// let rotor = Rotor::new(config)?.with_tick_limit(12);
/// rotor.run(&mut seq)?;
/// assert_eq!(seq.cursor(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Rotor {
    config: RotationConfig,
    tick_limit: Option<u64>,
    stop: StopHandle,
}

impl Rotor {
    /// # Errors
    ///
    /// Returns [`RotorError::Config`] if the timing is invalid.
    pub fn new(config: RotationConfig) -> Result<Self, RotorError> {
        config.validate()?;
        Ok(Self {
            config,
            tick_limit: None,
            stop: StopHandle::default(),
        })
    }

    /// Return after `limit` advances.
    #[must_use]
    pub fn with_tick_limit(mut self, limit: u64) -> Self {
        self.tick_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    #[must_use]
    pub const fn config(&self) -> &RotationConfig {
        &self.config
    }

    /// Start the sequencer if needed, then advance it once per period.
    ///
    /// The ticker is always stopped before returning.
    ///
    /// # Errors
    ///
    /// - [`RotorError::TimerSpawn`] if the ticker thread cannot start.
    /// - Any error from [`Sequencer::start`] or [`Sequencer::advance`].
    pub fn run<S: Surface>(&self, seq: &mut Sequencer<S>) -> Result<Exit, RotorError> {
        if seq.state() == State::Idle {
            seq.start()?;
        }

        let (mut ticker, rx) = Ticker::spawn(self.config.period).map_err(RotorError::TimerSpawn)?;
        info!(
            period_ms = self.config.period.as_millis(),
            transition_ms = self.config.transition.as_millis(),
            "rotor running"
        );

        let result = self.drive(seq, &rx);

        // Always stop the clock, even if the loop errored.
        ticker.stop();
        match &result {
            Ok(exit) => info!(?exit, applied = seq.applied(), "rotor stopped"),
            Err(err) => warn!(error = %err, "rotor halted"),
        }
        result
    }

    /// The receive loop, separate from `run` so it can be fed by hand.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Sequencer::advance`].
    pub fn drive<S: Surface>(
        &self,
        seq: &mut Sequencer<S>,
        rx: &Receiver<Tick>,
    ) -> Result<Exit, RotorError> {
        let mut advances = 0;
        // When the last apply pass finished.
        let mut settled: Option<Instant> = None;

        loop {
            if self.stop.is_stopped() {
                return Ok(Exit::Stopped);
            }
            if self.tick_limit.is_some_and(|limit| advances >= limit) {
                return Ok(Exit::TickLimit);
            }

            match rx.recv_timeout(POLL) {
                Ok(tick) => {
                    // A stop that raced the tick wins.
                    if self.stop.is_stopped() {
                        return Ok(Exit::Stopped);
                    }
                    if settled.is_some_and(|at| tick.due < at) {
                        debug!(seq = tick.seq, "tick came due during apply, dropped");
                        continue;
                    }
                    trace!(seq = tick.seq, "tick");
                    seq.advance()?;
                    settled = Some(Instant::now());
                    advances += 1;
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Ok(Exit::Disconnected),
            }
        }
    }
}
