// SPDX-License-Identifier: MIT
//
// rotor-engine: timed theme rotation.
//
// The `Sequencer` owns the ordered cycle and the cursor and applies
// themes to a host `Surface`. The `Rotor` drives it from a background
// `Ticker` at a fixed cadence. Hosts provide the surface and decide
// when to stop.

pub mod config;
pub mod driver;
pub mod error;
pub mod sequencer;
pub mod surface;
pub mod ticker;

pub use config::RotationConfig;
pub use driver::{Exit, Rotor, StopHandle};
pub use error::{ConfigError, RotorError, SurfaceError};
pub use sequencer::{Sequencer, State};
pub use surface::{ApplyReport, FRAME_LOG, Frame, RecordingSurface, Surface, apply};
pub use ticker::{Tick, Ticker};
