// SPDX-License-Identifier: MIT
//
// Error types for the rotation engine.

use std::io;
use std::time::Duration;

use rotor_theme::{Property, Target};

/// Invalid rotation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rotation period must be greater than zero")]
    ZeroPeriod,

    #[error("transition ({transition:?}) is longer than the rotation period ({period:?})")]
    TransitionTooLong {
        transition: Duration,
        period: Duration,
    },
}

/// A host surface refused or failed a style write.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface I/O failed")]
    Io(#[from] io::Error),

    #[error("surface rejected {property} on {target}: {reason}")]
    Rejected {
        target: Target,
        property: Property,
        reason: String,
    },
}

/// Everything that can stop the rotation.
#[derive(Debug, thiserror::Error)]
pub enum RotorError {
    #[error("cannot rotate an empty catalog")]
    EmptyCycle,

    #[error("sequencer is already running")]
    AlreadyRunning,

    #[error("sequencer has not been started")]
    NotRunning,

    #[error("applying theme failed")]
    Surface(#[from] SurfaceError),

    #[error("invalid rotation config")]
    Config(#[from] ConfigError),

    #[error("could not spawn the rotation timer")]
    TimerSpawn(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn rejected_names_target_and_property() {
        let err = SurfaceError::Rejected {
            target: Target::Header,
            property: Property::BorderBottomColor,
            reason: "read-only".into(),
        };
        assert_eq!(
            err.to_string(),
            "surface rejected border-bottom-color on header: read-only"
        );
    }

    #[test]
    fn surface_error_chains_through_rotor_error() {
        let err = RotorError::from(SurfaceError::Io(io::Error::other("pipe closed")));
        assert_eq!(err.to_string(), "applying theme failed");
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("surface I/O failed"));
    }

    #[test]
    fn config_error_message() {
        let err = ConfigError::TransitionTooLong {
            transition: Duration::from_secs(4),
            period: Duration::from_secs(3),
        };
        assert_eq!(
            err.to_string(),
            "transition (4s) is longer than the rotation period (3s)"
        );
    }
}
