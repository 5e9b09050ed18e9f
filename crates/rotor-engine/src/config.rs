// SPDX-License-Identifier: MIT
//
// Rotation timing and tuning.
//
// The cadence is a period per theme and a transition inside it: the
// surface animates for `transition`, then holds the settled theme for
// the rest of the period. A transition longer than the period would mean
// the next theme starts before the last one lands, so that is rejected.

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for theme rotation.
///
/// The defaults match the site the catalog was designed for: a new theme
/// every 3 seconds, animated over 2, held for 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    /// Time between automatic advances.
    pub period: Duration,
    /// How long the surface animates each change.
    pub transition: Duration,
    /// Run a 2-opt pass over the greedy cycle.
    pub refine: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_secs(3),
            transition: Duration::from_secs(2),
            refine: false,
        }
    }
}

impl RotationConfig {
    /// Check the timing contract.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroPeriod`] if `period` is zero.
    /// - [`ConfigError::TransitionTooLong`] if `transition > period`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period.is_zero() {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.transition > self.period {
            return Err(ConfigError::TransitionTooLong {
                transition: self.transition,
                period: self.period,
            });
        }
        Ok(())
    }

    /// Static time between the end of one transition and the next advance.
    #[must_use]
    pub fn hold(&self) -> Duration {
        self.period.saturating_sub(self.transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_three_two_one() {
        let config = RotationConfig::default();
        assert_eq!(config.period, Duration::from_secs(3));
        assert_eq!(config.transition, Duration::from_secs(2));
        assert_eq!(config.hold(), Duration::from_secs(1));
        assert!(!config.refine);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_period_rejected() {
        let config = RotationConfig {
            period: Duration::ZERO,
            transition: Duration::ZERO,
            ..RotationConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));
    }

    #[test]
    fn transition_longer_than_period_rejected() {
        let config = RotationConfig {
            period: Duration::from_millis(1000),
            transition: Duration::from_millis(1500),
            ..RotationConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TransitionTooLong { .. })));
    }

    #[test]
    fn transition_equal_to_period_allowed() {
        let config = RotationConfig {
            period: Duration::from_secs(2),
            transition: Duration::from_secs(2),
            ..RotationConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.hold(), Duration::ZERO);
    }

    #[test]
    fn zero_transition_is_a_hard_cut() {
        let config = RotationConfig {
            transition: Duration::ZERO,
            ..RotationConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.hold(), config.period);
    }
}
