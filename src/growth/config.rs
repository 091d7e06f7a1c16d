//! Simulation configuration and validation.
//!
//! All parameters are explicit and required. Validation happens once, at
//! engine construction; an invalid configuration is rejected with a
//! [`ConfigError`] and never silently clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by [`GrowthConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The seed center has a NaN or infinite coordinate.
    #[error("center must be finite, got ({0}, {1})")]
    NonFiniteCenter(f64, f64),

    /// A closed seed polygon needs at least three nodes.
    #[error("a closed curve needs at least 3 starting points, got {0}")]
    TooFewStartingPoints(usize),

    /// The seed circle radius must be a positive finite number.
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// `max_force` must be finite and non-negative.
    #[error("max_force must be non-negative and finite, got {0}")]
    InvalidMaxForce(f64),

    /// `max_speed` must be finite and non-negative.
    #[error("max_speed must be non-negative and finite, got {0}")]
    InvalidMaxSpeed(f64),

    /// `desired_separation` must be a positive finite number.
    #[error("desired_separation must be positive and finite, got {0}")]
    InvalidDesiredSeparation(f64),

    /// `separation_cohesion_ratio` must be finite and non-negative.
    #[error("separation_cohesion_ratio must be non-negative and finite, got {0}")]
    InvalidSeparationCohesionRatio(f64),

    /// `max_edge_length` must be a positive finite number.
    #[error("max_edge_length must be positive and finite, got {0}")]
    InvalidMaxEdgeLength(f64),
}

/// Immutable per-run parameter set for the growth simulation.
///
/// Field names serialize in camelCase so a JavaScript caller passes
/// `{ centerX, centerY, nStartingPoints, radius, maxForce, maxSpeed,
/// desiredSeparation, separationCohesionRatio, maxEdgeLength }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthConfig {
    /// X coordinate of the seed circle center.
    pub center_x: f64,
    /// Y coordinate of the seed circle center.
    pub center_y: f64,
    /// Number of nodes on the seed circle.
    pub n_starting_points: usize,
    /// Radius of the seed circle.
    pub radius: f64,
    /// Maximum magnitude of the per-step steering force.
    pub max_force: f64,
    /// Maximum magnitude of a node's velocity.
    pub max_speed: f64,
    /// Radius within which non-adjacent nodes generate separation force.
    pub desired_separation: f64,
    /// Weight of separation relative to cohesion in the net steering vector.
    pub separation_cohesion_ratio: f64,
    /// Edge length above which a midpoint node is inserted.
    pub max_edge_length: f64,
}

impl GrowthConfig {
    /// Check every parameter, returning the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ConfigError::NonFiniteCenter(self.center_x, self.center_y));
        }
        if self.n_starting_points < 3 {
            return Err(ConfigError::TooFewStartingPoints(self.n_starting_points));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.max_force.is_finite() || self.max_force < 0.0 {
            return Err(ConfigError::InvalidMaxForce(self.max_force));
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if !self.desired_separation.is_finite() || self.desired_separation <= 0.0 {
            return Err(ConfigError::InvalidDesiredSeparation(self.desired_separation));
        }
        if !self.separation_cohesion_ratio.is_finite() || self.separation_cohesion_ratio < 0.0 {
            return Err(ConfigError::InvalidSeparationCohesionRatio(
                self.separation_cohesion_ratio,
            ));
        }
        if !self.max_edge_length.is_finite() || self.max_edge_length <= 0.0 {
            return Err(ConfigError::InvalidMaxEdgeLength(self.max_edge_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> GrowthConfig {
        GrowthConfig {
            center_x: 100.0,
            center_y: 100.0,
            n_starting_points: 10,
            radius: 200.0,
            max_force: 1.5,
            max_speed: 1.0,
            desired_separation: 9.0,
            separation_cohesion_ratio: 0.9,
            max_edge_length: 5.0,
        }
    }

    #[test]
    fn test_valid_config() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_too_few_starting_points() {
        let config = GrowthConfig {
            n_starting_points: 2,
            ..valid()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooFewStartingPoints(2))
        );
    }

    #[test]
    fn test_negative_radius() {
        let config = GrowthConfig {
            radius: -1.0,
            ..valid()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadius(-1.0)));
    }

    #[test]
    fn test_nan_radius() {
        let config = GrowthConfig {
            radius: f64::NAN,
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_non_positive_max_edge_length() {
        let config = GrowthConfig {
            max_edge_length: 0.0,
            ..valid()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidMaxEdgeLength(0.0))
        );
    }

    #[test]
    fn test_zero_force_and_speed_are_valid() {
        // maxForce = 0 freezes the curve but is a legal configuration.
        let config = GrowthConfig {
            max_force: 0.0,
            max_speed: 0.0,
            ..valid()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_infinite_center() {
        let config = GrowthConfig {
            center_x: f64::INFINITY,
            ..valid()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteCenter(_, _))
        ));
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = r#"{
            "centerX": 0.0, "centerY": 0.0,
            "nStartingPoints": 10, "radius": 10.0,
            "maxForce": 1.5, "maxSpeed": 1.0,
            "desiredSeparation": 9.0,
            "separationCohesionRatio": 0.9,
            "maxEdgeLength": 5.0
        }"#;
        let config: GrowthConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.n_starting_points, 10);
        assert_eq!(config.max_edge_length, 5.0);
    }
}
