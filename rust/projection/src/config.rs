// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine tuning parameters.
//!
//! Loaded from defaults, JSON, or `SURFPROJ_*` environment variables.

use serde::{Deserialize, Serialize};
use surfproj_core::{Error, Result, FLAT_RADIUS};

/// Projection engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Directions shorter than this are replaced by the node normal.
    pub near_zero_direction: f64,
    /// `|n·d|` below which a hit is classified as tangent.
    pub tangent_tolerance: f64,
    /// Primary rays start this far behind the source point, so a source
    /// lying on the surface finds itself.
    pub ray_backoff: f64,
    /// Radius reported when no hit was recorded.
    pub flat_radius: f64,
    /// Allowed displacement as a fraction of the node's desired density.
    pub density_fraction: f64,
    /// Weight of the projected point in the damped corrective position.
    pub correction_weight: f64,
    /// Angular samples in the first closest-point search pass.
    pub initial_search_steps: usize,
    /// Largest angular resolution the closest-point search may reach.
    pub max_search_steps: usize,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            near_zero_direction: 1e-3,
            tangent_tolerance: 1e-6,
            ray_backoff: 1e-6,
            flat_radius: FLAT_RADIUS,
            density_fraction: 0.5,
            correction_weight: 0.1,
            initial_search_steps: 100,
            max_search_steps: 100 << 10,
        }
    }
}

impl ProjectionConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            near_zero_direction: env_or("SURFPROJ_NEAR_ZERO_DIRECTION", defaults.near_zero_direction),
            tangent_tolerance: env_or("SURFPROJ_TANGENT_TOLERANCE", defaults.tangent_tolerance),
            ray_backoff: env_or("SURFPROJ_RAY_BACKOFF", defaults.ray_backoff),
            flat_radius: env_or("SURFPROJ_FLAT_RADIUS", defaults.flat_radius),
            density_fraction: env_or("SURFPROJ_DENSITY_FRACTION", defaults.density_fraction),
            correction_weight: env_or("SURFPROJ_CORRECTION_WEIGHT", defaults.correction_weight),
            initial_search_steps: env_or("SURFPROJ_INITIAL_SEARCH_STEPS", defaults.initial_search_steps),
            max_search_steps: env_or("SURFPROJ_MAX_SEARCH_STEPS", defaults.max_search_steps),
        }
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("near_zero_direction", self.near_zero_direction),
            ("tangent_tolerance", self.tangent_tolerance),
            ("flat_radius", self.flat_radius),
            ("density_fraction", self.density_fraction),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.ray_backoff.is_finite() && self.ray_backoff >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "ray_backoff must be non-negative, got {}",
                self.ray_backoff
            )));
        }
        if !(self.correction_weight > 0.0 && self.correction_weight <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "correction_weight must be in (0, 1], got {}",
                self.correction_weight
            )));
        }
        if self.initial_search_steps == 0 {
            return Err(Error::InvalidConfig("initial_search_steps must be at least 1".into()));
        }
        if self.max_search_steps < self.initial_search_steps {
            return Err(Error::InvalidConfig(format!(
                "max_search_steps ({}) is below initial_search_steps ({})",
                self.max_search_steps, self.initial_search_steps
            )));
        }
        Ok(())
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ProjectionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_search_steps, 100);
        assert_eq!(config.max_search_steps, 102_400);
        assert_eq!(config.density_fraction, 0.5);
        assert_eq!(config.correction_weight, 0.1);
    }

    #[test]
    fn json_fills_missing_fields() {
        let config = ProjectionConfig::from_json(r#"{ "density_fraction": 0.25 }"#).unwrap();
        assert_eq!(config.density_fraction, 0.25);
        assert_eq!(config.near_zero_direction, 1e-3);
    }

    #[test]
    fn json_errors_are_reported() {
        assert!(matches!(
            ProjectionConfig::from_json("{ not json"),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            ProjectionConfig::from_json(r#"{ "correction_weight": 1.5 }"#),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn search_cap_must_cover_first_pass() {
        let config = ProjectionConfig {
            initial_search_steps: 200,
            max_search_steps: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_override() {
        std::env::set_var("SURFPROJ_MAX_SEARCH_STEPS", "800");
        std::env::set_var("SURFPROJ_DENSITY_FRACTION", "not a number");
        let config = ProjectionConfig::from_env();
        std::env::remove_var("SURFPROJ_MAX_SEARCH_STEPS");
        std::env::remove_var("SURFPROJ_DENSITY_FRACTION");

        assert_eq!(config.max_search_steps, 800);
        assert_eq!(config.density_fraction, 0.5);
    }
}
