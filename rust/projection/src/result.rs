// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outcome types returned by the engine.

use nalgebra::{Point3, Vector3};
use thiserror::Error;

/// Why a projection did not move the point.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ProjectionFailure {
    #[error("ray missed the surface")]
    Miss,

    #[error("projection direction is degenerate")]
    DegenerateDirection,

    #[error("corrected projection deviates by {deviation} (limit {limit})")]
    DensityGuard { deviation: f64, limit: f64 },

    #[error("corrective re-projection failed")]
    CorrectionFailed,

    #[error("closest-point search found no surface after {samples} samples")]
    SearchExhausted { samples: usize },
}

/// Projected point with its surface normal and curvature radius.
///
/// On failure `point` is the unmodified source point; check
/// [`ProjectionResult::is_failed`] instead of comparing points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionResult {
    pub point: Point3<f64>,
    pub normal: Vector3<f64>,
    pub radius: f64,
    pub failure: Option<ProjectionFailure>,
}

impl ProjectionResult {
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// The projected point, or the failure reason
    pub fn into_result(self) -> Result<Point3<f64>, ProjectionFailure> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.point),
        }
    }
}

/// Outcome of a closest-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    pub result: ProjectionResult,
    /// Angular resolution of the last pass
    pub resolution: usize,
    /// Ray samples tried over all passes
    pub samples: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_result_reports_failure() {
        let ok = ProjectionResult {
            point: Point3::new(1.0, 2.0, 3.0),
            normal: Vector3::z(),
            radius: 4.0,
            failure: None,
        };
        assert_eq!(ok.into_result(), Ok(Point3::new(1.0, 2.0, 3.0)));

        let failed = ProjectionResult {
            failure: Some(ProjectionFailure::Miss),
            ..ok
        };
        assert!(failed.is_failed());
        assert_eq!(failed.into_result(), Err(ProjectionFailure::Miss));
    }

    #[test]
    fn failure_messages() {
        let guard = ProjectionFailure::DensityGuard {
            deviation: 0.9,
            limit: 0.5,
        };
        assert_eq!(guard.to_string(), "corrected projection deviates by 0.9 (limit 0.5)");
        assert_eq!(
            ProjectionFailure::SearchExhausted { samples: 700 }.to_string(),
            "closest-point search found no surface after 700 samples"
        );
    }
}
