// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Infinite plane

use nalgebra::{Point3, Vector3};
use surfproj_core::{RayIntersect, SurfaceHit, FLAT_RADIUS};

use crate::error::{Error, Result};
use crate::is_forward;

/// Infinite plane through `point` with unit `normal`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Point on the plane
    pub point: Point3<f64>,
    /// Unit normal vector
    pub normal: Vector3<f64>,
}

impl Plane {
    /// Create a new plane. The normal is normalized.
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Result<Self> {
        let normal = normal
            .try_normalize(1e-15)
            .ok_or_else(|| Error::InvalidSurface("plane normal has zero length".into()))?;
        Ok(Self { point, normal })
    }

    /// Signed distance from point to plane.
    /// Positive = in front, Negative = behind
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        (point - self.point).dot(&self.normal)
    }
}

impl RayIntersect for Plane {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        let denom = direction.dot(&self.normal);
        if denom.abs() < 1e-15 {
            return None; // parallel
        }
        let t = -self.signed_distance(origin) / denom;
        if !is_forward(t, direction) {
            return None;
        }
        Some(SurfaceHit::new(origin + direction * t, self.normal, FLAT_RADIUS, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn floor() -> Plane {
        Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 2.0)).unwrap()
    }

    #[test]
    fn normal_is_normalized() {
        assert_relative_eq!(floor().normal, Vector3::z());
        assert!(Plane::new(Point3::origin(), Vector3::zeros()).is_err());
    }

    #[test]
    fn hit_from_above() {
        let hit = floor()
            .ray_intersect(&Point3::new(1.0, 1.0, 3.0), &Vector3::new(0.0, 0.0, -2.0))
            .unwrap();
        assert_relative_eq!(hit.position, Point3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(hit.distance, 1.5);
        assert_eq!(hit.radius, FLAT_RADIUS);
    }

    #[test]
    fn backward_and_parallel_rays_miss() {
        let p = floor();
        assert!(p.ray_intersect(&Point3::new(0.0, 0.0, 1.0), &Vector3::z()).is_none());
        assert!(p.ray_intersect(&Point3::new(0.0, 0.0, 1.0), &Vector3::x()).is_none());
    }

    #[test]
    fn signed_distance_follows_normal() {
        let p = floor();
        assert_relative_eq!(p.signed_distance(&Point3::new(5.0, -1.0, 2.5)), 2.5);
        assert_relative_eq!(p.signed_distance(&Point3::new(0.0, 3.0, -0.5)), -0.5);
    }

    #[test]
    fn ray_from_the_plane_does_not_hit_itself() {
        let p = floor();
        assert!(p.ray_intersect(&Point3::new(2.0, 0.0, 0.0), &-Vector3::z()).is_none());
    }
}
