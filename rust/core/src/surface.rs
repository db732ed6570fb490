// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ray-query seam to the reference surface.

use std::rc::Rc;
use std::sync::Arc;

use nalgebra::{Point3, Vector3};

/// Curvature radius reported for flat surfaces and when nothing was hit.
pub const FLAT_RADIUS: f64 = 1e10;

/// A forward intersection of a ray with the reference surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Intersection point
    pub position: Point3<f64>,
    /// Unit surface normal at the intersection
    pub normal: Vector3<f64>,
    /// Signed local curvature radius (`FLAT_RADIUS` for planar patches)
    pub radius: f64,
    /// Ray parameter of the hit, in units of the (unnormalized) direction
    pub distance: f64,
}

impl SurfaceHit {
    /// Create a new hit
    pub fn new(position: Point3<f64>, normal: Vector3<f64>, radius: f64, distance: f64) -> Self {
        Self {
            position,
            normal,
            radius,
            distance,
        }
    }
}

/// A surface that can be queried with rays.
///
/// Implementations return the nearest intersection with ray parameter
/// `t > epsilon` along `origin + t * direction`, so that a ray leaving a
/// surface point does not report that same point again. `direction` need not
/// be normalized.
pub trait RayIntersect {
    /// Nearest forward intersection, or `None` on a miss.
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit>;
}

impl<T: RayIntersect + ?Sized> RayIntersect for &T {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        (**self).ray_intersect(origin, direction)
    }
}

impl<T: RayIntersect + ?Sized> RayIntersect for Box<T> {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        (**self).ray_intersect(origin, direction)
    }
}

impl<T: RayIntersect + ?Sized> RayIntersect for Rc<T> {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        (**self).ray_intersect(origin, direction)
    }
}

impl<T: RayIntersect + ?Sized> RayIntersect for Arc<T> {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        (**self).ray_intersect(origin, direction)
    }
}
