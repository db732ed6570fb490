// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sphere with exact curvature radius

use nalgebra::{Point3, Vector3};
use surfproj_core::{RayIntersect, SurfaceHit};

use crate::error::{Error, Result};
use crate::is_forward;

/// Sphere surface
///
/// Hits report the outward normal. The curvature radius is `+radius` when
/// the ray arrives from outside and `-radius` when it arrives from inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3<f64>,
    pub radius: f64,
}

impl Sphere {
    /// Create a new sphere
    pub fn new(center: Point3<f64>, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidSurface(format!("sphere radius {radius}")));
        }
        Ok(Self { center, radius })
    }
}

impl RayIntersect for Sphere {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        let oc = origin - self.center;
        let a = direction.norm_squared();
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            return None;
        }

        let sqrt_disc = disc.sqrt();
        let t_near = (-b - sqrt_disc) / (2.0 * a);
        let t_far = (-b + sqrt_disc) / (2.0 * a);
        let t = [t_near, t_far].into_iter().find(|&t| is_forward(t, direction))?;

        let position = origin + direction * t;
        let normal = (position - self.center) / self.radius;
        let radius = if direction.dot(&normal) <= 0.0 {
            self.radius
        } else {
            -self.radius
        };

        Some(SurfaceHit::new(position, normal, radius, t))
    }
}
