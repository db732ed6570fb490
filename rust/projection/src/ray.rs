// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ray casting against the reference surface.

use nalgebra::{Point3, Vector3};
use surfproj_core::{is_degenerate, RayIntersect, SurfaceHit};

/// Classified result of one ray shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// Regular intersection
    Hit(SurfaceHit),
    /// Intersection where the ray grazes the surface
    Tangent(SurfaceHit),
    /// Nothing on the forward half-line
    Miss,
}

impl HitOutcome {
    /// The intersection, for both regular and tangent hits
    pub fn hit(&self) -> Option<&SurfaceHit> {
        match self {
            HitOutcome::Hit(h) | HitOutcome::Tangent(h) => Some(h),
            HitOutcome::Miss => None,
        }
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, HitOutcome::Miss)
    }
}

/// Issues single ray queries and classifies them. No retries happen here.
#[derive(Debug)]
pub struct RayCaster<'g, G: ?Sized> {
    geometry: &'g G,
    tangent_tolerance: f64,
}

impl<'g, G: RayIntersect + ?Sized> RayCaster<'g, G> {
    pub fn new(geometry: &'g G, tangent_tolerance: f64) -> Self {
        Self {
            geometry,
            tangent_tolerance,
        }
    }

    /// Shoot a ray from `origin` along `direction` (need not be normalized).
    pub fn shoot(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> HitOutcome {
        if is_degenerate(direction) {
            return HitOutcome::Miss;
        }

        let outcome = match self.geometry.ray_intersect(origin, direction) {
            None => HitOutcome::Miss,
            Some(hit) => {
                let cos = hit.normal.dot(direction) / direction.norm();
                if cos.abs() < self.tangent_tolerance {
                    HitOutcome::Tangent(hit)
                } else {
                    HitOutcome::Hit(hit)
                }
            }
        };

        tracing::trace!(?origin, ?direction, ?outcome, "ray shot");
        outcome
    }
}
