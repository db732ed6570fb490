// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! surfproj Geometry
//!
//! Reference surfaces that answer ray queries through
//! [`surfproj_core::RayIntersect`]. They stand in for a CAD kernel when
//! testing or embedding the projection engine: analytic planes and spheres
//! (which report exact curvature radii) and triangle soups.

pub mod aabb;
pub mod error;
pub mod plane;
pub mod set;
pub mod sphere;
pub mod triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use aabb::Aabb;
pub use error::{Error, Result};
pub use plane::Plane;
pub use set::SurfaceSet;
pub use sphere::Sphere;
pub use triangle::{Triangle, TriangleSurface};

pub use surfproj_core::{RayIntersect, SurfaceHit, FLAT_RADIUS};

/// Minimum travelled distance for a ray hit to count.
///
/// A ray that starts on a surface must not report its own origin.
pub const MIN_HIT_DISTANCE: f64 = 1e-9;

/// Returns `true` if ray parameter `t` along `direction` is far enough ahead.
#[inline]
pub(crate) fn is_forward(t: f64, direction: &Vector3<f64>) -> bool {
    t > 0.0 && t * direction.norm() > MIN_HIT_DISTANCE
}
