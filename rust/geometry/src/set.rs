// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Several surfaces queried as one.

use nalgebra::{Point3, Vector3};
use surfproj_core::{RayIntersect, SurfaceHit};

/// Ordered collection of surfaces; a ray reports the nearest hit among them.
#[derive(Default)]
pub struct SurfaceSet {
    surfaces: Vec<Box<dyn RayIntersect>>,
}

impl SurfaceSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface to the set
    pub fn push(&mut self, surface: impl RayIntersect + 'static) {
        self.surfaces.push(Box::new(surface));
    }

    /// Builder form of [`SurfaceSet::push`]
    pub fn with(mut self, surface: impl RayIntersect + 'static) -> Self {
        self.push(surface);
        self
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl std::fmt::Debug for SurfaceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceSet")
            .field("surfaces", &self.surfaces.len())
            .finish()
    }
}

impl RayIntersect for SurfaceSet {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        self.surfaces
            .iter()
            .filter_map(|s| s.ray_intersect(origin, direction))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
