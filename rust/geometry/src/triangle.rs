// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Triangle soups as ray-queryable surfaces.

use nalgebra::{Point3, Vector3};
use surfproj_core::{RayIntersect, SurfaceHit, FLAT_RADIUS};

use crate::aabb::Aabb;
use crate::error::{Error, Result};
use crate::is_forward;

/// Determinant below which a ray counts as parallel to a triangle
const PARALLEL_EPSILON: f64 = 1e-14;

/// Triangle definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Point3<f64>,
    pub v1: Point3<f64>,
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Unit normal following the winding order, `None` for zero-area triangles
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        edge1.cross(&edge2).try_normalize(1e-15)
    }

    /// Calculate triangle area
    pub fn area(&self) -> f64 {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        edge1.cross(&edge2).norm() * 0.5
    }

    /// Möller–Trumbore ray-triangle intersection.
    ///
    /// Returns the ray parameter of a forward hit.
    #[allow(clippy::many_single_char_names)]
    pub fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<f64> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = direction.cross(&edge2);
        let a = edge1.dot(&h);

        // Ray is parallel to triangle
        if a.abs() < PARALLEL_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = origin - self.v0;
        let u = f * s.dot(&h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(&edge1);
        let v = f * direction.dot(&q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(&q);
        is_forward(t, direction).then_some(t)
    }
}

/// A surface made of independent triangles.
///
/// Normals follow each triangle's winding; curvature is reported as flat.
#[derive(Debug, Clone)]
pub struct TriangleSurface {
    triangles: Vec<Triangle>,
    bounds: Option<Aabb>,
}

impl TriangleSurface {
    /// Create a surface from triangles. Zero-area triangles are dropped.
    pub fn new(triangles: Vec<Triangle>) -> Self {
        let triangles: Vec<Triangle> = triangles
            .into_iter()
            .filter(|t| t.normal().is_some())
            .collect();
        let bounds = Aabb::from_points(triangles.iter().flat_map(|t| [&t.v0, &t.v1, &t.v2]))
            .map(|b| b.expand(1e-9));
        Self { triangles, bounds }
    }

    /// Create a surface from flat position and index buffers
    pub fn from_indexed(positions: &[Point3<f64>], indices: &[u32]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::RaggedIndices(indices.len()));
        }

        let vertex = |index: u32| {
            positions
                .get(index as usize)
                .copied()
                .ok_or(Error::IndexOutOfRange {
                    index,
                    count: positions.len(),
                })
        };

        let triangles = indices
            .chunks_exact(3)
            .map(|tri| Ok(Triangle::new(vertex(tri[0])?, vertex(tri[1])?, vertex(tri[2])?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(triangles))
    }

    /// Number of (non-degenerate) triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Bounding box of the surface
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }
}

impl RayIntersect for TriangleSurface {
    fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<SurfaceHit> {
        self.bounds?.ray_intersect(origin, direction)?;

        let (t, tri) = self
            .triangles
            .iter()
            .filter_map(|tri| tri.ray_intersect(origin, direction).map(|t| (t, tri)))
            .min_by(|a, b| a.0.total_cmp(&b.0))?;

        let normal = tri.normal()?;
        Some(SurfaceHit::new(origin + direction * t, normal, FLAT_RADIUS, t))
    }
}
