// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric queries on mesh entities.
//!
//! Everything here is computed from the current node positions; nothing is
//! cached.

use nalgebra::{Point3, Vector3};

use crate::arena::SurfaceMesh;
use crate::keys::*;

impl SurfaceMesh {
    /// Corner positions of a face.
    pub fn face_points(&self, key: FaceKey) -> Option<[Point3<f64>; 3]> {
        let face = self.faces.get(key)?;
        let [a, b, c] = face.nodes;
        Some([self.position(a)?, self.position(b)?, self.position(c)?])
    }

    /// Twice the area of a face times its unit normal (right-hand rule).
    fn face_cross(&self, key: FaceKey) -> Option<Vector3<f64>> {
        let [p0, p1, p2] = self.face_points(key)?;
        Some((p1 - p0).cross(&(p2 - p0)))
    }

    /// Unit normal of a face, `None` for zero-area faces.
    pub fn face_normal(&self, key: FaceKey) -> Option<Vector3<f64>> {
        self.face_cross(key)?.try_normalize(1e-15)
    }

    /// Area of a face.
    pub fn face_area(&self, key: FaceKey) -> Option<f64> {
        Some(self.face_cross(key)?.norm() * 0.5)
    }

    /// Area-weighted normal at a node.
    ///
    /// Returns `None` for nodes without faces or when adjacent normals cancel.
    pub fn node_normal(&self, key: NodeKey) -> Option<Vector3<f64>> {
        let sum = self
            .node_faces(key)
            .iter()
            .filter_map(|&f| self.face_cross(f))
            .fold(Vector3::zeros(), |acc, n| acc + n);
        sum.try_normalize(1e-15)
    }
}
