// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Convenience builders for common mesh patches.

use nalgebra::{Point3, Vector3};
use surfproj_core::Result;

use crate::arena::SurfaceMesh;
use crate::keys::NodeKey;

impl SurfaceMesh {
    /// Builds a planar, triangulated grid patch.
    ///
    /// The patch spans `origin + i/nu * u + j/nv * v` for `i in 0..=nu`,
    /// `j in 0..=nv`; every node gets `desired_density`. Faces are wound so
    /// that node normals point along `u × v`. Returns the mesh and the node
    /// keys in row-major order (`index = j * (nu + 1) + i`).
    ///
    /// Zero cell counts are treated as one.
    pub fn grid(
        origin: Point3<f64>,
        u: Vector3<f64>,
        v: Vector3<f64>,
        nu: usize,
        nv: usize,
        desired_density: f64,
    ) -> Result<(Self, Vec<NodeKey>)> {
        let mut mesh = Self::new();
        let (nu, nv) = (nu.max(1), nv.max(1));

        let mut keys = Vec::with_capacity((nu + 1) * (nv + 1));
        for j in 0..=nv {
            for i in 0..=nu {
                let p = origin + u * (i as f64 / nu as f64) + v * (j as f64 / nv as f64);
                keys.push(mesh.add_node(p, desired_density));
            }
        }

        let at = |i: usize, j: usize| keys[j * (nu + 1) + i];
        for j in 0..nv {
            for i in 0..nu {
                let (n00, n10, n11, n01) = (at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1));
                mesh.add_face([n00, n10, n11])?;
                mesh.add_face([n00, n11, n01])?;
            }
        }

        Ok((mesh, keys))
    }
}
