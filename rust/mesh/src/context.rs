// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! [`MeshNodes`] implementation for [`SurfaceMesh`].

use nalgebra::{Point3, Vector3};
use surfproj_core::{MeshNodes, Result};

use crate::arena::SurfaceMesh;
use crate::keys::NodeKey;

impl MeshNodes for SurfaceMesh {
    type NodeId = NodeKey;

    fn position(&self, id: NodeKey) -> Option<Point3<f64>> {
        SurfaceMesh::position(self, id)
    }

    fn set_position(&mut self, id: NodeKey, position: Point3<f64>) -> Result<()> {
        SurfaceMesh::set_position(self, id, position)
    }

    fn desired_density(&self, id: NodeKey) -> Option<f64> {
        self.node(id).map(|n| n.desired_density)
    }

    fn surface_normal(&self, id: NodeKey) -> Option<Vector3<f64>> {
        self.node_normal(id)
    }
}
