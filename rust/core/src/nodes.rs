// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh-node seam: the per-node state the projection engine reads and,
//! during corrective re-projection, temporarily writes.

use std::convert::Infallible;
use std::fmt::Debug;

use nalgebra::{Point3, Vector3};

use crate::error::Result;

/// Access to the nodes of the mesh being projected.
///
/// `surface_normal` must be computed from the node's *current* stored
/// position, so writing a position and then querying the normal yields the
/// normal the mesh would have at that position.
pub trait MeshNodes {
    /// Identifier of a node
    type NodeId: Copy + Eq + Debug;

    /// Current stored position of a node
    fn position(&self, id: Self::NodeId) -> Option<Point3<f64>>;

    /// Overwrite the stored position of a node
    fn set_position(&mut self, id: Self::NodeId, position: Point3<f64>) -> Result<()>;

    /// Target local mesh spacing at a node
    fn desired_density(&self, id: Self::NodeId) -> Option<f64>;

    /// Surface normal of the mesh at a node, from its current position
    fn surface_normal(&self, id: Self::NodeId) -> Option<Vector3<f64>>;
}

/// A mesh with no nodes, for projecting free points.
///
/// Its node id type is uninhabited, so requests against it can never carry a
/// node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMesh;

impl MeshNodes for NoMesh {
    type NodeId = Infallible;

    fn position(&self, id: Infallible) -> Option<Point3<f64>> {
        match id {}
    }

    fn set_position(&mut self, id: Infallible, _position: Point3<f64>) -> Result<()> {
        match id {}
    }

    fn desired_density(&self, id: Infallible) -> Option<f64> {
        match id {}
    }

    fn surface_normal(&self, id: Infallible) -> Option<Vector3<f64>> {
        match id {}
    }
}

impl<M: MeshNodes + ?Sized> MeshNodes for &mut M {
    type NodeId = M::NodeId;

    fn position(&self, id: Self::NodeId) -> Option<Point3<f64>> {
        (**self).position(id)
    }

    fn set_position(&mut self, id: Self::NodeId, position: Point3<f64>) -> Result<()> {
        (**self).set_position(id, position)
    }

    fn desired_density(&self, id: Self::NodeId) -> Option<f64> {
        (**self).desired_density(id)
    }

    fn surface_normal(&self, id: Self::NodeId) -> Option<Vector3<f64>> {
        (**self).surface_normal(id)
    }
}
