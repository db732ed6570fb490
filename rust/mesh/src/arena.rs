// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for surface mesh nodes and faces.
//!
//! The [`SurfaceMesh`] owns all nodes and faces in slot maps with stable,
//! generational keys, plus an upward node → faces index used for normal
//! computation.

use nalgebra::Point3;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;
use surfproj_core::{Error, Result};

use crate::keys::*;

/// Data stored for a node.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub position: Point3<f64>,
    /// Target local mesh spacing around this node
    pub desired_density: f64,
}

/// Data stored for a face: a triangle over three distinct nodes.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub nodes: [NodeKey; 3],
}

/// Most interior nodes of a triangle mesh touch six faces.
pub(crate) type FaceList = SmallVec<[FaceKey; 8]>;

/// Surface mesh: nodes, triangular faces and node → face adjacency.
///
/// # Example
///
/// ```
/// use surfproj_mesh::SurfaceMesh;
/// use nalgebra::Point3;
///
/// let mut mesh = SurfaceMesh::new();
/// let a = mesh.add_node(Point3::new(0.0, 0.0, 0.0), 0.5);
/// let b = mesh.add_node(Point3::new(1.0, 0.0, 0.0), 0.5);
/// let c = mesh.add_node(Point3::new(0.0, 1.0, 0.0), 0.5);
/// mesh.add_face([a, b, c]).unwrap();
///
/// assert_eq!(mesh.node_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    pub(crate) nodes: SlotMap<NodeKey, NodeData>,
    pub(crate) faces: SlotMap<FaceKey, FaceData>,
    pub(crate) node_to_faces: FxHashMap<NodeKey, FaceList>,
}

impl SurfaceMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Node operations ---

    /// Adds a node at `position` with the given desired density.
    pub fn add_node(&mut self, position: Point3<f64>, desired_density: f64) -> NodeKey {
        self.nodes.insert(NodeData {
            position,
            desired_density,
        })
    }

    /// Returns the node data for the given key, or `None` if not found.
    pub fn node(&self, key: NodeKey) -> Option<&NodeData> {
        self.nodes.get(key)
    }

    /// Returns the number of nodes in the mesh.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over all node keys.
    pub fn node_keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.keys()
    }

    /// Returns the stored position of a node.
    pub fn position(&self, key: NodeKey) -> Option<Point3<f64>> {
        self.nodes.get(key).map(|n| n.position)
    }

    /// Moves a node.
    pub fn set_position(&mut self, key: NodeKey, position: Point3<f64>) -> Result<()> {
        let node = self.node_mut(key)?;
        node.position = position;
        Ok(())
    }

    /// Changes the desired density of a node.
    pub fn set_desired_density(&mut self, key: NodeKey, desired_density: f64) -> Result<()> {
        let node = self.node_mut(key)?;
        node.desired_density = desired_density;
        Ok(())
    }

    fn node_mut(&mut self, key: NodeKey) -> Result<&mut NodeData> {
        self.nodes
            .get_mut(key)
            .ok_or_else(|| Error::UnknownNode(format!("{key:?}")))
    }

    // --- Face operations ---

    /// Adds a triangle over three distinct existing nodes.
    pub fn add_face(&mut self, nodes: [NodeKey; 3]) -> Result<FaceKey> {
        for &n in &nodes {
            if !self.nodes.contains_key(n) {
                return Err(Error::UnknownNode(format!("{n:?}")));
            }
        }
        if nodes[0] == nodes[1] || nodes[1] == nodes[2] || nodes[0] == nodes[2] {
            return Err(Error::DegenerateFace);
        }

        let face = self.faces.insert(FaceData { nodes });
        for n in nodes {
            self.node_to_faces.entry(n).or_default().push(face);
        }
        Ok(face)
    }

    /// Returns the face data for the given key, or `None` if not found.
    pub fn face(&self, key: FaceKey) -> Option<&FaceData> {
        self.faces.get(key)
    }

    /// Returns the number of faces in the mesh.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Faces that use a node.
    pub fn node_faces(&self, key: NodeKey) -> &[FaceKey] {
        self.node_to_faces
            .get(&key)
            .map(|f| f.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (SurfaceMesh, [NodeKey; 3]) {
        let mut mesh = SurfaceMesh::new();
        let a = mesh.add_node(Point3::new(0.0, 0.0, 0.0), 1.0);
        let b = mesh.add_node(Point3::new(1.0, 0.0, 0.0), 1.0);
        let c = mesh.add_node(Point3::new(0.0, 1.0, 0.0), 1.0);
        (mesh, [a, b, c])
    }

    #[test]
    fn new_mesh_is_empty() {
        let mesh = SurfaceMesh::new();
        assert_eq!(mesh.node_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn add_and_move_node() {
        let (mut mesh, [a, ..]) = triangle();
        mesh.set_position(a, Point3::new(5.0, 6.0, 7.0)).unwrap();
        mesh.set_desired_density(a, 0.25).unwrap();

        let node = mesh.node(a).unwrap();
        assert_eq!(node.position, Point3::new(5.0, 6.0, 7.0));
        assert_eq!(node.desired_density, 0.25);
    }

    #[test]
    fn face_adjacency_is_tracked() {
        let (mut mesh, [a, b, c]) = triangle();
        let f = mesh.add_face([a, b, c]).unwrap();

        for n in [a, b, c] {
            assert_eq!(mesh.node_faces(n), &[f]);
        }
        assert_eq!(mesh.face(f).unwrap().nodes, [a, b, c]);
    }

    #[test]
    fn repeated_node_is_rejected() {
        let (mut mesh, [a, b, _]) = triangle();
        assert!(matches!(mesh.add_face([a, b, a]), Err(Error::DegenerateFace)));
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn unknown_node_is_rejected() {
        let (mut mesh, [a, b, _]) = triangle();
        let null = NodeKey::default();

        assert!(matches!(mesh.add_face([a, b, null]), Err(Error::UnknownNode(_))));
        assert!(mesh.set_position(null, Point3::origin()).is_err());
        assert!(mesh.position(null).is_none());
    }
}
