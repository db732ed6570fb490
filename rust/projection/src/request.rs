// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input bundle of a projection.

use nalgebra::{Point3, Vector3};

/// What to project, from where, and how.
///
/// # Example
///
/// ```
/// use surfproj_projection::{NoMesh, MeshNodes, ProjectionRequest};
/// use nalgebra::{Point3, Vector3};
///
/// let request: ProjectionRequest<<NoMesh as MeshNodes>::NodeId> =
///     ProjectionRequest::new(Point3::new(0.0, 0.0, 2.0))
///         .direction(Vector3::z())
///         .strict_direction(true);
///
/// assert!(request.node.is_none());
/// assert!(request.allow_search);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionRequest<Id> {
    /// Source point
    pub point: Point3<f64>,
    /// Mesh node the point belongs to, if any
    pub node: Option<Id>,
    /// Direction hint; a near-zero vector means "use the node normal"
    pub direction: Vector3<f64>,
    /// Only cast along `direction`: no reverse ray, no second-hit check
    pub strict_direction: bool,
    /// Enable the density guard and its corrective re-projection
    pub allow_search: bool,
}

impl<Id> ProjectionRequest<Id> {
    /// Request with no node, zero direction, non-strict, search allowed.
    pub fn new(point: Point3<f64>) -> Self {
        Self {
            point,
            node: None,
            direction: Vector3::zeros(),
            strict_direction: false,
            allow_search: true,
        }
    }

    pub fn node(mut self, node: Id) -> Self {
        self.node = Some(node);
        self
    }

    pub fn maybe_node(mut self, node: Option<Id>) -> Self {
        self.node = node;
        self
    }

    pub fn direction(mut self, direction: Vector3<f64>) -> Self {
        self.direction = direction;
        self
    }

    pub fn strict_direction(mut self, strict: bool) -> Self {
        self.strict_direction = strict;
        self
    }

    pub fn allow_search(mut self, allow: bool) -> Self {
        self.allow_search = allow;
        self
    }
}
