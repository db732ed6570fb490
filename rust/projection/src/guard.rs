// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scoped temporary node position.

use nalgebra::Point3;
use surfproj_core::{Error, MeshNodes, Result};

/// Moves a mesh node for the lifetime of the guard.
///
/// The stored position is saved on acquisition and written back when the
/// guard is dropped, on every exit path. While the guard lives, the mesh is
/// only reachable read-only through [`NodePositionGuard::mesh`].
///
/// # Panics
///
/// Dropping the guard panics if the mesh refuses to take back the saved
/// position. During an unwind the failure is only logged.
pub struct NodePositionGuard<'m, M: MeshNodes + ?Sized> {
    mesh: &'m mut M,
    node: M::NodeId,
    original: Point3<f64>,
}

impl<'m, M: MeshNodes + ?Sized> NodePositionGuard<'m, M> {
    /// Save the node's position and move it to `position`.
    pub fn acquire(mesh: &'m mut M, node: M::NodeId, position: Point3<f64>) -> Result<Self> {
        let original = mesh
            .position(node)
            .ok_or_else(|| Error::UnknownNode(format!("{node:?}")))?;
        mesh.set_position(node, position)?;
        Ok(Self {
            mesh,
            node,
            original,
        })
    }

    pub fn mesh(&self) -> &M {
        &*self.mesh
    }

    pub fn node(&self) -> M::NodeId {
        self.node
    }

    /// Position the node had before acquisition
    pub fn original(&self) -> Point3<f64> {
        self.original
    }
}

impl<M: MeshNodes + ?Sized> Drop for NodePositionGuard<'_, M> {
    fn drop(&mut self) {
        if let Err(err) = self.mesh.set_position(self.node, self.original) {
            if std::thread::panicking() {
                tracing::error!(node = ?self.node, error = %err, "failed to restore node position");
            } else {
                panic!("failed to restore mesh node {:?}: {err}", self.node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    /// Single-node mesh
    struct OneNode(Point3<f64>);

    impl MeshNodes for OneNode {
        type NodeId = u8;

        fn position(&self, id: u8) -> Option<Point3<f64>> {
            (id == 0).then_some(self.0)
        }

        fn set_position(&mut self, id: u8, position: Point3<f64>) -> Result<()> {
            if id != 0 {
                return Err(Error::UnknownNode(id.to_string()));
            }
            self.0 = position;
            Ok(())
        }

        fn desired_density(&self, id: u8) -> Option<f64> {
            (id == 0).then_some(1.0)
        }

        fn surface_normal(&self, id: u8) -> Option<Vector3<f64>> {
            (id == 0).then(Vector3::z)
        }
    }

    #[test]
    fn moves_then_restores() {
        let start = Point3::new(0.1, 0.2, 0.3);
        let mut mesh = OneNode(start);
        {
            let guard = NodePositionGuard::acquire(&mut mesh, 0, Point3::new(9.0, 9.0, 9.0)).unwrap();
            assert_eq!(guard.mesh().position(0), Some(Point3::new(9.0, 9.0, 9.0)));
            assert_eq!(guard.original(), start);
            assert_eq!(guard.node(), 0);
        }
        assert_eq!(mesh.0, start);
    }

    #[test]
    fn restores_on_early_return() {
        fn bail(mesh: &mut OneNode) -> Option<()> {
            let guard = NodePositionGuard::acquire(mesh, 0, Point3::origin()).ok()?;
            guard.mesh().position(7)?;
            Some(())
        }

        let start = Point3::new(1.0, -2.0, 3.5);
        let mut mesh = OneNode(start);
        assert!(bail(&mut mesh).is_none());
        assert_eq!(mesh.0, start);
    }

    /// Single node that accepts one write and rejects the rest.
    struct WriteOnce {
        position: Point3<f64>,
        writes: usize,
    }

    impl MeshNodes for WriteOnce {
        type NodeId = u8;

        fn position(&self, _id: u8) -> Option<Point3<f64>> {
            Some(self.position)
        }

        fn set_position(&mut self, id: u8, position: Point3<f64>) -> Result<()> {
            self.writes += 1;
            if self.writes > 1 {
                return Err(Error::UnknownNode(id.to_string()));
            }
            self.position = position;
            Ok(())
        }

        fn desired_density(&self, _id: u8) -> Option<f64> {
            Some(1.0)
        }

        fn surface_normal(&self, _id: u8) -> Option<Vector3<f64>> {
            Some(Vector3::z())
        }
    }

    #[test]
    #[should_panic(expected = "failed to restore mesh node 0")]
    fn failed_restore_is_fatal() {
        let mut mesh = WriteOnce {
            position: Point3::origin(),
            writes: 0,
        };
        let guard = NodePositionGuard::acquire(&mut mesh, 0, Point3::new(0.0, 0.0, 0.9)).unwrap();
        drop(guard);
    }

    #[test]
    fn failed_restore_while_unwinding_does_not_abort() {
        let outcome = std::panic::catch_unwind(|| {
            let mut mesh = WriteOnce {
                position: Point3::origin(),
                writes: 0,
            };
            let _guard = NodePositionGuard::acquire(&mut mesh, 0, Point3::new(0.0, 0.0, 0.9)).unwrap();
            panic!("caller failure");
        });
        let payload = outcome.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"caller failure"));
    }

    #[test]
    fn unknown_node_is_not_acquired() {
        let mut mesh = OneNode(Point3::origin());
        assert!(matches!(
            NodePositionGuard::acquire(&mut mesh, 3, Point3::new(1.0, 1.0, 1.0)),
            Err(Error::UnknownNode(_))
        ));
        assert_eq!(mesh.0, Point3::origin());
    }
}
