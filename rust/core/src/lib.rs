// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # surfproj core
//!
//! Vector helpers and the two collaborator seams used by the projection
//! engine: [`RayIntersect`] (the reference CAD surface, queried through ray
//! casts) and [`MeshNodes`] (per-node position, desired density and normal of
//! the mesh being projected).
//!
//! Positions are `nalgebra::Point3<f64>` and directions are
//! `nalgebra::Vector3<f64>` throughout the workspace.

pub mod error;
pub mod nodes;
pub mod surface;
pub mod vector;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use error::{Error, Result};
pub use nodes::{MeshNodes, NoMesh};
pub use surface::{RayIntersect, SurfaceHit, FLAT_RADIUS};
pub use vector::{is_degenerate, is_finite_vector, is_near_zero, orthogonal_vector, rotate};
