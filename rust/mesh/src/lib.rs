// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # surfproj Mesh
//!
//! Arena-based surface mesh used as the node context of the projection
//! engine. Nodes carry a position and a desired local mesh density; faces are
//! triangles over nodes. Node normals are recomputed from the current node
//! positions on every query, so moving a node immediately changes the
//! normals around it.

pub mod arena;
pub mod builders;
pub mod context;
pub mod geometry;
pub mod keys;

pub use arena::{FaceData, NodeData, SurfaceMesh};
pub use keys::{FaceKey, NodeKey};
pub use surfproj_core::{Error, Result};
