// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # surfproj Projection
//!
//! Projects points (typically mesh nodes) onto a reference surface that is
//! only reachable through ray casts, and reports the surface normal and local
//! curvature radius at the projected point.
//!
//! ```text
//! ClosestPointSearch ──► ProjectionEngine ──► RayCaster ──► RayIntersect
//!                              │
//!                              └──► MeshNodes (position, density, normal)
//! ```
//!
//! A projection runs in two phases. [`ProjectionEngine::project_raw`] resolves
//! the direction, casts the primary ray (and its reverse unless the direction
//! is strict) and disambiguates between two hits. When the request carries a
//! node and allows search, [`ProjectionEngine::project`] then checks the
//! displacement against the node's desired density and, if it is too large,
//! validates it with one corrective raw projection from a damped position
//! written temporarily into the mesh through a [`NodePositionGuard`].
//!
//! Geometric failures never surface as errors: the result carries a
//! [`ProjectionFailure`] and the original point. Caller contract violations
//! (a zero direction without a node, a non-finite point, an unknown node,
//! a mesh that refuses to restore a moved node) panic.

pub mod config;
pub mod engine;
pub mod guard;
pub mod ray;
pub mod request;
pub mod result;
pub mod search;

pub use config::ProjectionConfig;
pub use engine::ProjectionEngine;
pub use guard::NodePositionGuard;
pub use ray::{HitOutcome, RayCaster};
pub use request::ProjectionRequest;
pub use result::{ClosestPoint, ProjectionFailure, ProjectionResult};

pub use surfproj_core::{Error, MeshNodes, NoMesh, Point3, RayIntersect, Result, SurfaceHit, Vector3};
