// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared fixtures for projection integration tests.

#![allow(dead_code)]

use nalgebra::{Point3, Vector3};
use surfproj_geometry::{Plane, Sphere};
use surfproj_mesh::{NodeKey, SurfaceMesh};

/// Route `tracing` output through the test harness (`RUST_LOG=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The plane z = `z` with upward normal.
pub fn horizontal_plane(z: f64) -> Plane {
    Plane::new(Point3::new(0.0, 0.0, z), Vector3::z()).unwrap()
}

pub fn sphere(center: Point3<f64>, radius: f64) -> Sphere {
    Sphere::new(center, radius).unwrap()
}

/// 2x2-cell square patch of side 2 in the plane z = `z`, centred on
/// (`cx`, `cy`). Returns the mesh and its centre node.
pub fn patch(cx: f64, cy: f64, z: f64, density: f64) -> (SurfaceMesh, NodeKey) {
    let (mesh, keys) = SurfaceMesh::grid(
        Point3::new(cx - 1.0, cy - 1.0, z),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 2.0, 0.0),
        2,
        2,
        density,
    )
    .unwrap();
    (mesh, keys[4])
}
