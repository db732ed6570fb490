// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closest-point search by angular ray sampling.

mod common;

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use surfproj_geometry::TriangleSurface;
use surfproj_projection::{NoMesh, ProjectionConfig, ProjectionEngine, ProjectionFailure};

use common::{horizontal_plane, init_tracing, patch};

/// Strip in the plane x = 10 seen from the origin between roughly 1.2 and
/// 2.4 degrees above the x axis.
fn narrow_strip() -> TriangleSurface {
    let corners = [
        Point3::new(10.0, 0.21, -1.0),
        Point3::new(10.0, 0.42, -1.0),
        Point3::new(10.0, 0.42, 1.0),
        Point3::new(10.0, 0.21, 1.0),
    ];
    TriangleSurface::from_indexed(&corners, &[0, 1, 2, 0, 2, 3]).unwrap()
}

#[test]
fn resolution_doubles_until_a_sample_hits() {
    init_tracing();
    let mut engine = ProjectionEngine::new(narrow_strip());

    let found = engine.find_closest(&NoMesh, Point3::origin(), None, Vector3::x());

    // 3.6 degree steps straddle the strip, 1.8 degree steps do not
    assert!(!found.result.is_failed());
    assert_eq!(found.resolution, 200);
    assert_eq!(found.samples, 300);
    let expected_y = 10.0 * (std::f64::consts::PI / 100.0).tan();
    assert_relative_eq!(found.result.point, Point3::new(10.0, expected_y, 0.0), epsilon = 1e-9);
    assert!(!engine.last_projection_failed());
}

#[test]
fn nearest_sample_wins() {
    let (mesh, centre) = patch(0.0, 0.0, 0.0, 1.0);
    let mut engine = ProjectionEngine::new(horizontal_plane(-2.0));

    // Zero direction falls back to the node normal; the sweep passes
    // through straight down.
    let found = engine.find_closest(&mesh, Point3::origin(), Some(centre), Vector3::zeros());

    assert!(!found.result.is_failed());
    assert_eq!(found.resolution, 100);
    assert_eq!(found.samples, 100);
    assert_relative_eq!(found.result.point, Point3::new(0.0, 0.0, -2.0), epsilon = 1e-9);
    assert_eq!(mesh.position(centre), Some(Point3::origin()));
}

#[test]
fn search_gives_up_at_the_cap() {
    init_tracing();
    let config = ProjectionConfig {
        max_search_steps: 400,
        ..Default::default()
    };
    // Every sample lies in the plane z = 0, parallel to the target
    let mut engine = ProjectionEngine::with_config(horizontal_plane(5.0), config).unwrap();
    let x = Point3::origin();

    let found = engine.find_closest(&NoMesh, x, None, Vector3::x());

    assert_eq!(found.result.failure, Some(ProjectionFailure::SearchExhausted { samples: 700 }));
    assert_eq!(found.samples, 700);
    assert_eq!(found.resolution, 400);
    assert_eq!(found.result.point, x);
    assert!(engine.last_projection_failed());
}

#[test]
fn degenerate_search_direction_fails_without_sampling() {
    let mut mesh = surfproj_mesh::SurfaceMesh::new();
    let node = mesh.add_node(Point3::new(0.0, 0.0, 1.0), 1.0);
    let mut engine = ProjectionEngine::new(horizontal_plane(0.0));

    let found = engine.find_closest(&mesh, Point3::new(0.0, 0.0, 1.0), Some(node), Vector3::zeros());

    assert_eq!(found.result.failure, Some(ProjectionFailure::DegenerateDirection));
    assert_eq!(found.samples, 0);
}
