// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closest-point search by angular ray sampling.
//!
//! When no single direction can be trusted, the engine sweeps a trial
//! direction through a full turn in the plane spanned by the initial
//! direction and keeps the nearest hit. A pass with no hit doubles the
//! angular resolution, up to `ProjectionConfig::max_search_steps`.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};
use surfproj_core::{is_degenerate, orthogonal_vector, rotate, MeshNodes, RayIntersect};

use crate::engine::ProjectionEngine;
use crate::request::ProjectionRequest;
use crate::result::{ClosestPoint, ProjectionFailure, ProjectionResult};

impl<G: RayIntersect> ProjectionEngine<G> {
    /// Nearest surface point reachable by rays from `point` in the plane of
    /// `initial_direction`.
    ///
    /// Every sample is a strict-direction raw projection, so the mesh is
    /// only read. A near-zero `initial_direction` is replaced by the node
    /// normal, as in [`ProjectionEngine::project`].
    pub fn find_closest<M: MeshNodes + ?Sized>(
        &mut self,
        mesh: &M,
        point: Point3<f64>,
        node: Option<M::NodeId>,
        initial_direction: Vector3<f64>,
    ) -> ClosestPoint {
        let resolved = self.resolve_direction(mesh, node, initial_direction);
        let flat_radius = self.config().flat_radius;
        let unmoved = move |failure, resolution, samples| ClosestPoint {
            result: ProjectionResult {
                point,
                normal: resolved,
                radius: flat_radius,
                failure: Some(failure),
            },
            resolution,
            samples,
        };

        if is_degenerate(&resolved) {
            tracing::warn!(?node, direction = ?resolved, "degenerate search direction");
            let outcome = unmoved(ProjectionFailure::DegenerateDirection, 0, 0);
            self.last = Some(outcome.result);
            return outcome;
        }

        let axis = orthogonal_vector(&resolved);
        let mut direction = resolved;
        let mut steps = self.config().initial_search_steps;
        let mut samples = 0;
        let mut resolution = 0;

        while steps <= self.config().max_search_steps {
            resolution = steps;
            let increment = TAU / steps as f64;
            let mut nearest: Option<(f64, ProjectionResult)> = None;

            for _ in 0..steps {
                direction = rotate(&direction, &axis, increment);
                let request = ProjectionRequest::new(point)
                    .maybe_node(node)
                    .direction(direction)
                    .strict_direction(true)
                    .allow_search(false);
                let sample = self.project_raw(mesh, &request);
                samples += 1;

                if sample.is_failed() {
                    continue;
                }
                let distance = (point - sample.point).norm();
                if nearest.map_or(true, |(d, _)| distance < d) {
                    nearest = Some((distance, sample));
                }
            }

            if let Some((distance, result)) = nearest {
                tracing::debug!(?node, resolution, samples, distance, "closest-point search converged");
                self.last = Some(result);
                return ClosestPoint {
                    result,
                    resolution,
                    samples,
                };
            }

            tracing::debug!(?node, steps, "no hit in search pass, doubling resolution");
            match steps.checked_mul(2) {
                Some(next) => steps = next,
                None => break,
            }
        }

        tracing::warn!(?node, samples, "closest-point search exhausted");
        let outcome = unmoved(ProjectionFailure::SearchExhausted { samples }, resolution, samples);
        self.last = Some(outcome.result);
        outcome
    }
}
