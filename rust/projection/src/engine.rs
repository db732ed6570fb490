// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Projection orchestration.
//!
//! `project_raw` is the geometric part (direction resolution, primary and
//! reverse rays, second-hit disambiguation) and never touches the mesh.
//! `project_with_correction` adds the density guard on top and is the only
//! place that moves a node, through [`NodePositionGuard`]. The corrective pass
//! is itself a `project_raw` call, so there is no recursion.

use nalgebra::{Point3, Vector3};
use surfproj_core::{is_degenerate, is_finite_vector, is_near_zero, MeshNodes, RayIntersect, Result};

use crate::config::ProjectionConfig;
use crate::guard::NodePositionGuard;
use crate::ray::RayCaster;
use crate::request::ProjectionRequest;
use crate::result::{ProjectionFailure, ProjectionResult};

/// Projects points onto a ray-queryable surface.
///
/// # Example
///
/// ```
/// use surfproj_projection::{NoMesh, ProjectionEngine, ProjectionRequest};
/// use surfproj_geometry::Sphere;
/// use nalgebra::{Point3, Vector3};
///
/// let sphere = Sphere::new(Point3::origin(), 2.0).unwrap();
/// let mut engine = ProjectionEngine::new(sphere);
///
/// let request = ProjectionRequest::new(Point3::new(0.0, 0.0, 5.0)).direction(Vector3::z());
/// let result = engine.project(&mut NoMesh, request);
///
/// assert!(!result.is_failed());
/// assert!((result.point - Point3::new(0.0, 0.0, 2.0)).norm() < 1e-9);
/// assert_eq!(result.radius, 2.0);
/// ```
#[derive(Debug)]
pub struct ProjectionEngine<G> {
    geometry: G,
    config: ProjectionConfig,
    pub(crate) last: Option<ProjectionResult>,
}

impl<G: RayIntersect> ProjectionEngine<G> {
    /// Create an engine with the default configuration
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            config: ProjectionConfig::default(),
            last: None,
        }
    }

    /// Create an engine with a validated configuration
    pub fn with_config(geometry: G, config: ProjectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            geometry,
            config,
            last: None,
        })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Result of the most recent `project`, `radius` or `find_closest` call
    pub fn last_result(&self) -> Option<&ProjectionResult> {
        self.last.as_ref()
    }

    /// Whether the most recent call failed.
    ///
    /// Only meaningful immediately after that call; prefer the returned
    /// [`ProjectionResult`].
    pub fn last_projection_failed(&self) -> bool {
        self.last.is_some_and(|r| r.is_failed())
    }

    /// Project a point, applying the density guard when the request carries
    /// a node and allows search.
    ///
    /// The mesh is borrowed mutably because the guard may move the node
    /// temporarily; its stored positions are unchanged when this returns.
    pub fn project<M: MeshNodes + ?Sized>(
        &mut self,
        mesh: &mut M,
        request: ProjectionRequest<M::NodeId>,
    ) -> ProjectionResult {
        let result = match request.node {
            Some(node) if request.allow_search => self.project_with_correction(mesh, &request, node),
            _ => self.project_raw(&*mesh, &request),
        };
        self.last = Some(result);
        result
    }

    /// [`ProjectionEngine::project`], returning only the point.
    ///
    /// On failure this is the source point; use
    /// [`ProjectionEngine::last_projection_failed`] to tell the cases apart.
    pub fn project_point<M: MeshNodes + ?Sized>(
        &mut self,
        mesh: &mut M,
        request: ProjectionRequest<M::NodeId>,
    ) -> Point3<f64> {
        self.project(mesh, request).point
    }

    /// Curvature radius of the surface under a node.
    ///
    /// Projects the node's stored position along its normal without the
    /// density guard.
    pub fn radius<M: MeshNodes + ?Sized>(&mut self, mesh: &M, node: M::NodeId) -> f64 {
        let position = node_position(mesh, node);
        let request = ProjectionRequest::new(position).node(node).allow_search(false);
        let result = self.project_raw(mesh, &request);
        self.last = Some(result);
        result.radius
    }

    /// Geometric projection without the density guard.
    ///
    /// `allow_search` is ignored. The mesh is only read.
    ///
    /// # Panics
    ///
    /// If the direction is near zero and the request has no node, if the
    /// node is unknown to the mesh, or if the source point is not finite.
    pub fn project_raw<M: MeshNodes + ?Sized>(
        &self,
        mesh: &M,
        request: &ProjectionRequest<M::NodeId>,
    ) -> ProjectionResult {
        let x = request.point;
        let direction = self.resolve_direction(mesh, request.node, request.direction);
        assert!(
            is_finite_vector(&x.coords),
            "projection source point is not finite: {x:?}"
        );

        let unmoved = |failure| ProjectionResult {
            point: x,
            normal: direction,
            radius: self.config.flat_radius,
            failure: Some(failure),
        };

        if is_degenerate(&direction) {
            tracing::warn!(node = ?request.node, ?direction, "degenerate projection direction");
            return unmoved(ProjectionFailure::DegenerateDirection);
        }

        let caster = self.caster();
        let mut n = direction;
        let mut primary = caster.shoot(&self.ray_origin(&x, &n), &n);
        if primary.is_miss() && !request.strict_direction {
            tracing::debug!(node = ?request.node, "primary ray missed, retrying reversed");
            n = -n;
            primary = caster.shoot(&self.ray_origin(&x, &n), &n);
        }
        let Some(&first) = primary.hit() else {
            return unmoved(ProjectionFailure::Miss);
        };

        // `n` now points from the surface back toward the query side
        n = -n;
        let mut best = first;

        if !request.strict_direction {
            let secondary = caster.shoot(&first.position, &n);
            if let Some(second) = secondary.hit() {
                if (x - second.position).norm() < (x - first.position).norm() {
                    tracing::debug!(
                        node = ?request.node,
                        first = ?first.position,
                        second = ?second.position,
                        "second hit is nearer, replacing first"
                    );
                    best = *second;
                }
            }
        }

        ProjectionResult {
            point: best.position,
            normal: best.normal,
            radius: best.radius,
            failure: None,
        }
    }

    /// Raw projection followed by the density guard.
    fn project_with_correction<M: MeshNodes + ?Sized>(
        &self,
        mesh: &mut M,
        request: &ProjectionRequest<M::NodeId>,
        node: M::NodeId,
    ) -> ProjectionResult {
        let first = self.project_raw(&*mesh, request);
        if first.is_failed() {
            return first;
        }

        let Some(density) = mesh.desired_density(node) else {
            panic!("unknown mesh node {node:?}");
        };
        let limit = self.config.density_fraction * density;
        let displacement = (request.point - first.point).norm();
        if displacement <= limit {
            return first;
        }

        let stored = node_position(&*mesh, node);
        let w = self.config.correction_weight;
        let corrected = Point3::from(first.point.coords * w + stored.coords * (1.0 - w));
        tracing::debug!(?node, displacement, limit, "displacement above density limit, re-projecting");

        let check = {
            let guard = match NodePositionGuard::acquire(mesh, node, corrected) {
                Ok(guard) => guard,
                Err(err) => panic!("cannot move mesh node {node:?}: {err}"),
            };
            let normal = guard.mesh().surface_normal(node).unwrap_or_else(Vector3::zeros);
            let correction = ProjectionRequest::new(corrected)
                .node(node)
                .direction(normal)
                .strict_direction(false)
                .allow_search(false);
            self.project_raw(guard.mesh(), &correction)
        };

        let rejected = |failure| ProjectionResult {
            point: request.point,
            failure: Some(failure),
            ..first
        };

        if check.is_failed() {
            tracing::debug!(?node, failure = ?check.failure, "corrective projection failed");
            return rejected(ProjectionFailure::CorrectionFailed);
        }

        let deviation = (check.point - first.point).norm();
        if deviation > limit {
            tracing::debug!(?node, deviation, limit, "corrective projection deviates, rejecting");
            return rejected(ProjectionFailure::DensityGuard { deviation, limit });
        }

        first
    }

    /// Replace a near-zero direction by the node normal.
    pub(crate) fn resolve_direction<M: MeshNodes + ?Sized>(
        &self,
        mesh: &M,
        node: Option<M::NodeId>,
        direction: Vector3<f64>,
    ) -> Vector3<f64> {
        if !is_near_zero(&direction, self.config.near_zero_direction) {
            return direction;
        }
        let Some(node) = node else {
            panic!("near-zero projection direction {direction:?} requires a mesh node");
        };
        // Unknown nodes are a contract violation even here
        node_position(mesh, node);
        mesh.surface_normal(node).unwrap_or_else(Vector3::zeros)
    }

    pub(crate) fn caster(&self) -> RayCaster<'_, G> {
        RayCaster::new(&self.geometry, self.config.tangent_tolerance)
    }

    /// Primary rays start slightly behind the source point.
    fn ray_origin(&self, x: &Point3<f64>, direction: &Vector3<f64>) -> Point3<f64> {
        x - direction * (self.config.ray_backoff / direction.norm())
    }
}

/// Stored position of a node that must exist.
pub(crate) fn node_position<M: MeshNodes + ?Sized>(mesh: &M, node: M::NodeId) -> Point3<f64> {
    match mesh.position(node) {
        Some(p) => p,
        None => panic!("unknown mesh node {node:?}"),
    }
}
