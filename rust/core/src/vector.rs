// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Small vector helpers on top of nalgebra.

use nalgebra::{Rotation3, Unit, Vector3};

/// Length below which a vector carries no usable direction.
const DEGENERATE_LENGTH: f64 = 1e-15;

/// Returns `true` if `|v| < tolerance`.
#[inline]
pub fn is_near_zero(v: &Vector3<f64>, tolerance: f64) -> bool {
    v.norm() < tolerance
}

/// Returns `true` if every component of `v` is finite.
#[inline]
pub fn is_finite_vector(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// Returns `true` if `v` is non-finite or too short to define a direction.
#[inline]
pub fn is_degenerate(v: &Vector3<f64>) -> bool {
    !is_finite_vector(v) || v.norm() < DEGENERATE_LENGTH
}

/// Returns a unit vector orthogonal to `v`.
///
/// `v` is crossed with the coordinate axis it is least aligned with, which
/// keeps the cross product well conditioned. A degenerate `v` yields the
/// z axis.
pub fn orthogonal_vector(v: &Vector3<f64>) -> Vector3<f64> {
    if is_degenerate(v) {
        return Vector3::z();
    }

    let abs = v.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vector3::x()
    } else if abs.y <= abs.z {
        Vector3::y()
    } else {
        Vector3::z()
    };

    v.cross(&axis).normalize()
}

/// Rotates `v` around `axis` by `angle` radians (right-handed).
///
/// The axis is normalized internally. A degenerate axis leaves `v` unchanged.
pub fn rotate(v: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    match Unit::try_new(*axis, DEGENERATE_LENGTH) {
        Some(unit_axis) => Rotation3::from_axis_angle(&unit_axis, angle) * v,
        None => *v,
    }
}
