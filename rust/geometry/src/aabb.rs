// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes with a slab ray test.

use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a box from its corners
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all points, or `None` for an empty iterator
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut aabb = Self::new(first, first);
        for p in iter {
            aabb.include(p);
        }
        Some(aabb)
    }

    /// Grow the box to contain `p`
    pub fn include(&mut self, p: &Point3<f64>) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Expand the box by `epsilon` on every side
    pub fn expand(&self, epsilon: f64) -> Self {
        let e = Vector3::repeat(epsilon);
        Self {
            min: self.min - e,
            max: self.max + e,
        }
    }

    /// Slab test: returns the entry and exit parameters of the ray, clamped
    /// to the forward half-line.
    pub fn ray_intersect(&self, origin: &Point3<f64>, direction: &Vector3<f64>) -> Option<(f64, f64)> {
        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for axis in 0..3 {
            let d = direction[axis];
            let (lo, hi, o) = (self.min[axis], self.max[axis], origin[axis]);
            if d.abs() < f64::EPSILON {
                // Parallel to this slab: inside or never
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let t1 = (lo - o) * inv;
            let t2 = (hi - o) * inv;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
        }

        if t_max >= t_min && t_max >= 0.0 {
            Some((t_min.max(0.0), t_max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn ray_through_box() {
        let hit = unit_box().ray_intersect(&Point3::new(-1.0, 0.5, 0.5), &Vector3::x());
        assert_eq!(hit, Some((1.0, 2.0)));
    }

    #[test]
    fn ray_pointing_away_misses() {
        let hit = unit_box().ray_intersect(&Point3::new(-1.0, 0.5, 0.5), &-Vector3::x());
        assert!(hit.is_none());
    }

    #[test]
    fn axis_parallel_ray_outside_slab_misses() {
        let hit = unit_box().ray_intersect(&Point3::new(-1.0, 2.0, 0.5), &Vector3::x());
        assert!(hit.is_none());
    }

    #[test]
    fn from_points_bounds_everything() {
        let pts = [
            Point3::new(1.0, -2.0, 0.0),
            Point3::new(-1.0, 3.0, 0.5),
            Point3::new(0.0, 0.0, -4.0),
        ];
        let aabb = Aabb::from_points(&pts).unwrap();
        assert_eq!(aabb.min, Point3::new(-1.0, -2.0, -4.0));
        assert_eq!(aabb.max, Point3::new(1.0, 3.0, 0.5));
        assert!(Aabb::from_points(Vec::<Point3<f64>>::new().iter()).is_none());
    }
}
