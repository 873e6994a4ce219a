//! Ray/axis-aligned box intersection.
//!
//! Implements the slab method: the box is the intersection of three pairs of
//! parallel planes, one pair per axis. The ray's parameter range inside each
//! slab is computed independently and the three ranges are intersected.
//!
//! Zero direction components are not special-cased. `1.0 / 0.0` is an IEEE-754
//! infinity, which turns that axis into an "always inside" or "never inside"
//! slab depending on where the origin sits. An origin lying exactly on a face
//! plane of such an axis gives `0 * inf = NaN` for that plane; the other plane
//! still yields an infinity, so the ray only touches the face and is a miss.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;

/// Intersect a ray with the box `[bb_min, bb_max]`.
///
/// Writes the entry and exit parameters to `t_near` and `t_far` and returns
/// true if the ray spends a non-zero parameter span inside the box
/// (`t_far > t_near`). Grazing a single edge or corner counts as a miss, and
/// so does a ray running inside one of the box's face planes.
///
/// The interval is not clipped to `t >= 0`. A box entirely behind the origin
/// still reports true with both values negative; use [`Aabb::hit`] when only
/// forward hits matter.
///
/// `bb_min <= bb_max` is assumed. Passing the corners swapped gives the same
/// result because each axis is reordered before the slabs are combined.
pub fn ray_aabb_intersect(
    r: &Ray,
    bb_min: Vec3A,
    bb_max: Vec3A,
    t_near: &mut f32,
    t_far: &mut f32,
) -> bool {
    // Parameters at which the ray crosses all six box planes
    let inv_dir = Vec3A::ONE / r.direction;
    let t_bot = inv_dir * (bb_min - r.origin);
    let t_top = inv_dir * (bb_max - r.origin);

    let mut largest_tmin = f32::NEG_INFINITY;
    let mut smallest_tmax = f32::INFINITY;

    for axis in 0..3 {
        // Negative direction components cross the max plane first.
        // f32::min/max drop a NaN plane and keep the other plane's infinity.
        let (t0, t1) = (t_bot[axis], t_top[axis]);
        largest_tmin = largest_tmin.max(t0.min(t1));
        smallest_tmax = smallest_tmax.min(t0.max(t1));
    }

    *t_near = largest_tmin;
    *t_far = smallest_tmax;

    smallest_tmax > largest_tmin
}

/// Axis-aligned bounding box given by its two extreme corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Corner with the smallest coordinates
    pub min: Vec3A,
    /// Corner with the largest coordinates
    pub max: Vec3A,
}

impl Aabb {
    /// Create a box from its min and max corners. The order is trusted.
    pub fn new(min: Vec3A, max: Vec3A) -> Self {
        Self { min, max }
    }

    /// Create a box spanning two arbitrary corner points.
    pub fn from_corners(a: Vec3A, b: Vec3A) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vec3A {
        0.5 * (self.min + self.max)
    }

    /// Edge lengths along each axis.
    pub fn extent(&self) -> Vec3A {
        self.max - self.min
    }

    /// True if the point lies inside or on the boundary.
    pub fn contains(&self, p: Vec3A) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Unclipped `[t_near, t_far]` of the ray inside the box, if any.
    pub fn slab(&self, r: &Ray) -> Option<Interval> {
        let mut t_near = 0.0;
        let mut t_far = 0.0;
        if ray_aabb_intersect(r, self.min, self.max, &mut t_near, &mut t_far) {
            Some(Interval::new(t_near, t_far))
        } else {
            None
        }
    }

    /// True if the ray starts strictly inside the box, judged along the ray:
    /// its slab interval surrounds t = 0.
    pub fn origin_inside(&self, r: &Ray) -> bool {
        self.slab(r).is_some_and(|span| span.surrounds(0.0))
    }

    /// Portion of the slab interval that lies within `ray_t`.
    ///
    /// Pass `Interval::new(0.0, f32::INFINITY)` (or a small epsilon instead
    /// of zero) to reject boxes behind the ray origin. When the origin is inside
    /// the box the returned interval starts at `ray_t.min`.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Interval> {
        let clipped = self.slab(r)?.intersect(ray_t);
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }
}
