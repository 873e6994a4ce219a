//! Ray representation shared by the eye-ray constructors and the box test.
//!
//! A ray is the half-line r(t) = origin + t * direction. Nothing here clips
//! t to be non-negative; that is left to whoever consumes the ray.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// For perspective eye rays this is the camera position, for orthographic
    /// eye rays a point on the image plane.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Unit length when built by [`perspective_eye_ray`](crate::camera::perspective_eye_ray).
    /// Orthographic rays carry whatever forward vector the caller supplied.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_walks_along_direction() {
        let r = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, -2.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(1.5), Vec3A::new(1.0, 2.0, 0.0));
        assert_eq!(r.at(-1.0), Vec3A::new(1.0, 2.0, 5.0));
    }
}
