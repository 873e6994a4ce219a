//! eyeray: camera rays and ray/box intersection for ray tracers
//!
//! Builds primary ("eye") rays for perspective and orthographic cameras from
//! normalized device coordinates, and intersects rays with axis-aligned
//! bounding boxes using the slab method. Everything here is a pure function
//! over `glam` values.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aabb;
pub mod camera;
pub mod interval;
pub mod ray;

pub use aabb::{Aabb, ray_aabb_intersect};
pub use camera::{
    CameraFrame, OrthographicCamera, PerspectiveCamera, Projection, orthographic_eye_ray,
    perspective_eye_ray, pixel_to_ndc,
};
pub use interval::Interval;
pub use ray::Ray;
