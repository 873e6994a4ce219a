//! Eye-ray generation for perspective and orthographic cameras.
//!
//! Image-plane positions are given in normalized device coordinates (NDC),
//! `[-1, 1]` on both axes with +y up. Cameras look down their local -Z axis.

use glam::{Mat4, Vec2, Vec3A, Vec4};

use crate::ray::Ray;

/// Build a perspective eye ray through `ndc`.
///
/// `cam_scale` is the tangent of half the vertical field of view and
/// `cam_aspect` is width over height. The camera-space direction
/// `(x, y, -1, 0)` is taken to world space by `cam_transform` with w = 0, so
/// the transform's translation does not affect the direction.
///
/// The returned direction is unit length. A transform that collapses the
/// direction to zero yields NaN components.
pub fn perspective_eye_ray(
    cam_pos: Vec3A,
    cam_transform: Mat4,
    cam_aspect: f32,
    cam_scale: f32,
    ndc: Vec2,
) -> Ray {
    let x = ndc.x * cam_aspect * cam_scale;
    let y = ndc.y * cam_scale;

    let dir = cam_transform * Vec4::new(x, y, -1.0, 0.0);
    Ray::new(cam_pos, Vec3A::from(dir.truncate()).normalize())
}

/// Build an orthographic eye ray through `ndc`.
///
/// The origin is offset on the image plane by `ndc.x * cam_right` and
/// `ndc.y * cam_up`, so the basis vectors' lengths set the half-extents of the
/// view. Every ray shares `cam_dir` as is; it is not normalized here.
pub fn orthographic_eye_ray(
    cam_pos: Vec3A,
    cam_right: Vec3A,
    cam_up: Vec3A,
    cam_dir: Vec3A,
    ndc: Vec2,
) -> Ray {
    Ray::new(cam_pos + ndc.x * cam_right + ndc.y * cam_up, cam_dir)
}

/// Map the centre of pixel `(i, j)` to NDC.
///
/// Row 0 is the top of the image, so it lands near `ndc.y = 1`.
pub fn pixel_to_ndc(i: u32, j: u32, width: u32, height: u32) -> Vec2 {
    let u = (i as f32 + 0.5) / width as f32;
    let v = (j as f32 + 0.5) / height as f32;
    Vec2::new(2.0 * u - 1.0, 1.0 - 2.0 * v)
}

/// Orthonormal camera frame in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera position
    pub position: Vec3A,
    /// Unit vector pointing to camera right
    pub right: Vec3A,
    /// Unit vector pointing to camera up
    pub up: Vec3A,
    /// Unit view direction
    pub forward: Vec3A,
}

impl CameraFrame {
    /// Frame at `lookfrom` looking towards `lookat`.
    ///
    /// `vup` only needs to be non-parallel to the view direction; the frame's
    /// `up` is re-orthogonalized from it.
    pub fn look_at(lookfrom: Vec3A, lookat: Vec3A, vup: Vec3A) -> Self {
        let w = (lookfrom - lookat).normalize(); // Points opposite view direction
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            position: lookfrom,
            right: u,
            up: v,
            forward: -w,
        }
    }

    /// False if the basis contains non-finite components, as produced by
    /// `lookfrom == lookat` or a `vup` parallel to the view direction.
    pub fn is_valid(&self) -> bool {
        self.right.is_finite() && self.up.is_finite() && self.forward.is_finite()
    }

    /// Camera-to-world transform: columns are right, up, back (-forward) and
    /// the position.
    pub fn camera_to_world(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            (-self.forward).extend(0.0),
            self.position.extend(1.0),
        )
    }
}

/// Pinhole camera producing perspective eye rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// World-space frame
    pub frame: CameraFrame,
    /// Image width over height
    pub aspect: f32,
    /// tan(vfov / 2)
    pub scale: f32,
    transform: Mat4,
}

impl PerspectiveCamera {
    /// Camera with a vertical field of view in degrees.
    pub fn new(frame: CameraFrame, vfov: f32, aspect: f32) -> Self {
        Self {
            frame,
            aspect,
            scale: (vfov.to_radians() / 2.0).tan(),
            transform: frame.camera_to_world(),
        }
    }

    /// Camera-to-world transform used for ray directions.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Eye ray through the image-plane point `ndc`.
    pub fn eye_ray(&self, ndc: Vec2) -> Ray {
        perspective_eye_ray(self.frame.position, self.transform, self.aspect, self.scale, ndc)
    }
}

/// Parallel-projection camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    /// World-space frame
    pub frame: CameraFrame,
    /// Half the view height in world units
    pub half_height: f32,
    /// Image width over height
    pub aspect: f32,
}

impl OrthographicCamera {
    /// Camera whose view spans `2 * half_height` vertically.
    pub fn new(frame: CameraFrame, half_height: f32, aspect: f32) -> Self {
        Self {
            frame,
            half_height,
            aspect,
        }
    }

    /// Eye ray through the image-plane point `ndc`.
    pub fn eye_ray(&self, ndc: Vec2) -> Ray {
        orthographic_eye_ray(
            self.frame.position,
            self.frame.right * (self.half_height * self.aspect),
            self.frame.up * self.half_height,
            self.frame.forward,
            ndc,
        )
    }
}

/// Either projection behind one interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Rays fan out from the camera position.
    Perspective(PerspectiveCamera),
    /// Rays are parallel to the view direction.
    Orthographic(OrthographicCamera),
}

impl Projection {
    /// Eye ray through the image-plane point `ndc`.
    pub fn eye_ray(&self, ndc: Vec2) -> Ray {
        match self {
            Projection::Perspective(camera) => camera.eye_ray(ndc),
            Projection::Orthographic(camera) => camera.eye_ray(ndc),
        }
    }

    /// World-space frame of the underlying camera.
    pub fn frame(&self) -> &CameraFrame {
        match self {
            Projection::Perspective(camera) => &camera.frame,
            Projection::Orthographic(camera) => &camera.frame,
        }
    }
}
