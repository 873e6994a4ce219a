//! Seeded sampling helpers for property tests.
//!
//! Every generator is driven by a ChaCha20 PRNG with a fixed seed so failures
//! reproduce exactly.

#![allow(dead_code)]

use glam::{Mat4, Quat, Vec2, Vec3, Vec3A};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic generator for one test.
pub fn seeded(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Random f32 in [min, max)
pub fn random_f32_range(rng: &mut ChaCha20Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.random::<f32>()
}

/// Random Vec3A with components in [min, max)
pub fn random_vec3a_range(rng: &mut ChaCha20Rng, min: f32, max: f32) -> Vec3A {
    Vec3A::new(
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
    )
}

/// Random unit vector uniformly distributed on the unit sphere.
pub fn random_unit_vector(rng: &mut ChaCha20Rng) -> Vec3A {
    let theta = 2.0 * std::f32::consts::PI * rng.random::<f32>();
    let cos_phi = 2.0 * rng.random::<f32>() - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
    Vec3A::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Random NDC point in [-1, 1] x [-1, 1].
pub fn random_ndc(rng: &mut ChaCha20Rng) -> Vec2 {
    Vec2::new(random_f32_range(rng, -1.0, 1.0), random_f32_range(rng, -1.0, 1.0))
}

/// Random pure rotation.
pub fn random_rotation(rng: &mut ChaCha20Rng) -> Mat4 {
    let axis = Vec3::from(random_unit_vector(rng));
    let angle = random_f32_range(rng, -std::f32::consts::PI, std::f32::consts::PI);
    Mat4::from_quat(Quat::from_axis_angle(axis, angle))
}

/// Random box with min <= max, extents in (0.1, 4.1).
pub fn random_box(rng: &mut ChaCha20Rng) -> (Vec3A, Vec3A) {
    let min = random_vec3a_range(rng, -5.0, 5.0);
    let extent = random_vec3a_range(rng, 0.1, 4.1);
    (min, min + extent)
}
