//! Closed-form particle templates
//!
//! Every particle is drawn independently. A call rewrites every position and
//! every color, then flags the buffer for re-bind.

use std::f32::consts::TAU;

use super::buffer::ParticleBuffer;
use super::rng::XorShift32;
use super::template::Template;

/// Template palettes
pub mod colors {
    pub const SPHERE: [f32; 3] = [0.3, 0.6, 1.0];
    /// Pink
    pub const HEART: [f32; 3] = [1.0, 0.4, 0.6];
    /// Yellow/orange
    pub const FLOWER: [f32; 3] = [1.0, 0.8, 0.1];
}

const SPHERE_RADIUS: f32 = 2.0;

const HEART_SCALE: f32 = 1.0;
/// Vertical offset so the heart sits below center
const HEART_DROP: f32 = 1.5;

const FLOWER_SCALE: f32 = 2.0;
const FLOWER_PETALS: f32 = 6.0;
const FLOWER_SHRINK: f32 = 0.8;
const FLOWER_DEPTH: f32 = 0.25;

/// Regenerate the whole buffer for `template`
pub fn generate(template: Template, buffer: &mut ParticleBuffer, rng: &mut XorShift32) {
    let shape: fn(&mut XorShift32) -> [f32; 3] = match template {
        Template::Sphere => sphere_point,
        Template::Heart => heart_point,
        Template::Flower => flower_point,
    };
    let color = match template {
        Template::Sphere => colors::SPHERE,
        Template::Heart => colors::HEART,
        Template::Flower => colors::FLOWER,
    };

    let (positions, tints) = buffer.arrays_mut();
    for (position, tint) in positions.iter_mut().zip(tints.iter_mut()) {
        *position = shape(rng);
        *tint = color;
    }

    buffer.mark_rebind();
    tracing::debug!("generated {} particles for {}", buffer.len(), template);
}

/// Uniform point on a sphere shell
fn sphere_point(rng: &mut XorShift32) -> [f32; 3] {
    let z = rng.range(-1.0, 1.0);
    let phi = rng.range(0.0, TAU);
    let ring = (1.0 - z * z).max(0.0).sqrt();

    [
        SPHERE_RADIUS * ring * phi.cos(),
        SPHERE_RADIUS * ring * phi.sin(),
        SPHERE_RADIUS * z,
    ]
}

/// Heart curve at angle `t`, thickened along z by `u` in [0, 2)
fn heart_at(t: f32, u: f32) -> [f32; 3] {
    let x = HEART_SCALE * 16.0 * t.sin().powi(3) / 18.0;
    let y = HEART_SCALE
        * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos())
        / 18.0;
    let z = HEART_SCALE * u * (5.0 * t).cos() * 0.1;

    [x, y - HEART_DROP, z]
}

fn heart_point(rng: &mut XorShift32) -> [f32; 3] {
    let t = rng.range(0.0, TAU);
    let u = rng.range(0.0, 2.0);
    heart_at(t, u)
}

/// Rosette factor for angle `theta`, in [-0.5, 1.5].
/// Negative values flip the point through the origin.
fn petal_factor(theta: f32) -> f32 {
    FLOWER_SCALE * (FLOWER_PETALS * theta / 2.0).cos() * 0.5 + 0.5
}

/// Rosette point at angle `theta`; `u` picks the base radius and `w` the
/// depth, both in [0, 1)
fn flower_at(theta: f32, u: f32, w: f32) -> [f32; 3] {
    let r_base = FLOWER_SCALE * u;
    let r = r_base * petal_factor(theta) * FLOWER_SHRINK;
    let z = w * 2.0 * FLOWER_DEPTH - FLOWER_DEPTH;

    [r * theta.cos(), r * theta.sin(), z]
}

fn flower_point(rng: &mut XorShift32) -> [f32; 3] {
    let theta = rng.range(0.0, TAU);
    let u = rng.next_f32();
    let w = rng.next_f32();
    flower_at(theta, u, w)
}
