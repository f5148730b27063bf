//! Particles module - buffers, templates and their generators
//!
//! Re-exports only. All logic in submodules.

mod buffer;
mod generator;
mod rng;
mod template;

pub use buffer::{ParticleBuffer, RenderFlags};
pub use generator::{colors, generate};
pub use rng::XorShift32;
pub use template::Template;
