//! End-of-session particle effects
//!
//! Fireworks for a strong result, rain for a weak one. Visual only: nothing
//! here feeds back into the drill.

pub mod particle;
pub mod surface;
pub mod system;

pub use particle::{FIREWORK_PALETTE, Particle, ParticleKind, Rgb};
pub use surface::DrawSurface;
pub use system::ParticleSystem;
