//! Drawing surface abstraction
//!
//! The particle system only knows kinematics. Anything that can clear itself
//! and draw circles and lines can display it: a browser canvas, a test
//! recorder, a headless buffer.

use super::particle::Rgb;

/// Minimal 2D drawing target sized to the viewport
pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Rgb);
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb);
}
