//! Particle types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Downward acceleration applied to sparks each tick (pixels/tick²)
pub const SPARK_GRAVITY: f32 = 0.05;
/// Sparks per firework burst
pub const SPARK_BURST: usize = 30;
/// Spark lifetime in ticks
pub const SPARK_LIFE: i32 = 100;
/// Droplets per rain batch
pub const DROPLET_BATCH: usize = 5;
/// Droplet lifetime in ticks
pub const DROPLET_LIFE: i32 = 200;
/// Droplets spawn this far above the top edge
pub const DROPLET_SPAWN_Y: f32 = -10.0;
/// Spark draw radius
pub const SPARK_RADIUS: f32 = 3.0;
/// Length of a raindrop streak
pub const DROPLET_LENGTH: f32 = 10.0;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const YELLOW: Rgb = Rgb(0xff, 0xff, 0x00);
    pub const MAGENTA: Rgb = Rgb(0xff, 0x00, 0xff);
    pub const CYAN: Rgb = Rgb(0x00, 0xff, 0xff);
    pub const GREEN: Rgb = Rgb(0x58, 0xcc, 0x02);
    pub const RED: Rgb = Rgb(0xff, 0x4b, 0x4b);
    pub const RAIN: Rgb = Rgb(0x89, 0xcf, 0xf0);

    /// CSS color string, e.g. `#58cc02`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Firework colors
pub const FIREWORK_PALETTE: [Rgb; 5] = [Rgb::YELLOW, Rgb::MAGENTA, Rgb::CYAN, Rgb::GREEN, Rgb::RED];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Firework spark, pulled down by gravity
    Spark,
    /// Raindrop, constant velocity
    Droplet,
}

/// A point particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining ticks
    pub life: i32,
    pub color: Rgb,
    pub kind: ParticleKind,
}

impl Particle {
    /// Advance one fixed step. Returns false once expired.
    pub fn step(&mut self) -> bool {
        self.pos += self.vel;
        if self.kind == ParticleKind::Spark {
            self.vel.y += SPARK_GRAVITY;
        }
        self.life -= 1;
        self.life > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_color() {
        assert_eq!(Rgb::RAIN.to_css(), "#89cff0");
        assert_eq!(Rgb::YELLOW.to_css(), "#ffff00");
    }

    #[test]
    fn test_spark_falls() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
            life: 10,
            color: Rgb::RED,
            kind: ParticleKind::Spark,
        };
        assert!(p.step());
        assert_eq!(p.pos, Vec2::new(1.0, 0.0));
        assert!((p.vel.y - SPARK_GRAVITY).abs() < 1e-6);
        assert_eq!(p.life, 9);
    }

    #[test]
    fn test_droplet_constant_velocity() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(0.0, 3.0),
            life: 10,
            color: Rgb::RAIN,
            kind: ParticleKind::Droplet,
        };
        for _ in 0..5 {
            p.step();
        }
        assert_eq!(p.vel, Vec2::new(0.0, 3.0));
        assert_eq!(p.pos, Vec2::new(0.0, 15.0));
    }
}
