//! Particle ensemble with fixed-step integration and periodic emission

use glam::Vec2;

use super::particle::*;
use super::surface::DrawSurface;
use crate::consts::{FX_DT, MAX_FX_SUBSTEPS};
use crate::drill::{EffectMode, RandomSource};

/// Maximum live particles; the oldest are dropped beyond this
pub const MAX_PARTICLES: usize = 1024;
/// Seconds between firework bursts
pub const FIREWORK_INTERVAL: f32 = 0.5;
/// Seconds between rain batches
pub const RAIN_INTERVAL: f32 = 0.05;
/// Horizontal drift range for droplets (pixels/tick either way)
pub const DROPLET_DRIFT: f32 = 0.25;

/// Periodic emission while an effect is running
#[derive(Debug, Clone, PartialEq)]
struct Emitter {
    mode: EffectMode,
    interval: f32,
    until_next: f32,
}

/// Owns all live particles and the emission schedule
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    viewport: Vec2,
    emitter: Option<Emitter>,
    accumulator: f32,
}

impl ParticleSystem {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            particles: Vec::new(),
            viewport: Vec2::new(width, height),
            emitter: None,
            accumulator: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Effect currently emitting, if any
    pub fn active_mode(&self) -> Option<EffectMode> {
        self.emitter.as_ref().map(|e| e.mode)
    }

    /// Track a viewport resize
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Clear the field and start periodic emission for an effect
    pub fn start(&mut self, mode: EffectMode) {
        let interval = match mode {
            EffectMode::Fireworks => FIREWORK_INTERVAL,
            EffectMode::Rain => RAIN_INTERVAL,
        };
        self.particles.clear();
        self.accumulator = 0.0;
        self.emitter = Some(Emitter {
            mode,
            interval,
            until_next: interval,
        });
        log::debug!("Particle effect started: {:?}", mode);
    }

    /// Remove every particle and cancel emission
    pub fn stop(&mut self) {
        self.particles.clear();
        self.emitter = None;
        self.accumulator = 0.0;
    }

    /// Spawn particles of `kind`
    ///
    /// Sparks burst radially from `origin` at even angular steps. Droplets
    /// ignore `origin` and spawn in a batch above the viewport.
    pub fn emit<R: RandomSource>(&mut self, kind: ParticleKind, origin: Vec2, color: Rgb, rng: &mut R) {
        match kind {
            ParticleKind::Spark => {
                for i in 0..SPARK_BURST {
                    let angle = std::f32::consts::TAU * i as f32 / SPARK_BURST as f32;
                    let speed = rng.float_in(2.0, 5.0);
                    self.push(Particle {
                        pos: origin,
                        vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                        life: SPARK_LIFE,
                        color,
                        kind,
                    });
                }
            }
            ParticleKind::Droplet => {
                for _ in 0..DROPLET_BATCH {
                    let x = rng.unit() * self.viewport.x;
                    let vx = rng.float_in(-DROPLET_DRIFT, DROPLET_DRIFT);
                    let vy = rng.float_in(2.0, 4.0);
                    self.push(Particle {
                        pos: Vec2::new(x, DROPLET_SPAWN_Y),
                        vel: Vec2::new(vx, vy),
                        life: DROPLET_LIFE,
                        color,
                        kind,
                    });
                }
            }
        }
    }

    fn push(&mut self, particle: Particle) {
        if self.particles.len() >= MAX_PARTICLES {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Advance every particle by one fixed step and drop expired ones
    pub fn tick(&mut self) {
        self.particles.retain_mut(Particle::step);
    }

    /// Advance by real elapsed time: fixed steps plus due emissions
    pub fn advance<R: RandomSource>(&mut self, dt: f32, rng: &mut R) {
        let dt = dt.clamp(0.0, 0.1);

        let mut due = 0;
        if let Some(emitter) = &mut self.emitter {
            emitter.until_next -= dt;
            while emitter.until_next <= 0.0 {
                emitter.until_next += emitter.interval;
                due += 1;
            }
        }
        if let Some(mode) = self.active_mode() {
            for _ in 0..due {
                self.emit_effect(mode, rng);
            }
        }

        self.accumulator += dt;
        let mut substeps = 0;
        while self.accumulator >= FX_DT && substeps < MAX_FX_SUBSTEPS {
            self.tick();
            self.accumulator -= FX_DT;
            substeps += 1;
        }
    }

    fn emit_effect<R: RandomSource>(&mut self, mode: EffectMode, rng: &mut R) {
        match mode {
            EffectMode::Fireworks => {
                let origin = Vec2::new(
                    rng.unit() * self.viewport.x,
                    rng.unit() * (self.viewport.y / 2.0),
                );
                let color = rng.pick(&FIREWORK_PALETTE).copied().unwrap_or(Rgb::YELLOW);
                self.emit(ParticleKind::Spark, origin, color, rng);
            }
            EffectMode::Rain => self.emit(ParticleKind::Droplet, Vec2::ZERO, Rgb::RAIN, rng),
        }
    }

    /// Draw the current field
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for p in &self.particles {
            match p.kind {
                ParticleKind::Spark => surface.fill_circle(p.pos.x, p.pos.y, SPARK_RADIUS, p.color),
                ParticleKind::Droplet => {
                    surface.line(p.pos.x, p.pos.y, p.pos.x, p.pos.y + DROPLET_LENGTH, p.color)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drill::SeededRng;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        circles: usize,
        lines: usize,
    }

    impl DrawSurface for CountingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn fill_circle(&mut self, _x: f32, _y: f32, _r: f32, _color: Rgb) {
            self.circles += 1;
        }
        fn line(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _color: Rgb) {
            self.lines += 1;
        }
    }

    #[test]
    fn test_spark_lifetime_exact() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(1);
        fx.emit(ParticleKind::Spark, Vec2::new(400.0, 300.0), Rgb::RED, &mut rng);
        assert_eq!(fx.len(), SPARK_BURST);
        for _ in 0..99 {
            fx.tick();
        }
        assert_eq!(fx.len(), SPARK_BURST);
        fx.tick();
        assert!(fx.is_empty());
    }

    #[test]
    fn test_burst_is_radial() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(2);
        fx.emit(ParticleKind::Spark, Vec2::ZERO, Rgb::CYAN, &mut rng);
        for (i, p) in fx.particles().iter().enumerate() {
            let speed = p.vel.length();
            assert!((1.999..5.001).contains(&speed), "speed {speed}");
            let expected = std::f32::consts::TAU * i as f32 / SPARK_BURST as f32;
            let dir = Vec2::new(expected.cos(), expected.sin());
            assert!(p.vel.normalize().dot(dir) > 0.999);
        }
    }

    #[test]
    fn test_droplets_spawn_above_view() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(3);
        fx.emit(ParticleKind::Droplet, Vec2::ZERO, Rgb::RAIN, &mut rng);
        assert_eq!(fx.len(), DROPLET_BATCH);
        for p in fx.particles() {
            assert_eq!(p.pos.y, DROPLET_SPAWN_Y);
            assert!((0.0..800.0).contains(&p.pos.x));
            assert!(p.vel.x.abs() <= DROPLET_DRIFT);
            assert_eq!(p.life, DROPLET_LIFE);
        }
    }

    #[test]
    fn test_fireworks_emit_periodically() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(4);
        fx.start(EffectMode::Fireworks);
        assert!(fx.is_empty());
        for _ in 0..31 {
            fx.advance(FX_DT, &mut rng);
        }
        assert_eq!(fx.len(), SPARK_BURST);
        assert!(fx.particles().iter().all(|p| FIREWORK_PALETTE.contains(&p.color)));
    }

    #[test]
    fn test_rain_emits_quickly() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(5);
        fx.start(EffectMode::Rain);
        fx.advance(0.1, &mut rng);
        assert_eq!(fx.len(), 2 * DROPLET_BATCH);
        assert_eq!(fx.active_mode(), Some(EffectMode::Rain));
    }

    #[test]
    fn test_stop_clears_and_halts() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(6);
        fx.start(EffectMode::Rain);
        fx.advance(0.1, &mut rng);
        fx.stop();
        assert!(fx.is_empty());
        assert_eq!(fx.active_mode(), None);
        fx.advance(0.1, &mut rng);
        assert!(fx.is_empty());
    }

    #[test]
    fn test_particle_cap() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(7);
        for _ in 0..(MAX_PARTICLES / SPARK_BURST + 5) {
            fx.emit(ParticleKind::Spark, Vec2::ZERO, Rgb::RED, &mut rng);
        }
        assert_eq!(fx.len(), MAX_PARTICLES);
    }

    #[test]
    fn test_render_dispatch() {
        let mut fx = ParticleSystem::new(800.0, 600.0);
        let mut rng = SeededRng::new(8);
        fx.emit(ParticleKind::Spark, Vec2::ZERO, Rgb::RED, &mut rng);
        fx.emit(ParticleKind::Droplet, Vec2::ZERO, Rgb::RAIN, &mut rng);
        let mut surface = CountingSurface::default();
        fx.render(&mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles, SPARK_BURST);
        assert_eq!(surface.lines, DROPLET_BATCH);
    }
}
