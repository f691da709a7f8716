//! Drifting background particles
//!
//! Particles move a fixed velocity per frame and wrap around the canvas
//! edges. Seeded RNG so a field can be reproduced in tests.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Max speed per axis (px/frame)
const MAX_AXIS_SPEED: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// px per frame
    pub vel: Vec2,
    /// Radius (px)
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    /// Canvas fill style
    pub fn fill_style(&self) -> String {
        format!("rgba(255, 255, 255, {:.3})", self.opacity)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// Scatter `count` particles over a `width` x `height` canvas
    pub fn new(seed: u64, count: usize, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.random::<f32>() * bounds.x,
                    rng.random::<f32>() * bounds.y,
                ),
                vel: Vec2::new(
                    rng.random_range(-MAX_AXIS_SPEED..MAX_AXIS_SPEED),
                    rng.random_range(-MAX_AXIS_SPEED..MAX_AXIS_SPEED),
                ),
                size: rng.random_range(1.0..4.0),
                opacity: rng.random_range(0.2..0.7),
            })
            .collect();
        Self { particles, bounds }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Canvas was resized; particles outside wrap in on the next step
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Advance one frame
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 {
                p.pos.x = bounds.x;
            } else if p.pos.x > bounds.x {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = bounds.y;
            } else if p.pos.y > bounds.y {
                p.pos.y = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_attributes_in_range() {
        let field = ParticleField::new(7, 50, 800.0, 600.0);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!(p.vel.x.abs() <= MAX_AXIS_SPEED && p.vel.y.abs() <= MAX_AXIS_SPEED);
            assert!((1.0..4.0).contains(&p.size));
            assert!((0.2..0.7).contains(&p.opacity));
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::new(42, 10, 100.0, 100.0);
        let b = ParticleField::new(42, 10, 100.0, 100.0);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_wraps_left_edge() {
        let mut field = ParticleField::new(1, 1, 100.0, 100.0);
        field.particles[0].pos = Vec2::new(0.1, 50.0);
        field.particles[0].vel = Vec2::new(-0.2, 0.0);
        field.step();
        assert_eq!(field.particles()[0].pos.x, 100.0);
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut field = ParticleField::new(9, 10, 1000.0, 1000.0);
        let before: Vec<_> = field.particles().iter().map(|p| (p.pos, p.size)).collect();
        field.resize(400.0, 300.0);
        let after: Vec<_> = field.particles().iter().map(|p| (p.pos, p.size)).collect();
        assert_eq!(before, after);
        assert_eq!(field.bounds(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_shrink_then_wrap() {
        let mut field = ParticleField::new(3, 20, 1000.0, 1000.0);
        field.resize(100.0, 100.0);
        field.step();
        for p in field.particles() {
            assert!(p.pos.x <= 100.0 && p.pos.y <= 100.0);
        }
    }

    proptest! {
        #[test]
        fn prop_particles_stay_on_canvas(seed in any::<u64>(), steps in 0usize..500) {
            let mut field = ParticleField::new(seed, 25, 320.0, 240.0);
            for _ in 0..steps {
                field.step();
            }
            for p in field.particles() {
                prop_assert!((0.0..=320.0).contains(&p.pos.x));
                prop_assert!((0.0..=240.0).contains(&p.pos.y));
            }
        }
    }
}
