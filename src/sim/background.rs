//! Parallax starfield behind the play area
//!
//! A fixed pool of stars and fog clouds drifting left. Particles that leave
//! the screen are re-rolled in place at the right edge, so the pool never
//! grows or shrinks.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Particle, ParticleKind, PlayArea, Rgb, RngStream, stream_rng};
use crate::settings::GameConfig;
use crate::wrap_degrees;

impl ParticleKind {
    /// Roll a fresh particle of this kind at the right edge of the play area
    pub fn spawn(self, rng: &mut Pcg32, area: &PlayArea) -> Particle {
        let (size, color, speed, rotation_speed) = match self {
            ParticleKind::Star => {
                let size = rng.random_range(1..=32i32);
                let color = random_color(rng, 200, 255);
                let speed = size as f32 * 0.1 + rng.random_range(0.0..2.0);
                (size, color, speed, rng.random_range(0.01..1.0))
            }
            ParticleKind::Fog => {
                let size = rng.random_range(512..=1024i32);
                let color = random_color(rng, 1, 50);
                let speed = rng.random_range(1.0..10.0);
                (size, color, speed, rng.random_range(-0.25..0.25))
            }
        };

        Particle {
            kind: self,
            x: area.width,
            y: rng.random_range(0..=area.height as i32) - size / 2,
            size,
            color,
            angle: rng.random_range(0.0..360.0),
            rotation_speed,
            speed,
        }
    }

    /// Size range particles of this kind are rolled from
    pub fn size_range(self) -> std::ops::RangeInclusive<i32> {
        match self {
            ParticleKind::Star => 1..=32,
            ParticleKind::Fog => 512..=1024,
        }
    }
}

/// Uniform color with every channel in `lo..=hi`
pub(crate) fn random_color(rng: &mut Pcg32, lo: u8, hi: u8) -> Rgb {
    Rgb::new(
        rng.random_range(lo..=hi),
        rng.random_range(lo..=hi),
        rng.random_range(lo..=hi),
    )
}

/// Background particle field
#[derive(Debug, Clone)]
pub struct ParticleField {
    pub area: PlayArea,
    /// Stars first, then fog; draw order follows this order
    pub particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticleField {
    /// Populate the field, scattering the initial particles across the screen
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let area = PlayArea::from_config(config);
        let mut rng = stream_rng(seed, RngStream::Background);
        let mut particles = Vec::with_capacity(config.star_count + config.fog_count);

        let kinds = std::iter::repeat_n(ParticleKind::Star, config.star_count)
            .chain(std::iter::repeat_n(ParticleKind::Fog, config.fog_count));
        for kind in kinds {
            let mut particle = kind.spawn(&mut rng, &area);
            particle.x = rng.random_range(0.0..=area.width);
            particles.push(particle);
        }

        Self {
            area,
            particles,
            rng,
        }
    }

    /// Advance every particle by `dt`, recycling those that left the screen
    pub fn advance(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.angle = wrap_degrees(particle.angle + particle.rotation_speed * dt);
            particle.x -= particle.speed * dt;

            if particle.is_offscreen() {
                *particle = particle.kind.spawn(&mut self.rng, &self.area);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn count(&self, kind: ParticleKind) -> usize {
        self.particles.iter().filter(|p| p.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_in_class_ranges(p: &Particle) {
        assert!(p.kind.size_range().contains(&p.size), "size {} for {:?}", p.size, p.kind);
        assert!((0.0..360.0).contains(&p.angle), "angle {}", p.angle);
        match p.kind {
            ParticleKind::Star => {
                assert!(p.color.r >= 200 && p.color.g >= 200 && p.color.b >= 200);
                let base = p.size as f32 * 0.1;
                assert!(p.speed >= base && p.speed <= base + 2.0);
                assert!((0.01..1.0).contains(&p.rotation_speed));
            }
            ParticleKind::Fog => {
                for c in [p.color.r, p.color.g, p.color.b] {
                    assert!((1..=50).contains(&c));
                }
                assert!((1.0..10.0).contains(&p.speed));
                assert!((-0.25..0.25).contains(&p.rotation_speed));
            }
        }
    }

    #[test]
    fn test_initial_population() {
        let config = GameConfig::default();
        let field = ParticleField::new(&config, 1);
        assert_eq!(field.len(), 125);
        assert_eq!(field.count(ParticleKind::Star), 100);
        assert_eq!(field.count(ParticleKind::Fog), 25);
        for p in &field.particles {
            assert!(p.x >= 0.0 && p.x <= config.play_width);
            assert_in_class_ranges(p);
        }
    }

    #[test]
    fn test_spawn_at_right_edge() {
        let area = PlayArea::default();
        let mut rng = stream_rng(9, RngStream::Background);
        for _ in 0..200 {
            let p = ParticleKind::Fog.spawn(&mut rng, &area);
            assert_eq!(p.x, area.width);
            // Centered vertically on a row in [0, height]
            let center_row = p.y + p.size / 2;
            assert!((0..=area.height as i32).contains(&center_row));
            assert_in_class_ranges(&p);
        }
    }

    #[test]
    fn test_recycle_iff_fully_offscreen() {
        let mut field = ParticleField::new(&GameConfig::default(), 3);
        field.particles.truncate(1);
        let p = &mut field.particles[0];
        p.kind = ParticleKind::Star;
        p.size = 10;
        p.speed = 1.0;
        p.x = -9.0;

        // Lands exactly on x + size == 0: stays
        field.advance(1.0);
        assert_eq!(field.particles[0].x, -10.0);
        assert_eq!(field.particles[0].size, 10);

        // Any further and it is rerolled at the right edge
        field.advance(0.5);
        assert_eq!(field.particles[0].x, field.area.width);
        assert_in_class_ranges(&field.particles[0]);
    }

    #[test]
    fn test_counts_constant_over_time() {
        let mut field = ParticleField::new(&GameConfig::default(), 5);
        for _ in 0..5_000 {
            field.advance(0.5);
        }
        assert_eq!(field.count(ParticleKind::Star), 100);
        assert_eq!(field.count(ParticleKind::Fog), 25);
        for p in &field.particles {
            assert_in_class_ranges(p);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let config = GameConfig::default();
        let mut a = ParticleField::new(&config, 77);
        let mut b = ParticleField::new(&config, 77);
        for _ in 0..100 {
            a.advance(1.0);
            b.advance(1.0);
        }
        assert_eq!(a.particles, b.particles);
    }

    proptest! {
        #[test]
        fn angles_stay_wrapped(seed in any::<u64>(), steps in 1usize..200, dt in 0.01f32..5.0) {
            let mut field = ParticleField::new(&GameConfig::default(), seed);
            for _ in 0..steps {
                field.advance(dt);
            }
            for p in &field.particles {
                prop_assert!((0.0..360.0).contains(&p.angle));
            }
        }
    }
}
