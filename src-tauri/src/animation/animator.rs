use super::particle::{Particle, ParticleView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 340.0,
    height: 600.0,
};

/// Largest width or height an animator works with; bigger windows are clamped.
pub const MAX_VIEWPORT_DIMENSION: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Drops: move down, re-enter above the top edge.
    Falling,
    /// Bubbles: move up, re-enter below the bottom edge.
    Rising,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Falling => 1.0,
            Direction::Rising => -1.0,
        }
    }

    fn has_exited(self, particle: &Particle, height: f64) -> bool {
        match self {
            Direction::Falling => particle.y() > height,
            Direction::Rising => particle.y() + particle.size() < 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Missing, zero, negative or non-finite dimensions fall back to the
    /// default geometry, one axis at a time. Oversized ones are clamped to
    /// `MAX_VIEWPORT_DIMENSION`.
    pub fn resolve(width: Option<f64>, height: Option<f64>) -> Self {
        let usable = |v: Option<f64>| {
            v.filter(|v| v.is_finite() && *v > 0.0)
                .map(|v| v.min(MAX_VIEWPORT_DIMENSION))
        };
        Viewport {
            width: usable(width).unwrap_or(DEFAULT_VIEWPORT.width),
            height: usable(height).unwrap_or(DEFAULT_VIEWPORT.height),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        DEFAULT_VIEWPORT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSettings {
    pub direction: Direction,
    pub count: usize,
    pub min_size: u32,
    pub max_size: u32,
    /// Units per tick.
    pub min_speed: f64,
    pub max_speed: f64,
    /// Initial vertical band as fractions of the viewport height.
    pub spawn_band: (f64, f64),
    /// Respawn distance past the entry edge: at least `respawn_min_offset`
    /// units, at most `respawn_max_fraction` of the viewport height.
    pub respawn_min_offset: f64,
    pub respawn_max_fraction: f64,
}

impl ParticleSettings {
    pub fn max_respawn_offset(&self, viewport: &Viewport) -> f64 {
        (self.respawn_max_fraction * viewport.height).max(self.respawn_min_offset)
    }
}

/// Empty, inverted or unrepresentable ranges collapse to `low`, or to 0 when
/// `low` itself is not finite.
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low && (high - low).is_finite() {
        rng.gen_range(low..=high)
    } else if low.is_finite() {
        low
    } else {
        0.0
    }
}

pub struct Animator<R = StdRng> {
    settings: ParticleSettings,
    viewport: Viewport,
    particles: Vec<Particle>,
    rng: R,
}

impl Animator<StdRng> {
    pub fn from_entropy(settings: ParticleSettings, viewport: Viewport) -> Self {
        Self::new(settings, viewport, StdRng::from_entropy())
    }

    pub fn seeded(settings: ParticleSettings, viewport: Viewport, seed: u64) -> Self {
        Self::new(settings, viewport, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Animator<R> {
    pub fn new(settings: ParticleSettings, viewport: Viewport, mut rng: R) -> Self {
        let viewport = Viewport::resolve(Some(viewport.width), Some(viewport.height));
        let (band_low, band_high) = settings.spawn_band;

        let particles = (0..settings.count)
            .map(|_| {
                let size = f64::from(if settings.max_size > settings.min_size {
                    rng.gen_range(settings.min_size..=settings.max_size)
                } else {
                    settings.min_size
                });
                let x = uniform(&mut rng, 0.0, viewport.width - size);
                let y = uniform(
                    &mut rng,
                    band_low * viewport.height,
                    band_high * viewport.height,
                );
                let speed = uniform(&mut rng, settings.min_speed, settings.max_speed);
                Particle::new(x, y, size, speed)
            })
            .collect();

        log::debug!(
            "Animator ready: {} particles, {:?}, viewport {}x{}",
            settings.count,
            settings.direction,
            viewport.width,
            viewport.height
        );

        Animator {
            settings,
            viewport,
            particles,
            rng,
        }
    }

    /// Advances every particle by one step and respawns the ones that left
    /// the viewport.
    pub fn tick(&mut self) {
        let Animator {
            settings,
            viewport,
            particles,
            rng,
        } = self;
        let direction = settings.direction;
        let max_offset = settings.max_respawn_offset(viewport);

        for particle in particles.iter_mut() {
            particle.advance(direction.sign() * particle.speed());
            if !direction.has_exited(particle, viewport.height) {
                continue;
            }

            let offset = uniform(rng, settings.respawn_min_offset, max_offset);
            let y = match direction {
                Direction::Falling => -offset,
                Direction::Rising => viewport.height + offset,
            };
            let x = uniform(rng, 0.0, viewport.width - particle.size());
            particle.respawn_at(x, y);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn frame(&self) -> Vec<ParticleView> {
        self.particles.iter().map(Particle::view).collect()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    /// Closed range that vertical positions stay within, counting both the
    /// initial spawn band and respawn offsets.
    pub fn travel_bounds(&self) -> (f64, f64) {
        let height = self.viewport.height;
        let max_offset = self.settings.max_respawn_offset(&self.viewport);
        let (band_low, band_high) = self.settings.spawn_band;
        let (band_low, band_high) = (band_low * height, band_high * height);

        match self.settings.direction {
            Direction::Falling => (band_low.min(-max_offset), band_high.max(height)),
            Direction::Rising => (
                band_low.min(-(self.settings.max_size as f64)),
                band_high.max(height + max_offset),
            ),
        }
    }
}
