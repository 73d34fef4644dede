use serde::Serialize;

/// A decorative drop or bubble. Speed is fixed at creation; only the
/// position moves.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    x: f64,
    y: f64,
    size: f64,
    speed: f64,
}

/// What the renderer gets to see of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Particle {
    pub(crate) fn new(x: f64, y: f64, size: f64, speed: f64) -> Self {
        Particle { x, y, size, speed }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub(crate) fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    pub(crate) fn respawn_at(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn view(&self) -> ParticleView {
        ParticleView {
            x: self.x,
            y: self.y,
            size: self.size,
        }
    }
}
