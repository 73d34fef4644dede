pub mod animator;
pub mod particle;
pub mod task;

pub use animator::{
    Animator, Direction, ParticleSettings, Viewport, DEFAULT_VIEWPORT, MAX_VIEWPORT_DIMENSION,
};
pub use particle::{Particle, ParticleView};
pub use task::{AnimationTask, LatestFrame, RedrawSink, TICK_INTERVAL};
