//! Decorative effects
//!
//! Pure state machines; the browser layer owns the timers and drawing.

pub mod confetti;
pub mod count_up;
pub mod konami;
pub mod particles;
pub mod skills;
pub mod typewriter;

pub use confetti::Confetti;
pub use count_up::{CountUpFrame, ScoreCountUp};
pub use konami::KonamiDetector;
pub use particles::{Particle, ParticleField};
pub use typewriter::Typewriter;
