//! Partikel-Zerfall eines Bildes.
//!
//! Jedes Pixel wird zu einem Partikel mit zufälliger Startgeschwindigkeit und
//! konstanter Beschleunigung. Pro Tick gilt semi-implizites Euler:
//! `position += velocity`, danach `velocity += acceleration`. Partikel
//! beeinflussen sich nicht gegenseitig.

mod dissolve;
mod field;
mod particle;

pub use dissolve::Dissolve;
pub use field::{ticks_for_duration, ParticleField, VelocityRanges, GRAVITY};
pub use particle::Particle;
