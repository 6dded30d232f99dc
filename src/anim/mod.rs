//! Wertanimationen für die Frame-Schleife des Hosts.

mod interpolator;
mod tween;

pub use interpolator::{lerp, Interpolator};
pub use tween::Tween;
