//! Zeitkurven für Tweens.

use serde::{Deserialize, Serialize};

/// Bildet den linearen Fortschritt `t ∈ [0, 1]` auf den animierten Fortschritt ab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Interpolator {
    /// Unveränderter Fortschritt
    #[default]
    Linear,
    /// Schießt über das Ziel hinaus und federt zurück.
    ///
    /// `f(t) = (t-1)²·((T+1)·(t-1) + T) + 1` mit Spannung `T`.
    Overshoot { tension: f32 },
}

impl Interpolator {
    /// Wendet die Kurve auf den linearen Fortschritt an.
    pub fn transform(&self, t: f32) -> f32 {
        match *self {
            Interpolator::Linear => t,
            Interpolator::Overshoot { tension } => {
                let s = t - 1.0;
                s * s * ((tension + 1.0) * s + tension) + 1.0
            }
        }
    }
}

/// Lineare Interpolation zwischen `a` und `b`.
pub fn lerp(a: f32, b: f32, fraction: f32) -> f32 {
    a + (b - a) * fraction
}
