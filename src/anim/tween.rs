//! Zeitgesteuerte Wertanimation (Dauer, Zeitkurve, Wiederholungen, Rückwärtslauf).

use super::interpolator::{lerp, Interpolator};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Beschreibung einer Tween-Animation.
///
/// Die Animation wird nicht selbst getaktet: der Host misst die verstrichene
/// Zeit und fragt pro Frame `fraction_at` ab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    /// Dauer eines Durchlaufs in Millisekunden
    pub duration_ms: u64,
    /// Zeitkurve
    pub interpolator: Interpolator,
    /// Zusätzliche Durchläufe nach dem ersten
    pub repeat_count: u32,
    /// Spielt von Ende nach Anfang (Zeitkurve läuft mit)
    pub reversed: bool,
}

impl Tween {
    /// Tween mit Dauer und Zeitkurve, ohne Wiederholung.
    pub fn new(duration_ms: u64, interpolator: Interpolator) -> Self {
        Self {
            duration_ms,
            interpolator,
            repeat_count: 0,
            reversed: false,
        }
    }

    /// Linearer Tween.
    pub fn linear(duration_ms: u64) -> Self {
        Self::new(duration_ms, Interpolator::Linear)
    }

    /// Setzt die Anzahl zusätzlicher Durchläufe.
    pub fn with_repeat(mut self, repeat_count: u32) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Lässt den Tween rückwärts laufen.
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    /// Gesamtdauer aller Durchläufe.
    pub fn total_duration_ms(&self) -> u64 {
        self.duration_ms
            .saturating_mul(u64::from(self.repeat_count) + 1)
    }

    /// `true`, sobald alle Durchläufe abgespielt sind.
    pub fn is_finished(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.total_duration_ms() as f32
    }

    /// Linearer Fortschritt im aktuellen Durchlauf, ohne Zeitkurve.
    fn linear_fraction(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms == 0 || self.is_finished(elapsed_ms) {
            return 1.0;
        }
        let duration = self.duration_ms as f32;
        let elapsed = elapsed_ms.max(0.0);
        (elapsed % duration) / duration
    }

    /// Animierter Fortschritt nach `elapsed_ms`.
    ///
    /// Nach dem letzten Durchlauf bleibt der Endwert stehen.
    pub fn fraction_at(&self, elapsed_ms: f32) -> f32 {
        let mut t = self.linear_fraction(elapsed_ms);
        if self.reversed {
            t = 1.0 - t;
        }
        self.interpolator.transform(t)
    }

    /// Skalarwert zwischen `from` und `to` nach `elapsed_ms`.
    pub fn value_at(&self, from: f32, to: f32, elapsed_ms: f32) -> f32 {
        lerp(from, to, self.fraction_at(elapsed_ms))
    }

    /// Punkt zwischen `from` und `to` nach `elapsed_ms`.
    pub fn point_at(&self, from: Vec2, to: Vec2, elapsed_ms: f32) -> Vec2 {
        from + (to - from) * self.fraction_at(elapsed_ms)
    }
}
