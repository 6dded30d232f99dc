//! Zeitlich begrenzter Zerfall: ein Partikel-Tick pro Frame, bis der Tween abgelaufen ist.

use super::field::ParticleField;
use crate::anim::Tween;

/// Bindet ein Partikelfeld an einen einmaligen, linearen Zeitablauf.
#[derive(Debug, Clone)]
pub struct Dissolve {
    field: ParticleField,
    tween: Tween,
    elapsed_ms: f32,
    running: bool,
}

impl Dissolve {
    /// Erstellt einen gestoppten Zerfall über `duration_ms`.
    pub fn new(field: ParticleField, duration_ms: u64) -> Self {
        Self {
            field,
            tween: Tween::linear(duration_ms),
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Startet den Ablauf (Tippen auf das Bild). Ein laufender Ablauf wird nicht neu gestartet.
    pub fn start(&mut self) {
        if !self.running && !self.is_finished() {
            log::debug!("Zerfall gestartet ({} ms)", self.tween.duration_ms);
            self.running = true;
        }
    }

    /// Frame-Callback: tickt das Feld einmal, solange der Ablauf läuft.
    ///
    /// Gibt `true` zurück, wenn ein Tick ausgeführt wurde.
    pub fn on_frame(&mut self, dt_ms: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        self.field.tick();
        if self.tween.is_finished(self.elapsed_ms) {
            log::debug!("Zerfall beendet nach {} Ticks", self.field.ticks_elapsed());
            self.running = false;
        }
        true
    }

    /// Fortschritt des Ablaufs in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.tween.fraction_at(self.elapsed_ms)
    }

    /// `true`, solange Frames Ticks auslösen.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// `true`, sobald die volle Dauer abgespielt ist.
    pub fn is_finished(&self) -> bool {
        self.tween.is_finished(self.elapsed_ms)
    }

    /// Zugriff auf das Partikelfeld zum Zeichnen.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}
