//! Mehrphasige Splash-Animation.
//!
//! Sechs farbige Kreise rotieren um die Mitte (`Rotate`), ziehen sich mit
//! Überschwingen zusammen (`Spread`) und ein sich öffnendes Loch gibt den
//! Inhalt darunter frei (`Expand`). Ein einziger Übergang `next_phase`
//! verbindet die Phasen; `SplashFrame` beschreibt, was pro Frame zu zeichnen ist.

use crate::anim::{Interpolator, Tween};
use crate::core::Rgba;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Einstellungen der Splash-Animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Radius der kleinen Kreise
    pub circle_radius: f32,
    /// Radius der Umlaufbahn
    pub rotate_radius: f32,
    /// Dauer eines Phasen-Durchlaufs
    pub phase_ms: u64,
    /// Zusätzliche Umdrehungen in der Rotate-Phase
    pub rotate_repeats: u32,
    /// Überschwing-Spannung der Spread-Phase
    pub spread_tension: f32,
    /// Hintergrundfarbe
    pub background: Rgba,
    /// Farben der kleinen Kreise (einer pro Farbe)
    pub colors: Vec<Rgba>,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            circle_radius: 18.0,
            rotate_radius: 90.0,
            phase_ms: 600,
            rotate_repeats: 2,
            spread_tension: 10.0,
            background: [255, 255, 255, 255],
            colors: vec![
                [0xFF, 0x98, 0x00, 0xFF],
                [0x02, 0xEE, 0x9E, 0xFF],
                [0xFF, 0x00, 0x8E, 0xFF],
                [0x00, 0xB8, 0xD4, 0xFF],
                [0x3F, 0x51, 0xB5, 0xFF],
                [0xFF, 0xEB, 0x3B, 0xFF],
            ],
        }
    }
}

/// Phasen der Splash-Animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SplashPhase {
    Rotate,
    Spread,
    Expand,
}

/// Folgephase; `None` nach `Expand`.
pub fn next_phase(phase: SplashPhase) -> Option<SplashPhase> {
    match phase {
        SplashPhase::Rotate => Some(SplashPhase::Spread),
        SplashPhase::Spread => Some(SplashPhase::Expand),
        SplashPhase::Expand => None,
    }
}

/// Hintergrund eines Frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Background {
    /// Vollflächig in einer Farbe
    Solid(Rgba),
    /// Ring in Hintergrundfarbe um ein Loch mit Radius `hole_radius`.
    ///
    /// Gezeichnet als Kreis-Kontur mit Radius `radius` und Strichbreite `stroke_width`.
    Hole {
        center: Vec2,
        hole_radius: f32,
        radius: f32,
        stroke_width: f32,
        color: Rgba,
    },
}

/// Ein farbiger Kreis des Frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplashCircle {
    /// Mittelpunkt auf der Umlaufbahn
    pub center: Vec2,
    /// Radius des Kreises
    pub radius: f32,
    /// Füllfarbe
    pub color: Rgba,
}

/// Zeichenparameter eines Frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplashFrame {
    /// Phase, zu der der Frame gehört
    pub phase: SplashPhase,
    /// Hintergrund (voll oder mit Loch)
    pub background: Background,
    /// Kreise auf der Umlaufbahn, leer in der Phase `Expand`
    pub circles: Vec<SplashCircle>,
}

/// Zustand der laufenden Splash-Animation.
#[derive(Debug, Clone)]
pub struct SplashAnimation {
    config: SplashConfig,
    center: Vec2,
    /// Halbe Diagonale des Viewports
    reach: f32,
    phase: SplashPhase,
    phase_elapsed_ms: f32,
    finished: bool,
    rotate_angle: f32,
    orbit_radius: f32,
    hole_radius: f32,
}

impl SplashAnimation {
    /// Startet in der Rotate-Phase für einen Viewport der Größe `viewport`.
    pub fn new(config: SplashConfig, viewport: Vec2) -> Self {
        let orbit_radius = config.rotate_radius;
        Self {
            config,
            center: viewport * 0.5,
            reach: viewport.length() * 0.5,
            phase: SplashPhase::Rotate,
            phase_elapsed_ms: 0.0,
            finished: false,
            rotate_angle: 0.0,
            orbit_radius,
            hole_radius: 0.0,
        }
    }

    fn tween(&self, phase: SplashPhase) -> Tween {
        let duration = self.config.phase_ms;
        match phase {
            SplashPhase::Rotate => Tween::linear(duration).with_repeat(self.config.rotate_repeats),
            SplashPhase::Spread => Tween::new(
                duration,
                Interpolator::Overshoot {
                    tension: self.config.spread_tension,
                },
            )
            .reversed(),
            SplashPhase::Expand => Tween::linear(duration),
        }
    }

    fn apply_values(&mut self, phase: SplashPhase, elapsed_ms: f32) {
        let tween = self.tween(phase);
        match phase {
            SplashPhase::Rotate => self.rotate_angle = tween.value_at(0.0, TAU, elapsed_ms),
            SplashPhase::Spread => {
                self.orbit_radius = tween.value_at(
                    self.config.circle_radius,
                    self.config.rotate_radius,
                    elapsed_ms,
                )
            }
            SplashPhase::Expand => {
                self.hole_radius = tween.value_at(self.config.circle_radius, self.reach, elapsed_ms)
            }
        }
    }

    /// Schreitet um `dt_ms` fort; überzählige Zeit wandert in die nächste Phase.
    pub fn advance(&mut self, dt_ms: f32) {
        let mut remaining = dt_ms.max(0.0);
        while !self.finished {
            let tween = self.tween(self.phase);
            let elapsed = self.phase_elapsed_ms + remaining;
            self.apply_values(self.phase, elapsed);

            if !tween.is_finished(elapsed) {
                self.phase_elapsed_ms = elapsed;
                break;
            }

            remaining = elapsed - tween.total_duration_ms() as f32;
            match next_phase(self.phase) {
                Some(next) => {
                    log::debug!("Splash: {:?} -> {:?}", self.phase, next);
                    self.phase = next;
                    self.phase_elapsed_ms = 0.0;
                    self.apply_values(next, 0.0);
                }
                None => {
                    log::debug!("Splash beendet");
                    self.phase_elapsed_ms = elapsed;
                    self.finished = true;
                }
            }
        }
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// `true` nach Ende der Expand-Phase.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Aktueller Drehwinkel der Kreise (Radiant)
    pub fn rotate_angle(&self) -> f32 {
        self.rotate_angle
    }

    /// Aktueller Radius der Umlaufbahn
    pub fn orbit_radius(&self) -> f32 {
        self.orbit_radius
    }

    /// Aktueller Radius des Lochs (0 vor der Expand-Phase)
    pub fn hole_radius(&self) -> f32 {
        self.hole_radius
    }

    /// Zeichenparameter für den aktuellen Zustand.
    pub fn frame(&self) -> SplashFrame {
        let background = if self.hole_radius > 0.0 {
            let stroke_width = self.reach - self.hole_radius;
            Background::Hole {
                center: self.center,
                hole_radius: self.hole_radius,
                radius: stroke_width / 2.0 + self.hole_radius,
                stroke_width,
                color: self.config.background,
            }
        } else {
            Background::Solid(self.config.background)
        };

        let circles = match self.phase {
            SplashPhase::Rotate | SplashPhase::Spread => self.circles(),
            SplashPhase::Expand => Vec::new(),
        };

        SplashFrame {
            phase: self.phase,
            background,
            circles,
        }
    }

    fn circles(&self) -> Vec<SplashCircle> {
        let count = self.config.colors.len();
        if count == 0 {
            return Vec::new();
        }
        let step = TAU / count as f32;
        self.config
            .colors
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let angle = step * i as f32 + self.rotate_angle;
                SplashCircle {
                    center: self.center + Vec2::from_angle(angle) * self.orbit_radius,
                    radius: self.config.circle_radius,
                    color,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
