//! Drag-Bubble: Kreise, Zustand und Animationen einer ziehbaren Badge.

use super::connector::{connector_geometry, ConnectorPath};
use super::state::{
    connector_state_transition, release_action, BubbleState, DragEvent, ReleaseAction, Thresholds,
};
use crate::anim::{Interpolator, Tween};
use crate::core::Circle;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Einstellungen der Drag-Bubble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    /// Basisradius beider Kreise
    pub radius: f32,
    /// Dauer des Zurückfederns
    pub snap_back_ms: u64,
    /// Überschwing-Spannung beim Zurückfedern
    pub snap_back_tension: f32,
    /// Dauer der Burst-Animation
    pub burst_ms: u64,
    /// Anzahl der Burst-Bilder
    pub burst_frames: usize,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            radius: 12.0,
            snap_back_ms: 200,
            snap_back_tension: 5.0,
            burst_ms: 500,
            burst_frames: 5,
        }
    }
}

/// Laufende Animation nach dem Loslassen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Animation {
    SnapBack { from: Vec2, elapsed_ms: f32 },
    Burst { elapsed_ms: f32 },
}

/// Ziehbare Bubble mit festem und beweglichem Kreis.
#[derive(Debug, Clone)]
pub struct DragBubble {
    thresholds: Thresholds,
    fixed: Circle,
    movable: Circle,
    state: BubbleState,
    distance: f32,
    snap_back: Tween,
    burst: Tween,
    burst_frames: usize,
    animation: Option<Animation>,
}

impl DragBubble {
    /// Erstellt eine ruhende Bubble bei `center`.
    pub fn new(center: Vec2, config: &BubbleConfig) -> Self {
        Self {
            thresholds: Thresholds::from_base_radius(config.radius),
            fixed: Circle::new(center, config.radius),
            movable: Circle::new(center, config.radius),
            state: BubbleState::Idle,
            distance: 0.0,
            snap_back: Tween::new(
                config.snap_back_ms,
                Interpolator::Overshoot {
                    tension: config.snap_back_tension,
                },
            ),
            burst: Tween::linear(config.burst_ms),
            burst_frames: config.burst_frames,
            animation: None,
        }
    }

    /// Setzt beide Mittelpunkte neu (z.B. nach Größenänderung des Views).
    pub fn recenter(&mut self, center: Vec2) {
        self.fixed.center = center;
        self.movable.center = center;
    }

    /// Druck bei `pos`. Ein laufendes Zurückfedern wird abgebrochen.
    pub fn on_press(&mut self, pos: Vec2) {
        if self.state == BubbleState::Dismissed {
            return;
        }
        if matches!(self.animation, Some(Animation::SnapBack { .. })) {
            self.animation = None;
        }
        self.distance = pos.distance(self.fixed.center);
        self.apply(DragEvent::Press);
    }

    /// Bewegung nach `pos`. Im Ruhezustand ohne Wirkung.
    pub fn on_move(&mut self, pos: Vec2) {
        if self.state == BubbleState::Idle {
            return;
        }
        self.distance = pos.distance(self.fixed.center);
        self.movable.center = pos;
        self.apply(DragEvent::Move);
        if self.state == BubbleState::Connected {
            self.fixed.radius = self.thresholds.fixed_radius_for(self.distance);
        }
    }

    /// Loslassen: startet Zurückfedern oder Burst.
    ///
    /// Beim Zurückfedern bleibt der Zustand bis zum Ende der Animation
    /// erhalten, ein Burst setzt sofort `Dismissed`.
    pub fn on_release(&mut self) -> ReleaseAction {
        let action = release_action(self.state, self.distance, &self.thresholds);
        match action {
            ReleaseAction::SnapBack => {
                self.animation = Some(Animation::SnapBack {
                    from: self.movable.center,
                    elapsed_ms: 0.0,
                });
            }
            ReleaseAction::Burst => {
                self.apply(DragEvent::Release);
                self.animation = Some(Animation::Burst { elapsed_ms: 0.0 });
            }
            ReleaseAction::None => {}
        }
        action
    }

    /// Frame-Callback: schreitet die laufende Animation fort.
    pub fn on_frame(&mut self, dt_ms: f32) {
        let dt = dt_ms.max(0.0);
        match self.animation {
            Some(Animation::SnapBack { from, elapsed_ms }) => {
                let elapsed_ms = elapsed_ms + dt;
                self.movable.center = self.snap_back.point_at(from, self.fixed.center, elapsed_ms);
                self.distance = self.movable.center.distance(self.fixed.center);
                if self.snap_back.is_finished(elapsed_ms) {
                    self.animation = None;
                    self.movable.center = self.fixed.center;
                    self.distance = 0.0;
                    self.fixed.radius = self.thresholds.base_radius;
                    self.apply(DragEvent::Release);
                } else {
                    self.animation = Some(Animation::SnapBack { from, elapsed_ms });
                }
            }
            Some(Animation::Burst { elapsed_ms }) => {
                let total = self.burst.total_duration_ms() as f32;
                self.animation = Some(Animation::Burst {
                    elapsed_ms: (elapsed_ms + dt).min(total),
                });
            }
            None => {}
        }
    }

    fn apply(&mut self, event: DragEvent) {
        let next = connector_state_transition(self.state, self.distance, &self.thresholds, event);
        if next != self.state {
            log::debug!(
                "Bubble: {:?} -> {:?} ({:?}, Abstand {:.1})",
                self.state,
                next,
                event,
                self.distance
            );
            self.state = next;
        }
    }

    /// Aktueller Zustand
    pub fn state(&self) -> BubbleState {
        self.state
    }

    /// Letzter Ziehabstand zum festen Mittelpunkt
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Schwellen dieser Bubble
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Fester Kreis (Radius schrumpft beim Ziehen)
    pub fn fixed_circle(&self) -> Circle {
        self.fixed
    }

    /// Beweglicher Kreis
    pub fn movable_circle(&self) -> Circle {
        self.movable
    }

    /// `true`, solange der bewegliche Kreis gezeichnet wird.
    pub fn shows_movable(&self) -> bool {
        self.state != BubbleState::Dismissed
    }

    /// `true`, solange eine Animation läuft.
    pub fn is_animating(&self) -> bool {
        match self.animation {
            Some(Animation::SnapBack { .. }) => true,
            Some(Animation::Burst { elapsed_ms }) => !self.burst.is_finished(elapsed_ms),
            None => false,
        }
    }

    /// Brücke zwischen den Kreisen, nur im Zustand `Connected`.
    pub fn connector(&self) -> Option<ConnectorPath> {
        if self.state != BubbleState::Connected {
            return None;
        }
        connector_geometry(&self.fixed, &self.movable)
    }

    /// Index des aktuellen Burst-Bildes; `None` vor bzw. nach der Burst-Animation.
    pub fn burst_frame(&self) -> Option<usize> {
        let Some(Animation::Burst { elapsed_ms }) = self.animation else {
            return None;
        };
        let index = (self.burst.fraction_at(elapsed_ms) * self.burst_frames as f32) as usize;
        (index < self.burst_frames).then_some(index)
    }

    /// Zielrechteck `(min, max)` für das Burst-Bild.
    pub fn burst_rect(&self) -> (Vec2, Vec2) {
        self.movable.bounds()
    }
}
