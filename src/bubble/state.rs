//! Zustandsübergänge der Drag-Bubble.
//!
//! Reine Funktionen: der Zustand hängt nur vom vorherigen Zustand, dem
//! Ereignis und dem Ziehabstand zum festen Mittelpunkt ab.

use serde::{Deserialize, Serialize};

/// Zustand der Bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BubbleState {
    /// Ruhend, ein Kreis mit Text
    #[default]
    Idle,
    /// Gezogen und per Brücke mit dem festen Kreis verbunden
    Connected,
    /// Gezogen und vom festen Kreis getrennt
    Apart,
    /// Geplatzt (Burst-Animation)
    Dismissed,
}

/// Berührungs-Ereignis aus dem Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Press,
    Move,
    Release,
}

/// Reaktion auf das Loslassen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReleaseAction {
    /// Nichts zu tun
    None,
    /// Beweglichen Kreis zum festen Mittelpunkt zurückfedern lassen
    SnapBack,
    /// Bubble platzen lassen
    Burst,
}

/// Abstandsschwellen, abgeleitet vom Basisradius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Radius beider Kreise im Ruhezustand
    pub base_radius: f32,
    /// Maximaler Verbindungsabstand (`8 × base_radius`)
    pub max_dist: f32,
    /// Toleranz um `max_dist` (`max_dist / 4`)
    pub move_offset: f32,
}

impl Thresholds {
    /// Leitet die Schwellen aus dem Basisradius ab.
    pub fn from_base_radius(base_radius: f32) -> Self {
        let max_dist = base_radius * 8.0;
        Self {
            base_radius,
            max_dist,
            move_offset: max_dist / 4.0,
        }
    }

    /// Abstand, bis zu dem ein Druck die Bubble greift.
    pub fn press_limit(&self) -> f32 {
        self.max_dist + self.move_offset
    }

    /// Abstand, ab dem die Verbindung reißt.
    pub fn connect_limit(&self) -> f32 {
        self.max_dist - self.move_offset
    }

    /// Unterhalb dieses Abstands federt eine getrennte Bubble zurück statt zu platzen.
    pub fn snap_back_limit(&self) -> f32 {
        2.0 * self.base_radius
    }

    /// Radius des festen Kreises bei Ziehabstand `distance`: `base_radius - distance / 8`, mindestens 0.
    pub fn fixed_radius_for(&self, distance: f32) -> f32 {
        (self.base_radius - distance / 8.0).max(0.0)
    }
}

/// Folgezustand nach `event` bei Ziehabstand `distance`.
pub fn connector_state_transition(
    state: BubbleState,
    distance: f32,
    thresholds: &Thresholds,
    event: DragEvent,
) -> BubbleState {
    use BubbleState::*;

    match (event, state) {
        (_, Dismissed) => Dismissed,
        (DragEvent::Press, _) => {
            if distance < thresholds.press_limit() {
                Connected
            } else {
                Idle
            }
        }
        (DragEvent::Move, Connected) => {
            if distance < thresholds.connect_limit() {
                Connected
            } else {
                Apart
            }
        }
        (DragEvent::Move, other) => other,
        (DragEvent::Release, Connected) => Idle,
        (DragEvent::Release, Apart) => {
            if distance < thresholds.snap_back_limit() {
                Idle
            } else {
                Dismissed
            }
        }
        (DragEvent::Release, Idle) => Idle,
    }
}

/// Animation, die das Loslassen in `state` bei `distance` auslöst.
pub fn release_action(state: BubbleState, distance: f32, thresholds: &Thresholds) -> ReleaseAction {
    match state {
        BubbleState::Connected => ReleaseAction::SnapBack,
        BubbleState::Apart if distance < thresholds.snap_back_limit() => ReleaseAction::SnapBack,
        BubbleState::Apart => ReleaseAction::Burst,
        BubbleState::Idle | BubbleState::Dismissed => ReleaseAction::None,
    }
}
