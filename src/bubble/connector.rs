//! Elastische Brücke ("Metaball") zwischen festem und beweglichem Kreis.

use crate::core::Circle;
use crate::curve::{bernstein_point, binomial_row};
use glam::Vec2;
use serde::Serialize;

/// Zeichenbefehl eines geschlossenen Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Vec2),
    /// Quadratische Bézier-Kurve über `control` nach `to`
    QuadTo { control: Vec2, to: Vec2 },
    LineTo(Vec2),
    Close,
}

/// Die vier Tangentialpunkte und der gemeinsame Steuerpunkt der Brücke.
///
/// Die Punkte liegen senkrecht zur Mittelpunkt-Achse, jeweils um den eigenen
/// Radius versetzt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectorPath {
    /// Steuerpunkt: Mitte zwischen beiden Mittelpunkten
    pub anchor: Vec2,
    /// Startpunkt am festen Kreis
    pub fixed_start: Vec2,
    /// Endpunkt am festen Kreis
    pub fixed_end: Vec2,
    /// Startpunkt am beweglichen Kreis
    pub movable_start: Vec2,
    /// Endpunkt am beweglichen Kreis
    pub movable_end: Vec2,
}

/// Berechnet die Brücke zwischen `fixed` und `movable`.
///
/// Liegen beide Mittelpunkte aufeinander, sind sinθ/cosθ undefiniert und es
/// wird `None` geliefert (keine Brücke zeichnen).
pub fn connector_geometry(fixed: &Circle, movable: &Circle) -> Option<ConnectorPath> {
    let delta = movable.center - fixed.center;
    let dist = delta.length();
    if dist < f32::EPSILON {
        return None;
    }

    let sin_theta = delta.y / dist;
    let cos_theta = delta.x / dist;
    // Normale zur Achse, Länge 1
    let normal = Vec2::new(sin_theta, -cos_theta);

    Some(ConnectorPath {
        anchor: (fixed.center + movable.center) * 0.5,
        fixed_start: fixed.center - normal * fixed.radius,
        fixed_end: fixed.center + normal * fixed.radius,
        movable_start: movable.center + normal * movable.radius,
        movable_end: movable.center - normal * movable.radius,
    })
}

impl ConnectorPath {
    /// Geschlossener Pfad: fixed_start → (anchor) → movable_end → movable_start → (anchor) → fixed_end.
    pub fn commands(&self) -> [PathCommand; 5] {
        [
            PathCommand::MoveTo(self.fixed_start),
            PathCommand::QuadTo {
                control: self.anchor,
                to: self.movable_end,
            },
            PathCommand::LineTo(self.movable_start),
            PathCommand::QuadTo {
                control: self.anchor,
                to: self.fixed_end,
            },
            PathCommand::Close,
        ]
    }

    /// Umriss als Polygon für Hosts ohne Kurvenprimitive.
    ///
    /// Jede der beiden Kurven wird mit `samples_per_curve` Schritten
    /// abgetastet; der Endpunkt der zweiten Kurve schließt zum Start.
    pub fn outline(&self, samples_per_curve: usize) -> Vec<Vec2> {
        let samples = samples_per_curve.max(1);
        let coefficients = binomial_row(2);
        let first = [self.fixed_start, self.anchor, self.movable_end];
        let second = [self.movable_start, self.anchor, self.fixed_end];

        let mut points = Vec::with_capacity(2 * samples + 2);
        for curve in [&first, &second] {
            points.extend((0..=samples).map(|i| {
                let t = i as f64 / samples as f64;
                bernstein_point(curve, &coefficients, t)
            }));
        }
        points
    }
}
