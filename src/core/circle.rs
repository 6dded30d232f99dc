//! Kreis-Primitive für Bubble- und Splash-Geometrie.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kreis mit Mittelpunkt und Radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Mittelpunkt
    pub center: Vec2,
    /// Radius (>= 0)
    pub radius: f32,
}

impl Circle {
    /// Erstellt einen neuen Kreis.
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Abstand der Mittelpunkte zweier Kreise.
    pub fn center_distance(&self, other: &Circle) -> f32 {
        self.center.distance(other.center)
    }

    /// Achsenparalleles Begrenzungsrechteck als `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let r = Vec2::splat(self.radius);
        (self.center - r, self.center + r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_distance() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 5.0);
        let b = Circle::new(Vec2::new(3.0, 4.0), 1.0);
        assert_eq!(a.center_distance(&b), 5.0);
    }

    #[test]
    fn test_bounds() {
        let c = Circle::new(Vec2::new(10.0, 20.0), 2.0);
        assert_eq!(c.bounds(), (Vec2::new(8.0, 18.0), Vec2::new(12.0, 22.0)));
    }
}
