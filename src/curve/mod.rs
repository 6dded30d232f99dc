//! Bézier-Kurven beliebigen Grades.
//!
//! Aus N geordneten Kontrollpunkten entsteht eine dichte Polyline, die die
//! Bézier-Kurve vom Grad N-1 annähert. Produktiv wird die Bernstein-Basis
//! direkt ausgewertet; die rekursive de-Casteljau-Variante dient nur der
//! Gegenprüfung in Tests und Benchmarks.

mod bernstein;
mod de_casteljau;
mod seeding;

pub use bernstein::{bernstein_point, binomial_row, evaluate_curve};
pub use de_casteljau::{de_casteljau_point, evaluate_curve_de_casteljau};
pub use seeding::{control_polygon_segments, random_control_points};

use crate::core::FxResult;
use glam::Vec2;

/// Standard-Anzahl an Abtastschritten pro Kurve.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Kurven-Auswerter mit fester Sample-Anzahl.
///
/// Hält keinen Zustand über Aufrufe hinweg: die Binomialkoeffizienten werden
/// bei jedem Aufruf für die aktuelle Punktanzahl neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveEvaluator {
    /// Abtastschritte (Ergebnis hat `samples + 1` Punkte)
    pub samples: usize,
}

impl CurveEvaluator {
    /// Erstellt einen Auswerter mit `samples` Schritten.
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Wertet die Kurve durch `points` aus.
    pub fn evaluate(&self, points: &[Vec2]) -> FxResult<Vec<Vec2>> {
        evaluate_curve(points, self.samples)
    }
}

impl Default for CurveEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}
