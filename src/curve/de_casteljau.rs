//! Rekursive de-Casteljau-Auswertung.
//!
//! Nur zur Gegenprüfung der Bernstein-Auswertung gedacht: die naive Rekursion
//! verzweigt in jedem Schritt zweifach und braucht O(2^N) Aufrufe.

use super::bernstein::validate;
use crate::core::FxResult;
use glam::{DVec2, Vec2};

/// `p(i, j, t) = (1-t)·p(i-1, j, t) + t·p(i-1, j+1, t)`, Basis `p(0, j, t) = P_j`.
fn interpolate(points: &[Vec2], level: usize, index: usize, t: f64) -> DVec2 {
    if level == 0 {
        return points[index].as_dvec2();
    }
    (1.0 - t) * interpolate(points, level - 1, index, t)
        + t * interpolate(points, level - 1, index + 1, t)
}

/// Kurvenpunkt bei `t` per de-Casteljau-Rekursion.
///
/// Für eine leere Punktliste wird `Vec2::ZERO` geliefert.
pub fn de_casteljau_point(points: &[Vec2], t: f64) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    interpolate(points, points.len() - 1, 0, t).as_vec2()
}

/// Gegenstück zu [`super::evaluate_curve`] mit identischer Abtastung.
pub fn evaluate_curve_de_casteljau(points: &[Vec2], samples: usize) -> FxResult<Vec<Vec2>> {
    validate(points, samples)?;
    Ok((0..=samples)
        .map(|i| de_casteljau_point(points, i as f64 / samples as f64))
        .collect())
}
