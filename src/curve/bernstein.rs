//! Direkte Bézier-Auswertung über die Bernstein-Basis.

use crate::core::{FxError, FxResult};
use glam::{DVec2, Vec2};

/// Zeile `degree` des Pascalschen Dreiecks: `C(degree, j)` für `j ∈ [0, degree]`.
///
/// Jede Zeile entsteht aus der vorherigen: Ränder sind 1, innere Einträge
/// sind die Summe der beiden Nachbarn darüber. Die Werte werden als `f64`
/// geführt, damit auch hohe Grade nicht überlaufen (exakt bis Grad ~56).
pub fn binomial_row(degree: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(degree + 1);
    row.push(1.0);
    for k in 1..=degree {
        // Von hinten nach vorne, damit row[j - 1] noch der Wert aus Zeile k-1 ist
        row.push(1.0);
        for j in (1..k).rev() {
            row[j] += row[j - 1];
        }
    }
    row
}

/// Punkt der Kurve bei Parameter `t` (Summe über `C(n,j)·P_j·(1-t)^(n-j)·t^j`).
///
/// `coefficients` muss `binomial_row(points.len() - 1)` sein.
pub fn bernstein_point(points: &[Vec2], coefficients: &[f64], t: f64) -> Vec2 {
    debug_assert_eq!(points.len(), coefficients.len());
    let degree = points.len().saturating_sub(1) as i32;
    let inv = 1.0 - t;

    let mut acc = DVec2::ZERO;
    for (j, (p, c)) in points.iter().zip(coefficients).enumerate() {
        let j = j as i32;
        let weight = c * inv.powi(degree - j) * t.powi(j);
        acc += p.as_dvec2() * weight;
    }
    acc.as_vec2()
}

/// Prüft die Eingaben für eine Kurvenauswertung.
pub(crate) fn validate(points: &[Vec2], samples: usize) -> FxResult<()> {
    if points.len() < 2 {
        return Err(FxError::TooFewControlPoints {
            count: points.len(),
        });
    }
    if samples < 1 {
        return Err(FxError::ZeroSamples);
    }
    Ok(())
}

/// Tastet die Bézier-Kurve vom Grad `N-1` an `samples + 1` Stellen ab.
///
/// Liefert eine Polyline inklusive beider Endpunkte (`t = i / samples`,
/// `i ∈ [0, samples]`). Laufzeit O(samples · N), Zusatzspeicher O(N).
pub fn evaluate_curve(points: &[Vec2], samples: usize) -> FxResult<Vec<Vec2>> {
    validate(points, samples)?;

    let coefficients = binomial_row(points.len() - 1);
    let result = (0..=samples)
        .map(|i| {
            let t = i as f64 / samples as f64;
            bernstein_point(points, &coefficients, t)
        })
        .collect();
    Ok(result)
}
