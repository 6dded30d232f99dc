//! Integrationstests für die Bézier-Auswertung über die öffentliche API.

use approx::assert_abs_diff_eq;
use canvas_fx::curve::{binomial_row, control_polygon_segments, random_control_points};
use canvas_fx::{evaluate_curve, evaluate_curve_de_casteljau, CurveEvaluator, FxError, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_nine_random_points_like_the_editor() {
    let mut rng = StdRng::seed_from_u64(2024);
    let points = random_control_points(&mut rng, 9, 200, 1000);
    assert_eq!(control_polygon_segments(&points).len(), 8);

    let curve = CurveEvaluator::default()
        .evaluate(&points)
        .expect("Kurve erwartet");
    assert_eq!(curve.len(), 1001);
    assert_abs_diff_eq!(curve[0].x, points[0].x, epsilon = 1e-3);
    assert_abs_diff_eq!(curve[1000].y, points[8].y, epsilon = 1e-3);

    // Die Kurve liegt in der konvexen Hülle, also im Koordinatenbereich
    for p in &curve {
        assert!(p.x >= 199.9 && p.x <= 1000.1, "{p}");
        assert!(p.y >= 199.9 && p.y <= 1000.1, "{p}");
    }
}

#[test]
fn test_bernstein_and_de_casteljau_agree() {
    let points = [
        Vec2::new(1.0, 2.0),
        Vec2::new(4.0, 9.0),
        Vec2::new(7.0, -3.0),
        Vec2::new(12.0, 5.0),
        Vec2::new(15.0, 15.0),
        Vec2::new(20.0, 0.0),
    ];
    let a = evaluate_curve(&points, 64).expect("Kurve erwartet");
    let b = evaluate_curve_de_casteljau(&points, 64).expect("Kurve erwartet");
    for (p, q) in a.iter().zip(&b) {
        assert!((*p - *q).length() < 1e-4);
    }
}

#[test]
fn test_changing_point_count_rederives_coefficients() {
    let evaluator = CurveEvaluator::new(10);
    let line = evaluator
        .evaluate(&[Vec2::ZERO, Vec2::new(10.0, 0.0)])
        .expect("Kurve erwartet");
    let quad = evaluator
        .evaluate(&[Vec2::ZERO, Vec2::new(5.0, 10.0), Vec2::new(10.0, 0.0)])
        .expect("Kurve erwartet");
    assert_abs_diff_eq!(line[5].y, 0.0);
    assert_abs_diff_eq!(quad[5].y, 5.0, epsilon = 1e-5);
    assert_eq!(binomial_row(2), vec![1.0, 2.0, 1.0]);
}

#[test]
fn test_invalid_inputs_are_reported() {
    assert_eq!(
        evaluate_curve(&[Vec2::ONE], 1000),
        Err(FxError::TooFewControlPoints { count: 1 })
    );
    assert_eq!(
        evaluate_curve(&[Vec2::ZERO, Vec2::ONE], 0),
        Err(FxError::ZeroSamples)
    );
}
