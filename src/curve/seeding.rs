//! Kontrollpolygon: zufällige Startpunkte und Verbindungslinien.

use glam::Vec2;
use rand::Rng;

/// Erzeugt `count` Kontrollpunkte mit ganzzahligen Koordinaten in `[min, max)`.
///
/// Bei `min >= max` liegen alle Punkte auf `min`.
pub fn random_control_points(rng: &mut impl Rng, count: usize, min: i32, max: i32) -> Vec<Vec2> {
    let mut coord = || {
        if min < max {
            rng.gen_range(min..max) as f32
        } else {
            min as f32
        }
    };
    (0..count)
        .map(|_| {
            let x = coord();
            let y = coord();
            Vec2::new(x, y)
        })
        .collect()
}

/// Linien zwischen aufeinanderfolgenden Kontrollpunkten (Kontrollpolygon).
pub fn control_polygon_segments(points: &[Vec2]) -> Vec<(Vec2, Vec2)> {
    points.windows(2).map(|w| (w[0], w[1])).collect()
}
