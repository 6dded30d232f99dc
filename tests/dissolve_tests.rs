//! Integrationstests für den Partikel-Zerfall.

use canvas_fx::particles::{ticks_for_duration, GRAVITY};
use canvas_fx::{Dissolve, FxError, FxOptions, ParticleField, PixelGrid, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn checkerboard(size: usize) -> PixelGrid {
    PixelGrid::from_fn(size, size, |col, row| {
        if (col + row) % 2 == 0 {
            [0, 0, 0, 255]
        } else {
            [255, 255, 255, 255]
        }
    })
    .expect("Raster erwartet")
}

#[test]
fn test_one_particle_per_pixel_with_pixel_color() {
    let grid = checkerboard(8);
    let field = ParticleField::with_defaults(&grid, 3.0, &mut StdRng::seed_from_u64(1))
        .expect("Feld erwartet");
    assert_eq!(field.len(), 64);
    for p in field.snapshot() {
        let col = ((p.position.x - 1.5) / 3.0).round() as usize;
        let row = ((p.position.y - 1.5) / 3.0).round() as usize;
        assert_eq!(Some(p.color), grid.get(col, row));
    }
}

#[test]
fn test_full_dissolve_pass_with_default_options() {
    let opts = FxOptions::default().dissolve;
    let field = ParticleField::new(
        &checkerboard(4),
        opts.particle_diameter,
        &opts.velocity,
        Vec2::new(0.0, opts.gravity),
        &mut StdRng::seed_from_u64(8),
    )
    .expect("Feld erwartet");
    let initial: Vec<_> = field.snapshot().to_vec();

    let mut dissolve = Dissolve::new(field, opts.duration_ms);
    dissolve.start();
    while dissolve.on_frame(opts.frame_ms) {}

    let ticks = ticks_for_duration(opts.duration_ms, opts.frame_ms);
    assert_eq!(dissolve.field().ticks_elapsed(), ticks);

    // Gravitation zieht jedes Partikel gleich stark nach unten
    for (p0, p) in initial.iter().zip(dissolve.field().snapshot()) {
        let dv = p.velocity.y - p0.velocity.y;
        assert!((dv - GRAVITY * ticks as f32).abs() < 1e-2);
        assert_eq!(p.velocity.x, p0.velocity.x);
    }
}

#[test]
fn test_empty_or_bad_inputs_fail() {
    assert_eq!(
        PixelGrid::new(0, 0, Vec::new()),
        Err(FxError::EmptyPixelGrid)
    );
    let err = ParticleField::with_defaults(&checkerboard(2), -3.0, &mut StdRng::seed_from_u64(0))
        .unwrap_err();
    assert_eq!(err, FxError::NonPositiveSpacing { spacing: -3.0 });
}
