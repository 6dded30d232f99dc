//! Canvas-FX Headless-Treiber.
//!
//! Spielt jeden Effekt einmal ohne Zeichenfläche durch und gibt eine
//! JSON-Zusammenfassung aus.
//!
//! Aufruf: `canvas-fx [optionen.toml] [bild.png] [seed]`

use anyhow::{Context, Result};
use canvas_fx::core::load_pixel_grid;
use canvas_fx::curve::random_control_points;
use canvas_fx::particles::ticks_for_duration;
use canvas_fx::{
    BubbleState, CurveEvaluator, Dissolve, DragBubble, FxOptions, ParticleField, PixelGrid,
    ReleaseAction, SplashAnimation, SplashPhase, Vec2,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 0x5EED;
const VIEWPORT: Vec2 = Vec2::new(1080.0, 1920.0);

#[derive(Serialize)]
struct CurveSummary {
    control_points: Vec<Vec2>,
    polyline_points: usize,
    length: f32,
}

#[derive(Serialize)]
struct DissolveSummary {
    particles: usize,
    expected_ticks: u64,
    ticks: u64,
    bounds_min: Vec2,
    bounds_max: Vec2,
}

#[derive(Serialize)]
struct BubbleSummary {
    states: Vec<BubbleState>,
    release: ReleaseAction,
    burst_frames_shown: usize,
}

#[derive(Serialize)]
struct SplashSummary {
    phases: Vec<SplashPhase>,
    frames: usize,
    final_hole_radius: f32,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    curve: CurveSummary,
    dissolve: DissolveSummary,
    bubble: BubbleSummary,
    splash: SplashSummary,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("canvas-fx v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let options_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(FxOptions::config_path);
    let image_path = args.next().map(PathBuf::from);
    let seed = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Seed ist keine Zahl: {raw}"))?,
        None => DEFAULT_SEED,
    };

    let options = FxOptions::load_from_file(&options_path);
    let mut rng = StdRng::seed_from_u64(seed);

    let summary = Summary {
        seed,
        curve: run_curve(&options, &mut rng)?,
        dissolve: run_dissolve(&options, image_path, &mut rng)?,
        bubble: run_bubble(&options),
        splash: run_splash(&options),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn run_curve(options: &FxOptions, rng: &mut StdRng) -> Result<CurveSummary> {
    let curve = &options.curve;
    let control_points =
        random_control_points(rng, curve.control_points, curve.coord_min, curve.coord_max);
    let polyline = CurveEvaluator::new(curve.samples).evaluate(&control_points)?;
    let length: f32 = polyline.windows(2).map(|w| w[0].distance(w[1])).sum();
    log::info!(
        "Kurve: {} Kontrollpunkte, {} Punkte, Länge {:.1}",
        control_points.len(),
        polyline.len(),
        length
    );
    Ok(CurveSummary {
        control_points,
        polyline_points: polyline.len(),
        length,
    })
}

fn run_dissolve(
    options: &FxOptions,
    image_path: Option<PathBuf>,
    rng: &mut StdRng,
) -> Result<DissolveSummary> {
    let grid = match image_path {
        Some(path) => load_pixel_grid(&path)?,
        None => PixelGrid::from_fn(64, 64, |col, row| {
            [(col * 4) as u8, (row * 4) as u8, 128, 255]
        })?,
    };

    let opts = &options.dissolve;
    let field = ParticleField::new(
        &grid,
        opts.particle_diameter,
        &opts.velocity,
        Vec2::new(0.0, opts.gravity),
        rng,
    )?;
    let mut dissolve = Dissolve::new(field, opts.duration_ms);
    dissolve.start();
    while dissolve.on_frame(opts.frame_ms) {}

    let field = dissolve.field();
    let (bounds_min, bounds_max) = field.snapshot().iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(lo, hi), p| (lo.min(p.position), hi.max(p.position)),
    );
    log::info!(
        "Zerfall: {} Partikel nach {} Ticks",
        field.len(),
        field.ticks_elapsed()
    );

    Ok(DissolveSummary {
        particles: field.len(),
        expected_ticks: ticks_for_duration(opts.duration_ms, opts.frame_ms),
        ticks: field.ticks_elapsed(),
        bounds_min,
        bounds_max,
    })
}

fn run_bubble(options: &FxOptions) -> BubbleSummary {
    let center = VIEWPORT * 0.5;
    let radius = options.bubble.radius;
    let mut bubble = DragBubble::new(center, &options.bubble);
    let mut states = vec![bubble.state()];

    bubble.on_press(center);
    states.push(bubble.state());
    for step in 1..=20 {
        bubble.on_move(center + Vec2::new(step as f32 * radius, 0.0));
        if states.last() != Some(&bubble.state()) {
            states.push(bubble.state());
        }
    }

    let release = bubble.on_release();
    let mut burst_frames_shown = 0;
    let mut last_frame = None;
    while bubble.is_animating() {
        bubble.on_frame(options.dissolve.frame_ms);
        let frame = bubble.burst_frame();
        if frame.is_some() && frame != last_frame {
            burst_frames_shown += 1;
        }
        last_frame = frame;
    }
    states.push(bubble.state());

    BubbleSummary {
        states,
        release,
        burst_frames_shown,
    }
}

fn run_splash(options: &FxOptions) -> SplashSummary {
    let mut splash = SplashAnimation::new(options.splash.clone(), VIEWPORT);
    let mut phases = vec![splash.phase()];
    let mut frames = 0;
    while !splash.is_finished() {
        splash.advance(options.dissolve.frame_ms);
        frames += 1;
        if phases.last() != Some(&splash.phase()) {
            phases.push(splash.phase());
        }
    }
    SplashSummary {
        phases,
        frames,
        final_hole_radius: splash.hole_radius(),
    }
}
