//! Partikelfeld: Erzeugung aus einem Pixel-Raster und Integration pro Tick.

use super::particle::Particle;
use crate::core::{FxError, FxResult, PixelGrid};
use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Abwärts gerichtete Standard-Beschleunigung pro Tick.
pub const GRAVITY: f32 = 0.98;

/// Bereiche für die zufällige Startgeschwindigkeit.
///
/// Abgestimmte Konstanten für eine bestimmte Canvas-Größe, keine Physik.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityRanges {
    /// Betrag der horizontalen Geschwindigkeit liegt in `[0, horizontal_max)`, Vorzeichen zufällig
    pub horizontal_max: f32,
    /// Kleinste vertikale Startgeschwindigkeit (ganzzahlig, inklusiv)
    pub vertical_min: i32,
    /// Größte vertikale Startgeschwindigkeit (ganzzahlig, inklusiv)
    pub vertical_max: i32,
}

impl Default for VelocityRanges {
    fn default() -> Self {
        Self {
            horizontal_max: 20.0,
            vertical_min: -15,
            vertical_max: 35,
        }
    }
}

impl VelocityRanges {
    /// Zieht eine Startgeschwindigkeit.
    ///
    /// Eine nicht endliche oder nicht positive `horizontal_max` ergibt
    /// horizontal 0.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        let magnitude = if self.horizontal_max > 0.0 && self.horizontal_max.is_finite() {
            rng.gen_range(0.0..self.horizontal_max)
        } else {
            0.0
        };
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };

        let lo = self.vertical_min.min(self.vertical_max);
        let hi = self.vertical_min.max(self.vertical_max);
        let vy = rng.gen_range(lo..=hi) as f32;

        Vec2::new(sign * magnitude, vy)
    }
}

/// Schwarm aus Partikeln, die ein zerfallendes Bild darstellen.
///
/// Partikel werden nie einzeln entfernt; die Animation wird vom Host zeitlich
/// begrenzt.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    ticks: u64,
}

impl ParticleField {
    /// Erzeugt ein Partikel pro Pixel.
    ///
    /// Pixel `(col, row)` landet bei `(col·d + d/2, row·d + d/2)` mit Radius
    /// `d/2`. Die Partikel werden spaltenweise angelegt (x außen, y innen).
    ///
    /// Ein leeres Raster lässt sich nicht bauen, [`FxError::EmptyPixelGrid`]
    /// kommt daher aus [`PixelGrid::new`].
    pub fn new(
        grid: &PixelGrid,
        spacing: f32,
        velocity: &VelocityRanges,
        acceleration: Vec2,
        rng: &mut impl Rng,
    ) -> FxResult<Self> {
        if !velocity.horizontal_max.is_finite() {
            return Err(FxError::NonFiniteVelocity {
                horizontal_max: velocity.horizontal_max,
            });
        }
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(FxError::NonPositiveSpacing { spacing });
        }

        let radius = spacing / 2.0;
        let mut particles = Vec::with_capacity(grid.len());
        for col in 0..grid.width() {
            for row in 0..grid.height() {
                let Some(color) = grid.get(col, row) else {
                    continue;
                };
                particles.push(Particle {
                    color,
                    position: Vec2::new(
                        col as f32 * spacing + radius,
                        row as f32 * spacing + radius,
                    ),
                    velocity: velocity.sample(rng),
                    acceleration,
                    radius,
                });
            }
        }

        log::debug!(
            "Partikelfeld erzeugt: {} Partikel aus {}x{} Pixeln, Abstand {}",
            particles.len(),
            grid.width(),
            grid.height(),
            spacing
        );

        Ok(Self {
            particles,
            ticks: 0,
        })
    }

    /// Wie [`ParticleField::new`] mit Standard-Geschwindigkeiten und [`GRAVITY`].
    pub fn with_defaults(grid: &PixelGrid, spacing: f32, rng: &mut impl Rng) -> FxResult<Self> {
        Self::new(
            grid,
            spacing,
            &VelocityRanges::default(),
            Vec2::new(0.0, GRAVITY),
            rng,
        )
    }

    /// Rückt jedes Partikel genau einen Tick vor.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.step();
        }
        self.ticks += 1;
    }

    /// Führt `n` Ticks aus.
    pub fn tick_n(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Aktueller Zustand aller Partikel (nur lesend).
    pub fn snapshot(&self) -> &[Particle] {
        &self.particles
    }

    /// Anzahl der Partikel
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// `true`, wenn das Feld keine Partikel enthält.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Bisher ausgeführte Ticks
    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks
    }
}

/// Anzahl der Frames, die ein Timer mit `frame_ms` Takt in `duration_ms` auslöst.
///
/// Ein Frame-Takt <= 0 liefert 0.
pub fn ticks_for_duration(duration_ms: u64, frame_ms: f32) -> u64 {
    if frame_ms <= 0.0 || !frame_ms.is_finite() {
        return 0;
    }
    (duration_ms as f32 / frame_ms).ceil() as u64
}
