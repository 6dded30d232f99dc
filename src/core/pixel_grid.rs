//! Pixel-Raster als Quelle für den Partikel-Zerfall.

use super::error::{FxError, FxResult};
use anyhow::Context;
use std::path::Path;

/// Undurchsichtiger RGBA-Farbwert eines Pixels.
pub type Rgba = [u8; 4];

/// Zeilenweise (row-major) gespeichertes Pixel-Raster.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl PixelGrid {
    /// Erstellt ein Raster aus einem row-major Puffer.
    ///
    /// Fehler bei leerem Raster oder wenn `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> FxResult<Self> {
        if width == 0 || height == 0 {
            return Err(FxError::EmptyPixelGrid);
        }
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(FxError::PixelGridShape {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Erstellt ein Raster, dessen Farben per `f(col, row)` berechnet werden.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Rgba,
    ) -> FxResult<Self> {
        let mut pixels = Vec::with_capacity(width.saturating_mul(height));
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(col, row));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Übernimmt die Pixel eines dekodierten RGBA-Bildes.
    pub fn from_rgba_image(image: &image::RgbaImage) -> FxResult<Self> {
        let pixels = image.pixels().map(|p| p.0).collect();
        Self::new(image.width() as usize, image.height() as usize, pixels)
    }

    /// Breite in Pixeln
    pub fn width(&self) -> usize {
        self.width
    }

    /// Höhe in Pixeln
    pub fn height(&self) -> usize {
        self.height
    }

    /// Anzahl der Pixel
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Immer `false` für ein gültig konstruiertes Raster.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Farbe an Spalte `col`, Zeile `row`.
    pub fn get(&self, col: usize, row: usize) -> Option<Rgba> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.pixels.get(row * self.width + col).copied()
    }
}

/// Lädt eine Bilddatei und wandelt sie in ein Pixel-Raster.
pub fn load_pixel_grid(path: &Path) -> anyhow::Result<PixelGrid> {
    let image = image::open(path)
        .with_context(|| format!("Bild konnte nicht geladen werden: {}", path.display()))?
        .to_rgba8();
    log::info!(
        "Bild geladen: {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(PixelGrid::from_rgba_image(&image)?)
}
