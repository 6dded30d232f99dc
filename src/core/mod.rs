//! Core-Domänentypen: Fehler, Kreise, Pixel-Raster.

pub mod circle;
pub mod error;
pub mod pixel_grid;

pub use circle::Circle;
pub use error::{FxError, FxResult};
pub use glam::Vec2;
pub use pixel_grid::{load_pixel_grid, PixelGrid, Rgba};
