//! Fehlertypen des Geometrie-Kerns.

use thiserror::Error;

/// Fehler bei ungültigen Eingaben an Kurve, Partikelfeld oder Optionen.
///
/// Alle Fehler werden synchron beim Aufruf erkannt. Wiederholen mit
/// denselben Eingaben ist sinnlos, es gibt keine Retry-Semantik.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    /// Eine Bézier-Kurve braucht mindestens zwei Kontrollpunkte.
    #[error("mindestens 2 Kontrollpunkte erforderlich, erhalten: {count}")]
    TooFewControlPoints { count: usize },
    /// Die Sample-Anzahl muss >= 1 sein.
    #[error("Sample-Anzahl muss mindestens 1 sein")]
    ZeroSamples,
    /// Pixel-Raster ohne Pixel.
    #[error("Pixel-Raster ist leer")]
    EmptyPixelGrid,
    /// Partikel-Abstand muss positiv und endlich sein.
    #[error("Partikel-Abstand muss > 0 sein, erhalten: {spacing}")]
    NonPositiveSpacing { spacing: f32 },
    /// Obergrenze der horizontalen Startgeschwindigkeit muss endlich sein.
    #[error("horizontale Geschwindigkeit muss endlich sein, erhalten: {horizontal_max}")]
    NonFiniteVelocity { horizontal_max: f32 },
    /// Pufferlänge passt nicht zu Breite × Höhe.
    #[error("Pixel-Puffer mit {len} Einträgen passt nicht zu {width}x{height}")]
    PixelGridShape {
        width: usize,
        height: usize,
        len: usize,
    },
    /// Ein Options-Wert liegt außerhalb des gültigen Bereichs.
    #[error("ungültige Option `{field}`: {reason}")]
    InvalidOption { field: &'static str, reason: String },
}

impl FxError {
    /// `true` für alle Fehler der Kategorie "ungültige Eingabe".
    ///
    /// Aktuell sind das alle Varianten; Options-Fehler zählen dazu, weil sie
    /// ebenfalls aus fehlerhaften Aufrufer-Daten entstehen.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FxError::TooFewControlPoints { .. }
                | FxError::ZeroSamples
                | FxError::EmptyPixelGrid
                | FxError::NonPositiveSpacing { .. }
                | FxError::NonFiniteVelocity { .. }
                | FxError::PixelGridShape { .. }
                | FxError::InvalidOption { .. }
        )
    }
}

/// Ergebnis-Alias für den Geometrie-Kern.
pub type FxResult<T> = Result<T, FxError>;
