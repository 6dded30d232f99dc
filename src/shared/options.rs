//! Zentrale Konfiguration für die Canvas-Effekte.
//!
//! `FxOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::bubble::BubbleConfig;
use crate::core::{FxError, FxResult};
use crate::particles::{VelocityRanges, GRAVITY};
use crate::splash::SplashConfig;
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Abtastschritte pro Kurve.
pub const CURVE_SAMPLES: usize = 1000;
/// Anzahl zufälliger Kontrollpunkte beim Neu-Würfeln.
pub const CURVE_CONTROL_POINTS: usize = 9;
/// Untere Grenze der Kontrollpunkt-Koordinaten (inklusiv).
pub const CURVE_COORD_MIN: i32 = 200;
/// Obere Grenze der Kontrollpunkt-Koordinaten (exklusiv).
pub const CURVE_COORD_MAX: i32 = 1000;

// ── Partikel-Zerfall ────────────────────────────────────────────────

/// Partikel-Durchmesser in Pixeln.
pub const PARTICLE_DIAMETER: f32 = 3.0;
/// Dauer des Zerfalls.
pub const DISSOLVE_DURATION_MS: u64 = 2000;
/// Frame-Takt des Hosts (für Tick-Schätzungen).
pub const FRAME_MS: f32 = 16.0;

/// Optionen des Kurven-Editors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveOptions {
    /// Abtastschritte (Ergebnis hat `samples + 1` Punkte)
    pub samples: usize,
    /// Anzahl zufälliger Kontrollpunkte
    pub control_points: usize,
    /// Koordinatenbereich `[coord_min, coord_max)` der Kontrollpunkte
    pub coord_min: i32,
    pub coord_max: i32,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            samples: CURVE_SAMPLES,
            control_points: CURVE_CONTROL_POINTS,
            coord_min: CURVE_COORD_MIN,
            coord_max: CURVE_COORD_MAX,
        }
    }
}

/// Optionen des Partikel-Zerfalls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DissolveOptions {
    /// Durchmesser und Rasterabstand der Partikel
    pub particle_diameter: f32,
    /// Bereiche der Startgeschwindigkeit
    pub velocity: VelocityRanges,
    /// Vertikale Beschleunigung pro Tick
    pub gravity: f32,
    /// Dauer des Zerfalls
    pub duration_ms: u64,
    /// Frame-Takt des Hosts
    pub frame_ms: f32,
}

impl Default for DissolveOptions {
    fn default() -> Self {
        Self {
            particle_diameter: PARTICLE_DIAMETER,
            velocity: VelocityRanges::default(),
            gravity: GRAVITY,
            duration_ms: DISSOLVE_DURATION_MS,
            frame_ms: FRAME_MS,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `canvas_fx.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FxOptions {
    pub curve: CurveOptions,
    pub dissolve: DissolveOptions,
    pub bubble: BubbleConfig,
    pub splash: SplashConfig,
}

impl FxOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<FxOptions>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("canvas_fx"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("canvas_fx.toml")
    }

    /// Prüft die Wertebereiche, die die Kern-Module voraussetzen.
    pub fn validate(&self) -> FxResult<()> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> FxResult<()> {
            Err(FxError::InvalidOption {
                field,
                reason: reason.into(),
            })
        }

        if self.curve.samples < 1 {
            return invalid("curve.samples", "muss >= 1 sein");
        }
        if self.curve.control_points < 2 {
            return invalid("curve.control_points", "muss >= 2 sein");
        }
        if self.curve.coord_min >= self.curve.coord_max {
            return invalid("curve.coord_min", "muss kleiner als coord_max sein");
        }
        let d = self.dissolve.particle_diameter;
        if !(d > 0.0 && d.is_finite()) {
            return invalid("dissolve.particle_diameter", format!("muss > 0 sein, ist {d}"));
        }
        let h = self.dissolve.velocity.horizontal_max;
        if !(h >= 0.0 && h.is_finite()) {
            return invalid(
                "dissolve.velocity.horizontal_max",
                format!("muss endlich und >= 0 sein, ist {h}"),
            );
        }
        if !(self.dissolve.frame_ms > 0.0) {
            return invalid("dissolve.frame_ms", "muss > 0 sein");
        }
        if !(self.bubble.radius >= 0.0) {
            return invalid("bubble.radius", "darf nicht negativ sein");
        }
        if self.splash.circle_radius < 0.0 || self.splash.rotate_radius < 0.0 {
            return invalid("splash", "Radien dürfen nicht negativ sein");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let opts = FxOptions::default();
        assert!(opts.validate().is_ok());
        assert_eq!(opts.curve.samples, 1000);
        assert_eq!(opts.dissolve.gravity, 0.98);
        assert_eq!(opts.bubble.radius, 12.0);
        assert_eq!(opts.splash.colors.len(), 6);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let opts: FxOptions = toml::from_str(
            r#"
            [curve]
            samples = 50

            [dissolve.velocity]
            vertical_max = 10
            "#,
        )
        .expect("TOML erwartet");
        assert_eq!(opts.curve.samples, 50);
        assert_eq!(opts.curve.control_points, CURVE_CONTROL_POINTS);
        assert_eq!(opts.dissolve.velocity.vertical_max, 10);
        assert_eq!(opts.dissolve.velocity.vertical_min, -15);
        assert_eq!(opts.bubble, BubbleConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut opts = FxOptions::default();
        opts.dissolve.particle_diameter = 0.0;
        let err = opts.validate().unwrap_err();
        assert!(matches!(
            err,
            FxError::InvalidOption {
                field: "dissolve.particle_diameter",
                ..
            }
        ));

        let mut opts = FxOptions::default();
        opts.curve.control_points = 1;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_infinite_horizontal_velocity() {
        let mut opts = FxOptions::default();
        opts.dissolve.velocity.horizontal_max = f32::INFINITY;
        assert!(matches!(
            opts.validate(),
            Err(FxError::InvalidOption {
                field: "dissolve.velocity.horizontal_max",
                ..
            })
        ));

        let path = std::env::temp_dir().join("canvas_fx_options_inf_velocity.toml");
        std::fs::write(&path, "[dissolve.velocity]\nhorizontal_max = inf\n")
            .expect("Schreiben erwartet");
        let loaded = FxOptions::load_from_file(&path);
        assert_eq!(loaded, FxOptions::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join("canvas_fx_options_roundtrip.toml");
        let mut opts = FxOptions::default();
        opts.curve.samples = 321;
        opts.bubble.radius = 20.0;
        opts.save_to_file(&path).expect("Speichern erwartet");

        let loaded = FxOptions::load_from_file(&path);
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_or_broken_file_falls_back() {
        let missing = std::env::temp_dir().join("canvas_fx_options_does_not_exist.toml");
        assert_eq!(FxOptions::load_from_file(&missing), FxOptions::default());

        let broken = std::env::temp_dir().join("canvas_fx_options_broken.toml");
        std::fs::write(&broken, "curve = [").expect("Schreiben erwartet");
        assert_eq!(FxOptions::load_from_file(&broken), FxOptions::default());
        let _ = std::fs::remove_file(&broken);
    }
}
