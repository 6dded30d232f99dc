//! Geteilte Konfiguration für alle Effekt-Module.

pub mod options;

pub use options::{CurveOptions, DissolveOptions, FxOptions};
