//! Canvas-Effekte: numerischer Kern.
//! Bézier-Kurven, Partikel-Zerfall, Drag-Bubble und Splash-Animation als
//! seiteneffektfreie Bausteine für eine Host-Render-Schleife.

pub mod anim;
pub mod bubble;
pub mod core;
pub mod curve;
pub mod particles;
pub mod shared;
pub mod splash;

pub use anim::{Interpolator, Tween};
pub use bubble::{
    connector_geometry, connector_state_transition, BubbleConfig, BubbleState, ConnectorPath,
    DragBubble, DragEvent, PathCommand, ReleaseAction, Thresholds,
};
pub use crate::core::{Circle, FxError, FxResult, PixelGrid, Rgba, Vec2};
pub use curve::{evaluate_curve, evaluate_curve_de_casteljau, CurveEvaluator};
pub use particles::{Dissolve, Particle, ParticleField, VelocityRanges};
pub use shared::FxOptions;
pub use splash::{SplashAnimation, SplashConfig, SplashFrame, SplashPhase};
