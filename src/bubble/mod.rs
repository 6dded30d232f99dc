//! Ziehbare Badge mit elastischer Brücke und Burst.
//!
//! - `connector`: Geometrie der Brücke zwischen zwei Kreisen
//! - `state`: reine Zustandsübergänge (Idle → Connected → Apart → Dismissed)
//! - `drag`: Controller mit Kreisen, Schrumpfen des festen Kreises und Animationen

mod connector;
mod drag;
mod state;

pub use connector::{connector_geometry, ConnectorPath, PathCommand};
pub use drag::{BubbleConfig, DragBubble};
pub use state::{
    connector_state_transition, release_action, BubbleState, DragEvent, ReleaseAction, Thresholds,
};
