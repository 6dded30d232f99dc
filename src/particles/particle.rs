//! Einzelnes Partikel des Zerfall-Effekts.

use crate::core::Rgba;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Partikel pro Quellpixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Farbe des Quellpixels
    pub color: Rgba,
    /// Mittelpunkt
    pub position: Vec2,
    /// Geschwindigkeit pro Tick
    pub velocity: Vec2,
    /// Beschleunigung pro Tick
    pub acceleration: Vec2,
    /// Radius (> 0)
    pub radius: f32,
}

impl Particle {
    /// Ein Euler-Schritt: erst Position mit alter Geschwindigkeit, dann Geschwindigkeit.
    pub fn step(&mut self) {
        self.position += self.velocity;
        self.velocity += self.acceleration;
    }
}
