//! Decorative scrolling background layers
//!
//! Each layer scrolls left at a constant per-tick speed for its kind. Once a
//! layer's trailing edge passes the left boundary it is moved to a fixed
//! offset past the right edge, so layers never disappear and recycled
//! spacing stays uniform.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Cloud,
    Mountain,
    Hill,
}

impl LayerKind {
    /// Scroll speed in pixels per tick
    pub fn speed(&self) -> f32 {
        match self {
            LayerKind::Cloud => CLOUD_SPEED,
            LayerKind::Mountain => MOUNTAIN_SPEED,
            LayerKind::Hill => HILL_SPEED,
        }
    }

    /// Distance past the right edge where a recycled layer reappears
    pub fn respawn_margin(&self) -> f32 {
        match self {
            LayerKind::Cloud => CLOUD_MARGIN,
            LayerKind::Mountain => MOUNTAIN_MARGIN,
            LayerKind::Hill => HILL_MARGIN,
        }
    }
}

/// One background element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxLayer {
    pub kind: LayerKind,
    /// Left edge
    pub x: f32,
    /// Vertical centre for clouds, peak height above the ground for terrain
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ParallaxLayer {
    /// Scroll one tick, wrapping to `playfield_width + margin` when fully offscreen
    pub fn advance(&mut self, playfield_width: f32) {
        self.x -= self.kind.speed();
        if self.x + self.width < 0.0 {
            self.x = playfield_width + self.kind.respawn_margin();
        }
    }
}

/// All background layers, back to front
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParallaxSet {
    pub layers: Vec<ParallaxLayer>,
}

impl ParallaxSet {
    /// Initial layout: five clouds, three far mountains, three hills
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut layers = Vec::with_capacity(11);

        for i in 0..5 {
            let radius = 20.0 + rng.random::<f32>() * 10.0;
            layers.push(ParallaxLayer {
                kind: LayerKind::Cloud,
                x: i as f32 * 130.0 + rng.random::<f32>() * 60.0,
                y: 60.0 + rng.random::<f32>() * 120.0,
                width: radius * 3.0,
                height: radius * 2.0,
            });
        }

        for i in 0..3 {
            layers.push(ParallaxLayer {
                kind: LayerKind::Mountain,
                x: i as f32 * 280.0,
                y: 0.0,
                width: 340.0,
                height: 120.0 + rng.random::<f32>() * 40.0,
            });
        }

        for i in 0..3 {
            layers.push(ParallaxLayer {
                kind: LayerKind::Hill,
                x: i as f32 * 220.0,
                y: 0.0,
                width: 240.0,
                height: 70.0 + rng.random::<f32>() * 30.0,
            });
        }

        Self { layers }
    }

    pub fn advance(&mut self, playfield_width: f32) {
        for layer in &mut self.layers {
            layer.advance(playfield_width);
        }
    }

    pub fn of_kind(&self, kind: LayerKind) -> impl Iterator<Item = &ParallaxLayer> {
        self.layers.iter().filter(move |l| l.kind == kind)
    }
}
