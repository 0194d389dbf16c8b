// src/render.rs

//! Geometry of the orientation widget: a circle with an arrow from its center.

use crate::core::QuantumState;
use crate::core::display_constants::{ARROW_LENGTH, CIRCLE_RADIUS};

/// Canvas-local coordinates (origin top-left, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    pub center: [f32; 2],
    pub radius: f32,
    pub tip: [f32; 2],
}

impl ArrowGeometry {
    /// Places the circle in the middle of a `canvas_size` surface and points
    /// the arrow along `(x, -z)`; `y` is not drawn.
    pub fn from_state(state: &QuantumState, canvas_size: [f32; 2]) -> Self {
        Self::with_dimensions(state, canvas_size, CIRCLE_RADIUS, ARROW_LENGTH)
    }

    pub fn with_dimensions(state: &QuantumState, canvas_size: [f32; 2], radius: f32, arrow_length: f32) -> Self {
        let center = [canvas_size[0] / 2.0, canvas_size[1] / 2.0];
        let tip = [
            center[0] + arrow_length * state.x as f32,
            center[1] - arrow_length * state.z as f32,
        ];
        Self { center, radius, tip }
    }

    /// Arrow as an offset from the center.
    pub fn direction(&self) -> [f32; 2] {
        [self.tip[0] - self.center[0], self.tip[1] - self.center[1]]
    }
}
