//! Fixed parameters of the clock. There is no runtime configuration beyond
//! `RUST_LOG`; everything tunable lives here.

/// Timing, color and simulation constants.
pub mod clock_constants {
    use std::time::Duration;

    /// Period of the clock / quantum-state tick.
    pub const CLOCK_TICK_PERIOD: Duration = Duration::from_millis(1000);
    /// Period of the color tween tick.
    pub const COLOR_TICK_PERIOD: Duration = Duration::from_millis(50);
    /// Per-channel movement per color tick, in normalized [0,1] channel space.
    pub const COLOR_TRANSITION_STEP: f64 = 0.01;
    /// Wall-clock seconds are multiplied by this to get the circuit parameter `t`.
    pub const TIME_SCALE: f64 = 0.1;
    /// Standard deviation of the Gaussian noise added to each probability.
    pub const NOISE_STD_DEV: f64 = 0.1;
    /// Saturation of generated colors.
    pub const SATURATION: f64 = 1.0;
    /// Lightness of generated colors.
    pub const LIGHTNESS: f64 = 0.5;
}

/// Window and drawing constants.
pub mod display_constants {
    pub const WINDOW_TITLE: &str = "Chromatic Quantum Zones Clock";
    pub const WINDOW_SIZE: [f32; 2] = [600.0, 400.0];
    pub const CANVAS_SIZE: [f32; 2] = [600.0, 200.0];
    pub const CIRCLE_RADIUS: f32 = 80.0;
    pub const ARROW_LENGTH: f32 = 70.0;
    pub const CIRCLE_STROKE_WIDTH: f32 = 1.0;
    pub const ARROW_STROKE_WIDTH: f32 = 3.0;
    pub const ZONE_FONT_SIZE: f32 = 14.0;
    pub const CLOCK_FONT_SIZE: f32 = 24.0;
}
