// src/hue.rs

//! Derives the target hue from a small simulated circuit.
//!
//! Per clock tick, for time parameter `t`:
//! 1. simulate `RX(t)` then `RY(t/2)` on qubit 0 and a CNOT onto qubit 1,
//! 2. read out `[P(0), P(1)]` on qubit 0,
//! 3. add independent Gaussian noise to each value and clamp to `[0, 1]`
//!    (no renormalization),
//! 4. map the noisy `P(0)` linearly onto a hue and build a full-saturation,
//!    half-lightness color.

use crate::circuits::{Circuit, CircuitBuilder};
use crate::color::Rgb;
use crate::core::clock_constants::{LIGHTNESS, NOISE_STD_DEV, SATURATION, TIME_SCALE};
use crate::core::{ClockError, QuantumState, QubitId};
use crate::operations::Operation;
use crate::simulation::Simulator;
use crate::validation::check_distribution;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Scales wall-clock seconds into the circuit parameter `t`.
pub fn time_parameter(unix_seconds: f64) -> f64 {
    unix_seconds * TIME_SCALE
}

/// Linear map of a probability in `[0, 1]` onto a hue in `[0, 360)`.
/// `1.0` wraps around to `0.0` (both are red).
pub fn hue_from_probability(p: f64) -> f64 {
    (p.clamp(0.0, 1.0) * 360.0).rem_euclid(360.0)
}

/// Everything one hue evaluation produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueSample {
    /// Circuit parameter.
    pub t: f64,
    /// Exact read-out on qubit 0.
    pub raw: [f64; 2],
    /// Read-out after noise and clamping; need not sum to 1.
    pub noisy: [f64; 2],
    pub hue_degrees: f64,
    pub color: Rgb,
    /// Decorative orientation `[cos t, 0, sin t]` for the arrow.
    pub orientation: QuantumState,
}

pub struct QuantumHueGenerator {
    simulator: Simulator,
    noise: Normal<f64>,
    measured: QubitId,
    partner: QubitId,
}

impl QuantumHueGenerator {
    /// Generator with the standard noise level.
    pub fn new() -> Result<Self, ClockError> {
        Self::with_noise(NOISE_STD_DEV)
    }

    /// Generator with a custom noise standard deviation (`0.0` disables noise).
    pub fn with_noise(std_dev: f64) -> Result<Self, ClockError> {
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(ClockError::InvalidNoise {
                message: format!("standard deviation must be finite and non-negative, got {}", std_dev),
            });
        }
        let noise = Normal::new(0.0, std_dev).map_err(|e| ClockError::InvalidNoise {
            message: format!("standard deviation {}: {}", std_dev, e),
        })?;
        Ok(Self {
            simulator: Simulator::new(),
            noise,
            measured: QubitId(0),
            partner: QubitId(1),
        })
    }

    /// The fixed gate sequence for parameter `t`.
    pub fn circuit(&self, t: f64) -> Circuit {
        CircuitBuilder::new()
            .add_op(Operation::RotateX { target: self.measured, theta: t })
            .add_op(Operation::RotateY { target: self.measured, theta: 0.5 * t })
            .add_op(Operation::ControlledNot { control: self.measured, target: self.partner })
            .build()
    }

    /// Noise-free `[P(0), P(1)]` of qubit 0 after the circuit.
    pub fn probabilities(&self, t: f64) -> Result<[f64; 2], ClockError> {
        let result = self.simulator.run(&self.circuit(t))?;
        let probs = result.probabilities(&self.measured)?;
        check_distribution(&probs, None)?;
        Ok(probs)
    }

    /// Runs the full pipeline for `t`, drawing noise from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, t: f64, rng: &mut R) -> Result<HueSample, ClockError> {
        let raw = self.probabilities(t)?;
        let noisy = raw.map(|p| (p + self.noise.sample(rng)).clamp(0.0, 1.0));
        let hue_degrees = hue_from_probability(noisy[0]);
        let color = Rgb::from_hsl(hue_degrees, SATURATION, LIGHTNESS);

        Ok(HueSample {
            t,
            raw,
            noisy,
            hue_degrees,
            color,
            orientation: QuantumState::from_time(t),
        })
    }
}
