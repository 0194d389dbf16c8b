// src/lib.rs

//! `chroma_clock` - a desktop clock whose color is driven by a simulated qubit
//!
//! Once per second the current hour is bucketed into a named zone and a fixed
//! two-qubit circuit (`RX(t)`, `RY(t/2)`, `CNOT`) is simulated; the noisy
//! probability of reading `|0>` on the first qubit becomes the hue of the
//! target color. Twenty times per second the displayed color takes one
//! bounded step toward that target.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;
pub mod zones;
pub mod color;
pub mod hue;
pub mod render;
pub mod schedule;
pub mod clock;
pub mod ui;

// Re-export the most common types for easier top-level use
pub use core::{ClockError, QuantumState, QubitId, StateVector};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{SimulationResult, Simulator};
pub use validation::{check_distribution, check_normalization};
pub use zones::{Zone, ZoneTable};
pub use color::Rgb;
pub use hue::{HueSample, QuantumHueGenerator};
pub use render::ArrowGeometry;
pub use schedule::PeriodicTask;
pub use clock::{ClockReading, ClockState};
pub use ui::ChromaticClockApp;

// Example: one hue evaluation
// Runs the fixed circuit at t = 0 without noise: the first qubit stays in |0>,
// so P(0) = 1 and the hue wraps to 0 degrees (red).
/// ```
/// use chroma_clock::{QuantumHueGenerator, ClockError};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let generator = QuantumHueGenerator::with_noise(0.0)?;
/// let mut rng = StdRng::seed_from_u64(0);
/// let sample = generator.sample(0.0, &mut rng)?;
///
/// assert!((sample.raw[0] - 1.0).abs() < 1e-12);
/// assert_eq!(sample.hue_degrees, 0.0);
/// assert_eq!(sample.color.to_hex(), "#ff0000");
/// # Ok::<(), ClockError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
