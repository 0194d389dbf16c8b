// src/clock.rs

//! Application state shared by the two tick handlers.
//!
//! The clock tick (1 Hz) writes the clock text, the zone and the target
//! color; the color tick (20 Hz) moves the displayed color one step toward
//! that target. Nothing else mutates the state.

use crate::color::Rgb;
use crate::core::clock_constants::{COLOR_TRANSITION_STEP, LIGHTNESS, SATURATION};
use crate::core::{ClockError, QuantumState};
use crate::hue::{HueSample, QuantumHueGenerator, time_parameter};
use crate::zones::ZoneTable;
use chrono::{DateTime, TimeZone, Timelike};
use rand::Rng;

/// Text shown by the two labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockReading {
    /// `HH:MM:SS`
    pub time_text: String,
    pub zone: String,
}

impl ClockReading {
    pub fn zone_label(&self) -> String {
        format!("Current Zone: {}", self.zone)
    }
}

pub struct ClockState {
    zones: ZoneTable,
    generator: QuantumHueGenerator,
    display_color: Rgb,
    target_color: Rgb,
    quantum_state: QuantumState,
    step: f64,
    reading: ClockReading,
    last_sample: Option<HueSample>,
}

impl ClockState {
    /// Default zones and noise, starting from a random hue.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, ClockError> {
        let initial_hue = rng.random::<f64>() * 360.0;
        let initial = Rgb::from_hsl(initial_hue, SATURATION, LIGHTNESS);
        log::debug!("initial color {} (hue {:.1})", initial, initial_hue);
        Ok(Self::with_parts(ZoneTable::default(), QuantumHueGenerator::new()?, initial))
    }

    /// Explicit construction; display and target both start at `initial_color`.
    pub fn with_parts(zones: ZoneTable, generator: QuantumHueGenerator, initial_color: Rgb) -> Self {
        Self {
            zones,
            generator,
            display_color: initial_color,
            target_color: initial_color,
            quantum_state: QuantumState::default(),
            step: COLOR_TRANSITION_STEP,
            reading: ClockReading::default(),
            last_sample: None,
        }
    }

    /// The 1 Hz update: refresh the clock text and zone, then evaluate the
    /// circuit for `now` to set a new target color and orientation.
    ///
    /// The labels are updated even if the circuit evaluation fails; in that
    /// case the previous target and orientation are kept.
    pub fn clock_tick<Tz: TimeZone, R: Rng + ?Sized>(
        &mut self,
        now: &DateTime<Tz>,
        rng: &mut R,
    ) -> Result<HueSample, ClockError> {
        let hour = now.hour() as u8;
        self.reading = ClockReading {
            time_text: format!("{:02}:{:02}:{:02}", hour, now.minute(), now.second()),
            zone: self.zones.zone_name(hour).to_string(),
        };

        let unix_seconds = now.timestamp_micros() as f64 / 1_000_000.0;
        let sample = self.generator.sample(time_parameter(unix_seconds), rng)?;

        self.target_color = sample.color;
        self.quantum_state = sample.orientation;
        self.last_sample = Some(sample);

        log::debug!(
            "{} {} t={:.3} p={:.3?} noisy={:.3?} hue={:.1} target={}",
            self.reading.time_text,
            self.reading.zone,
            sample.t,
            sample.raw,
            sample.noisy,
            sample.hue_degrees,
            sample.color
        );
        Ok(sample)
    }

    /// The 20 Hz update: one tween step of the displayed color.
    pub fn color_tick(&mut self) -> Rgb {
        self.display_color = self.display_color.step_toward(&self.target_color, self.step);
        self.display_color
    }

    pub fn reading(&self) -> &ClockReading {
        &self.reading
    }

    pub fn display_color(&self) -> Rgb {
        self.display_color
    }

    pub fn target_color(&self) -> Rgb {
        self.target_color
    }

    pub fn quantum_state(&self) -> QuantumState {
        self.quantum_state
    }

    pub fn last_sample(&self) -> Option<&HueSample> {
        self.last_sample.as_ref()
    }

    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }
}
