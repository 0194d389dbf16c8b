// src/color.rs

//! RGB colors in normalized channel space, HSL conversion, hex encoding and
//! the per-channel tween step.

use crate::core::ClockError;
use std::fmt;
use std::str::FromStr;

/// An RGB color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from hue (degrees, any value; taken modulo 360),
    /// saturation and lightness (both in `[0, 1]`).
    pub fn from_hsl(hue_degrees: f64, saturation: f64, lightness: f64) -> Self {
        if saturation == 0.0 {
            return Self::new(lightness, lightness, lightness);
        }
        let h = (hue_degrees / 360.0).rem_euclid(1.0);
        let m2 = if lightness <= 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let m1 = 2.0 * lightness - m2;
        Self::new(
            hue_to_channel(m1, m2, h + 1.0 / 3.0),
            hue_to_channel(m1, m2, h),
            hue_to_channel(m1, m2, h - 1.0 / 3.0),
        )
    }

    /// Returns `(hue_degrees, saturation, lightness)`, hue in `[0, 360)`.
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let max_c = self.r.max(self.g).max(self.b);
        let min_c = self.r.min(self.g).min(self.b);
        let sum_c = max_c + min_c;
        let range_c = max_c - min_c;
        let lightness = sum_c / 2.0;
        if range_c == 0.0 {
            return (0.0, 0.0, lightness);
        }
        let saturation = if lightness <= 0.5 {
            range_c / sum_c
        } else {
            range_c / (2.0 - sum_c)
        };
        let rc = (max_c - self.r) / range_c;
        let gc = (max_c - self.g) / range_c;
        let bc = (max_c - self.b) / range_c;
        let h = if self.r == max_c {
            bc - gc
        } else if self.g == max_c {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        ((h / 6.0).rem_euclid(1.0) * 360.0, saturation, lightness)
    }

    /// 8-bit channels, truncating (`floor(v * 255)`) after clamping to `[0, 1]`.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|v| (v.clamp(0.0, 1.0) * 255.0) as u8)
    }

    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb.map(|v| f64::from(v) / 255.0);
        Self::new(r, g, b)
    }

    /// `#rrggbb` encoding.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Decodes `#rrggbb` (leading `#` optional).
    pub fn from_hex(input: &str) -> Result<Self, ClockError> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        let invalid = |message: &str| ClockError::InvalidColor {
            input: input.to_string(),
            message: message.to_string(),
        };
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid("expected 6 hex digits"));
        }
        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| invalid("non-hexadecimal digit"))?;
        }
        Ok(Self::from_rgb8(channels))
    }

    /// One tween step: every channel moves `step` toward `target` without
    /// passing it.
    pub fn step_toward(&self, target: &Rgb, step: f64) -> Rgb {
        Rgb::new(
            step_channel(self.r, target.r, step),
            step_channel(self.g, target.g, step),
            step_channel(self.b, target.b, step),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

/// Moves `current` by `step` toward `target`, clamped at `target`.
pub fn step_channel(current: f64, target: f64, step: f64) -> f64 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}
