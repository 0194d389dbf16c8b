// src/zones.rs

//! Named time-of-day zones and the hour -> zone lookup.

use crate::core::ClockError;
use std::fmt;

/// A named interval of the day, `[start_hour, end_hour)`.
/// `end_hour == None` marks the open-ended last zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: String,
    start_hour: u8,
    end_hour: Option<u8>,
}

impl Zone {
    pub fn new(name: impl Into<String>, start_hour: u8, end_hour: Option<u8>) -> Self {
        Self { name: name.into(), start_hour, end_hour }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> Option<u8> {
        self.end_hour
    }

    /// `hour >= start` and (`end` absent or `hour < end`).
    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.start_hour && self.end_hour.is_none_or(|end| hour < end)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_hour {
            Some(end) => write!(f, "{} [{:02}:00, {:02}:00)", self.name, self.start_hour, end),
            None => write!(f, "{} [{:02}:00, ...)", self.name, self.start_hour),
        }
    }
}

/// Ordered list of zones covering the whole day.
///
/// Zones are contiguous and ascending; the last one has no upper bound and
/// also absorbs the hours before the first zone starts, so every hour in
/// `[0, 24)` resolves to exactly one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTable {
    zones: Vec<Zone>,
}

impl ZoneTable {
    /// Validates and builds a table.
    pub fn new(zones: Vec<Zone>) -> Result<Self, ClockError> {
        let invalid = |message: String| ClockError::InvalidZoneTable { message };

        let (last, bounded) = zones
            .split_last()
            .ok_or_else(|| invalid("zone table must contain at least one zone".to_string()))?;

        if last.end_hour.is_some() {
            return Err(invalid(format!("last zone '{}' must be open-ended", last.name)));
        }

        for (i, zone) in zones.iter().enumerate() {
            if zone.start_hour >= 24 {
                return Err(invalid(format!("zone '{}' starts at hour {} (must be < 24)", zone.name, zone.start_hour)));
            }
            if i + 1 < zones.len() {
                let next = &zones[i + 1];
                match zone.end_hour {
                    None => {
                        return Err(invalid(format!("only the last zone may be open-ended, '{}' is not last", zone.name)));
                    }
                    Some(end) if end <= zone.start_hour => {
                        return Err(invalid(format!("zone '{}' ends before it starts", zone.name)));
                    }
                    Some(end) if end != next.start_hour => {
                        return Err(invalid(format!(
                            "zone '{}' ends at {} but '{}' starts at {}",
                            zone.name, end, next.name, next.start_hour
                        )));
                    }
                    Some(_) => {}
                }
            }
        }

        log::trace!("zone table accepted with {} bounded zones", bounded.len());
        Ok(Self { zones })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Zone for a wall-clock hour. First match in table order wins; hours
    /// matching nothing fall through to the open-ended last zone.
    pub fn resolve(&self, hour: u8) -> &Zone {
        let hour = hour % 24;
        self.zones
            .iter()
            .find(|zone| zone.contains(hour))
            .unwrap_or_else(|| self.open_zone())
    }

    /// Name of the zone for `hour`.
    pub fn zone_name(&self, hour: u8) -> &str {
        self.resolve(hour).name()
    }

    fn open_zone(&self) -> &Zone {
        // Non-empty by construction
        &self.zones[self.zones.len() - 1]
    }
}

impl Default for ZoneTable {
    /// Morning 06-12, Afternoon 12-18, Evening 18-21, Night 21 onwards.
    fn default() -> Self {
        Self {
            zones: vec![
                Zone::new("Morning", 6, Some(12)),
                Zone::new("Afternoon", 12, Some(18)),
                Zone::new("Evening", 18, Some(21)),
                Zone::new("Night", 21, None),
            ],
        }
    }
}
