use crate::error::{CustmapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance units for rendering and radius arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    /// Convert a distance value to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            DistanceUnit::Kilometers => value * 1000.0,
            DistanceUnit::Miles => value * 1609.34,
            DistanceUnit::Feet => value * 0.3048,
        }
    }

    /// Convert a distance value from meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Meters => meters,
            DistanceUnit::Kilometers => meters / 1000.0,
            DistanceUnit::Miles => meters / 1609.34,
            DistanceUnit::Feet => meters / 0.3048,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Feet => "ft",
        }
    }

    /// Parse a unit name or symbol, case-insensitively
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "meters" | "m" => Ok(DistanceUnit::Meters),
            "kilometers" | "km" => Ok(DistanceUnit::Kilometers),
            "miles" | "mi" => Ok(DistanceUnit::Miles),
            "feet" | "ft" => Ok(DistanceUnit::Feet),
            _ => Err(CustmapError::ConfigInvalid {
                key: "distance_unit".to_string(),
                reason: format!(
                    "Invalid distance unit: {}. Use meters, kilometers, miles, or feet",
                    s
                ),
            }),
        }
    }
}

/// Distance with unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    pub fn kilometers(value: f64) -> Self {
        Self::new(value, DistanceUnit::Kilometers)
    }

    /// Convert to meters
    pub fn to_meters(&self) -> f64 {
        self.unit.to_meters(self.value)
    }

    /// Express a meter value in `unit`
    pub fn from_meters(meters: f64, unit: DistanceUnit) -> Self {
        Self::new(unit.from_meters(meters), unit)
    }

    /// Parse strings such as `"500m"`, `"2km"`, `"1.5 mi"`, `"1e3m"` or a
    /// bare number (meters).
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (number, unit) = trimmed.split_at(unit_start(trimmed));

        let value: f64 = number.trim().parse().map_err(|_| CustmapError::ConfigInvalid {
            key: "distance".to_string(),
            reason: format!("Invalid distance: {}. Expected a number with optional unit", s),
        })?;

        let unit = if unit.is_empty() {
            DistanceUnit::Meters
        } else {
            DistanceUnit::parse(unit)?
        };

        Ok(Self::new(value, unit))
    }
}

/// Byte offset where the unit suffix begins. An `e`/`E` between a digit and
/// an exponent belongs to the number.
fn unit_start(s: &str) -> usize {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_alphabetic() {
            continue;
        }
        let after_digit = i > 0 && (bytes[i - 1].is_ascii_digit() || bytes[i - 1] == b'.');
        let exponent_follows = match bytes.get(i + 1) {
            Some(b'+' | b'-') => bytes.get(i + 2).is_some_and(|n| n.is_ascii_digit()),
            Some(n) => n.is_ascii_digit(),
            None => false,
        };
        if !(matches!(b, b'e' | b'E') && after_digit && exponent_follows) {
            return i;
        }
    }
    s.len()
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit.symbol())
    }
}
