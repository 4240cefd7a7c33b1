//! Coordinate validity checks and display formatting.

/// Values that may be read as a decimal degree.
///
/// Customer records arrive as numbers, numeric strings or raw JSON, so the
/// validity check accepts any of them and treats anything unreadable as
/// invalid instead of failing.
pub trait AsDegrees {
    fn as_degrees(&self) -> Option<f64>;
}

impl AsDegrees for f64 {
    fn as_degrees(&self) -> Option<f64> {
        Some(*self)
    }
}

impl AsDegrees for f32 {
    fn as_degrees(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsDegrees for i32 {
    fn as_degrees(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl AsDegrees for i64 {
    fn as_degrees(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl AsDegrees for str {
    fn as_degrees(&self) -> Option<f64> {
        self.trim().parse().ok()
    }
}

impl AsDegrees for String {
    fn as_degrees(&self) -> Option<f64> {
        self.as_str().as_degrees()
    }
}

impl AsDegrees for serde_json::Value {
    fn as_degrees(&self) -> Option<f64> {
        match self {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.as_degrees(),
            _ => None,
        }
    }
}

impl<T: AsDegrees> AsDegrees for Option<T> {
    fn as_degrees(&self) -> Option<f64> {
        self.as_ref().and_then(AsDegrees::as_degrees)
    }
}

impl<T: AsDegrees + ?Sized> AsDegrees for &T {
    fn as_degrees(&self) -> Option<f64> {
        (**self).as_degrees()
    }
}

/// Check whether a latitude/longitude pair is a usable WGS 84 position.
///
/// Both values must read as finite numbers with latitude in [-90, 90] and
/// longitude in [-180, 180]. Unreadable input is reported as invalid.
pub fn is_valid_coordinate(latitude: impl AsDegrees, longitude: impl AsDegrees) -> bool {
    match (latitude.as_degrees(), longitude.as_degrees()) {
        (Some(lat), Some(lng)) => {
            lat.is_finite()
                && lng.is_finite()
                && (-90.0..=90.0).contains(&lat)
                && (-180.0..=180.0).contains(&lng)
        }
        _ => false,
    }
}

/// Render a position as `"8.506900° S, 115.262500° E"`.
///
/// Performs no range validation.
pub fn format_coordinate(latitude: f64, longitude: f64) -> String {
    let lat_hemisphere = if latitude >= 0.0 { 'N' } else { 'S' };
    let lng_hemisphere = if longitude >= 0.0 { 'E' } else { 'W' };

    format!(
        "{:.6}° {}, {:.6}° {}",
        latitude.abs(),
        lat_hemisphere,
        longitude.abs(),
        lng_hemisphere
    )
}
