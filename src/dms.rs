//! Decimal-degree to degrees/minutes/seconds (DMS) formatting.

use std::str::FromStr;

use crate::errors::{GeorefError, Result};

/// Seconds precision used when the caller does not specify one.
pub const DEFAULT_DMS_PRECISION: usize = 2;

/// Which geographic axis an angle lies on, determining the hemisphere
/// letter appended to its DMS rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleAxis {
    Lat,
    Long,
}

impl AngleAxis {
    /// Hemisphere letter for an angle on this axis: `N`/`S` for latitude,
    /// `E`/`W` for longitude. Zero maps to the positive hemisphere.
    pub fn hemisphere(&self, angle: f64) -> char {
        match self {
            AngleAxis::Lat => {
                if angle < 0.0 {
                    'S'
                } else {
                    'N'
                }
            }
            AngleAxis::Long => {
                if angle < 0.0 {
                    'W'
                } else {
                    'E'
                }
            }
        }
    }
}

impl FromStr for AngleAxis {
    type Err = GeorefError;

    /// Parses the axis tokens accepted at the call surface: any casing of
    /// `lat` or `long`. Normalization capitalizes the first letter and
    /// lowercases the rest; the full words `latitude`/`longitude` are not
    /// accepted.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let normalized = match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_lowercase(),
            None => String::new(),
        };
        match normalized.as_str() {
            "Lat" => Ok(AngleAxis::Lat),
            "Long" => Ok(AngleAxis::Long),
            _ => Err(GeorefError::BadArgument(
                "Axis must be 'lat' or 'long'".to_string(),
            )),
        }
    }
}

/// Convert a decimal-degree angle to a DMS string such as `45d30'15.00"N`.
///
/// The seconds field is rounded to `precision` fractional digits; when
/// rounding pushes it to 60 the excess carries into minutes, and from
/// minutes into degrees.
///
/// Fails with [`GeorefError::BadArgument`] for non-finite angles.
///
/// # Example
///
/// ```rust
/// use georef::{dec_to_dms, AngleAxis};
/// let s = dec_to_dms(-122.419, AngleAxis::Long, 2).unwrap();
/// assert_eq!(s, "122d25'8.40\"W");
/// ```
pub fn dec_to_dms(angle: f64, axis: AngleAxis, precision: usize) -> Result<String> {
    if !angle.is_finite() {
        return Err(GeorefError::BadArgument(format!(
            "Angle must be finite, got {angle}"
        )));
    }
    let hemisphere = axis.hemisphere(angle);

    let abs_angle = angle.abs();
    let mut degrees = abs_angle.floor() as u64;
    let minutes_full = (abs_angle - degrees as f64) * 60.0;
    let mut minutes = minutes_full.floor() as u32;

    let scale = 10f64.powi(precision as i32);
    let mut seconds = ((minutes_full - minutes as f64) * 60.0 * scale).round() / scale;
    if seconds >= 60.0 {
        seconds = 0.0;
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            degrees += 1;
        }
    }

    Ok(format!(
        "{degrees}d{minutes}'{seconds:.precision$}\"{hemisphere}"
    ))
}
