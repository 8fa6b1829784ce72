//! Distance metric selection and nearest-color lookup.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::InvalidColorFormat;
use crate::hex::parse_hex_cached;
use crate::lab::rgb_to_lab;

/// Which distance [`Color::distance`] computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceMetric {
    /// Weighted squared RGB distance ([`Color::weighted_distance`]).
    Weighted,
    /// Euclidean CIELAB distance ([`Color::distance_cielab`]).
    #[default]
    Cielab,
}

impl DistanceMetric {
    /// Get the name of this metric.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Weighted => "weighted",
            Self::Cielab => "cielab",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weighted" => Ok(Self::Weighted),
            "cielab" => Ok(Self::Cielab),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

/// Error returned when a metric name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMetricError(String);

impl ParseMetricError {
    /// The rejected metric name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown distance metric: {}", self.0)
    }
}

impl std::error::Error for ParseMetricError {}

/// Find the candidate closest to `hex` under `metric`.
///
/// The target is parsed once. Ties go to the earliest candidate. An empty
/// slice yields `Ok(None)`.
///
/// ```
/// use color_distance::{Color, DistanceMetric, nearest};
///
/// let candidates = [
///     Color::new("red", "#FF0000").unwrap(),
///     Color::new("blue", "#0000FF").unwrap(),
/// ];
/// let hit = nearest(&candidates, "#E01010", DistanceMetric::Cielab).unwrap();
/// assert_eq!(hit.map(Color::name), Some("red"));
/// ```
///
/// # Errors
///
/// Returns [`InvalidColorFormat`] if `hex` is malformed, even when
/// `candidates` is empty.
pub fn nearest<'a>(
    candidates: &'a [Color],
    hex: &str,
    metric: DistanceMetric,
) -> Result<Option<&'a Color>, InvalidColorFormat> {
    let target = parse_hex_cached(hex)?;
    let target_lab = rgb_to_lab(target);

    let mut best: Option<(&Color, f64)> = None;
    for candidate in candidates {
        let distance = match metric {
            DistanceMetric::Weighted => candidate.rgb().weighted_distance(&target),
            DistanceMetric::Cielab => candidate.lab().distance(&target_lab),
        };
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((candidate, distance));
        }
    }

    if let Some((color, distance)) = best {
        log::debug!("nearest {metric} match for {hex}: {color} at {distance}");
    }

    Ok(best.map(|(color, _)| color))
}
