//! Named colors and perceptual distance between them.
//!
//! A [`Color`] pairs a free-form name with the hex string it was built from.
//! The hex string is parsed exactly once, at construction; the derived
//! components can never drift from it because the type has no mutators.
//!
//! Two distance metrics are available:
//!
//! - [`Color::weighted_distance`]: squared RGB differences weighted
//!   0.3 / 0.59 / 0.11 for human luminance sensitivity. This is a *squared*
//!   metric and is never square-rooted.
//! - [`Color::distance_cielab`]: Euclidean distance (CIE76 ΔE) in CIELAB.
//!
//! # Examples
//!
//! ```
//! use color_distance::Color;
//!
//! let black = Color::new("black", "#000000").unwrap();
//!
//! assert_eq!(black.weighted_distance("#FFFFFF").unwrap(), 65025.0);
//! assert!((black.distance_cielab("#FFFFFF").unwrap() - 100.0).abs() < 1e-3);
//!
//! // Malformed input is reported, never silently accepted.
//! assert!(black.weighted_distance("#FFF").is_err());
//! ```

use std::fmt;

use crate::error::InvalidColorFormat;
use crate::hex::parse_hex_cached;
use crate::lab::{Lab, rgb_to_lab};
use crate::metric::DistanceMetric;
use crate::rgb::Rgb;

/// A named color built from a 6-digit hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    name: String,
    hex: String,
    rgb: Rgb,
}

impl Color {
    /// Create a color from a name and a hex string such as `#ff8800` or `FF8800`.
    ///
    /// The hex string is stored verbatim; its components are parsed once here.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if `hex` is not an optional `#` followed
    /// by exactly six hex digits.
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Result<Self, InvalidColorFormat> {
        let hex = hex.into();
        let rgb = parse_hex_cached(&hex)?;
        Ok(Self {
            name: name.into(),
            hex,
            rgb,
        })
    }

    /// The label this color was created with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hex string exactly as it was provided.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Red component, 0-255.
    #[must_use]
    pub const fn r(&self) -> u8 {
        self.rgb.red
    }

    /// Green component, 0-255.
    #[must_use]
    pub const fn g(&self) -> u8 {
        self.rgb.green
    }

    /// Blue component, 0-255.
    #[must_use]
    pub const fn b(&self) -> u8 {
        self.rgb.blue
    }

    /// The parsed components as a triplet.
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// This color in CIELAB.
    #[must_use]
    pub fn lab(&self) -> Lab {
        rgb_to_lab(self.rgb)
    }

    /// Weighted squared RGB distance to the color described by `other_hex`.
    ///
    /// Returns `0.3*dr² + 0.59*dg² + 0.11*db²`. The result is not
    /// square-rooted, so black to white is `65025.0`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if `other_hex` is malformed.
    pub fn weighted_distance(&self, other_hex: &str) -> Result<f64, InvalidColorFormat> {
        let other = parse_hex_cached(other_hex)?;
        let distance = self.rgb.weighted_distance(&other);
        log::trace!("weighted distance {} -> {other_hex}: {distance}", self.hex);
        Ok(distance)
    }

    /// Euclidean distance in CIELAB to the color described by `other_hex`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if `other_hex` is malformed.
    pub fn distance_cielab(&self, other_hex: &str) -> Result<f64, InvalidColorFormat> {
        let other = parse_hex_cached(other_hex)?;
        let distance = self.lab().distance(&rgb_to_lab(other));
        log::trace!("CIELAB distance {} -> {other_hex}: {distance}", self.hex);
        Ok(distance)
    }

    /// Distance to `other_hex` using the selected metric.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidColorFormat`] if `other_hex` is malformed.
    pub fn distance(&self, metric: DistanceMetric, other_hex: &str) -> Result<f64, InvalidColorFormat> {
        match metric {
            DistanceMetric::Weighted => self.weighted_distance(other_hex),
            DistanceMetric::Cielab => self.distance_cielab(other_hex),
        }
    }

    /// [`Color::weighted_distance`] against an already-parsed color.
    #[must_use]
    pub fn weighted_distance_to(&self, other: &Self) -> f64 {
        self.rgb.weighted_distance(&other.rgb)
    }

    /// [`Color::distance_cielab`] against an already-parsed color.
    #[must_use]
    pub fn distance_cielab_to(&self, other: &Self) -> f64 {
        self.lab().distance(&other.lab())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.hex)
    }
}

/// Builds a color whose name is the hex string itself.
impl TryFrom<&str> for Color {
    type Error = InvalidColorFormat;

    fn try_from(hex: &str) -> Result<Self, Self::Error> {
        Self::new(hex, hex)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColorFormat;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Self::new(hex.clone(), hex)
    }
}
