//! sRGB to CIELAB conversion.
//!
//! The pipeline runs in four stages:
//!
//! ```text
//! Rgb (0-255)
//!     |  divide by 255
//!     v
//! sRGB (0.0-1.0)
//!     |  inverse sRGB gamma
//!     v
//! linear RGB
//!     |  sRGB/D65 matrix, scaled to 0-100
//!     v
//! Xyz
//!     |  normalize by D65 white, f(t)
//!     v
//! Lab
//! ```
//!
//! All constants are the CIE standard observer and D65 illuminant values and
//! must not be rounded.

#![allow(clippy::unreadable_literal, clippy::excessive_precision)]

use crate::rgb::Rgb;

/// Linear RGB to CIEXYZ matrix for sRGB primaries with a D65 white point.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// D65 reference white on the 0-100 scale.
pub const D65_WHITE: Xyz = Xyz {
    x: 95.0489,
    y: 100.0,
    z: 108.884,
};

/// (6/29)^3: below this, f(t) switches to its linear segment.
const LAB_EPSILON: f64 = 0.008856451679035631;
/// (29/6)^2 / 3
const LAB_SLOPE: f64 = 7.787037037037037;
/// 4/29
const LAB_OFFSET: f64 = 0.13793103448275862;

/// A color in CIEXYZ, on the 0-100 scale of [`D65_WHITE`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A color in CIELAB (L\*a\*b\*).
///
/// - `l`: lightness, 0 (black) to 100 (white)
/// - `a`: green (negative) to red (positive)
/// - `b`: blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in CIELAB space (CIE76 ΔE).
    ///
    /// ```
    /// use color_distance::Lab;
    ///
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// assert_eq!(black.distance(&white), 100.0);
    /// ```
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = (self.l - other.l).powi(2);
        let da = (self.a - other.a).powi(2);
        let db = (self.b - other.b).powi(2);
        (dl + da + db).sqrt()
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        rgb_to_lab(rgb)
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        xyz_to_lab(xyz)
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        rgb_to_xyz(rgb)
    }
}

/// Inverse sRGB transfer function for a channel value in 0.0-1.0.
#[must_use]
pub fn linearize(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an 8-bit sRGB triplet to CIEXYZ.
#[must_use]
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let (r, g, b) = rgb.normalized();
    let linear = [linearize(r), linearize(g), linearize(b)];

    let row = |m: [f64; 3]| 100.0 * (m[0] * linear[0] + m[1] * linear[1] + m[2] * linear[2]);

    Xyz::new(
        row(SRGB_TO_XYZ[0]),
        row(SRGB_TO_XYZ[1]),
        row(SRGB_TO_XYZ[2]),
    )
}

/// Convert CIEXYZ to CIELAB relative to [`D65_WHITE`].
#[must_use]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let f = |t: f64| {
        if t > LAB_EPSILON {
            t.cbrt()
        } else {
            LAB_SLOPE * t + LAB_OFFSET
        }
    };

    let fx = f(xyz.x / D65_WHITE.x);
    let fy = f(xyz.y / D65_WHITE.y);
    let fz = f(xyz.z / D65_WHITE.z);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert an 8-bit sRGB triplet straight to CIELAB.
#[must_use]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}
