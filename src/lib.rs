//! # color_distance
//!
//! Perceptual distance between colors given as 6-digit hex strings.
//!
//! ## Quick Start
//!
//! ```rust
//! use color_distance::prelude::*;
//!
//! let navy = Color::new("navy", "#000080").unwrap();
//!
//! let weighted = navy.weighted_distance("#0000FF").unwrap();
//! let delta_e = navy.distance_cielab("#0000FF").unwrap();
//! assert!(weighted > 0.0 && delta_e > 0.0);
//! ```
//!
//! ## Core Concepts
//!
//! - **Color**: A named, immutable color parsed once from its hex string
//! - **Rgb**: The 8-bit red/green/blue triplet behind every color
//! - **Lab**: CIELAB coordinates, reached through linear RGB and CIEXYZ
//! - **DistanceMetric**: Weighted squared RGB distance or CIELAB ΔE
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade. Install any `log` backend, or
//! [`logging::ColorLogger`], to see them.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod error;
pub mod hex;
pub mod lab;
pub mod logging;
pub mod metric;
pub mod rgb;
pub mod sync;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::InvalidColorFormat;
    pub use crate::lab::{Lab, Xyz};
    pub use crate::metric::{DistanceMetric, nearest};
    pub use crate::rgb::Rgb;
}

// Re-export key types at crate root
pub use color::Color;
pub use error::InvalidColorFormat;
pub use hex::parse_hex;
pub use lab::{Lab, Xyz};
pub use metric::{DistanceMetric, ParseMetricError, nearest};
pub use rgb::Rgb;
