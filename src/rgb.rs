//! 8-bit RGB triplets.

use std::fmt;

/// RGB color triplet with values 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    /// Create a new triplet from RGB components.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns CSS-style hex format `#rrggbb`.
    #[must_use]
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Returns normalized RGB as floats in range 0.0-1.0.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }

    /// Human-perception weighted squared distance to another triplet.
    ///
    /// Squared channel differences are weighted 0.3 / 0.59 / 0.11 and summed.
    /// The result is not square-rooted.
    #[must_use]
    pub fn weighted_distance(&self, other: &Self) -> f64 {
        let square = |a: u8, b: u8| {
            let diff = u32::from(a.abs_diff(b));
            f64::from(diff * diff)
        };

        let dr = square(self.red, other.red);
        let dg = square(self.green, other.green);
        let db = square(self.blue, other.blue);

        0.3 * dr + 0.59 * dg + 0.11 * db
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(255, 0, 10).hex(), "#ff000a");
        assert_eq!(Rgb::default().hex(), "#000000");
    }

    #[test]
    fn test_normalized_bounds() {
        assert_eq!(Rgb::new(0, 0, 0).normalized(), (0.0, 0.0, 0.0));
        assert_eq!(Rgb::new(255, 255, 255).normalized(), (1.0, 1.0, 1.0));
        let (r, _, _) = Rgb::new(51, 0, 0).normalized();
        assert!((r - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_conversions() {
        let rgb: Rgb = (1, 2, 3).into();
        assert_eq!(rgb, Rgb::from([1, 2, 3]));
        let tuple: (u8, u8, u8) = rgb.into();
        assert_eq!(tuple, (1, 2, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(100, 150, 200).to_string(), "rgb(100, 150, 200)");
    }

    #[test]
    fn test_weighted_distance_single_channels() {
        let black = Rgb::new(0, 0, 0);
        // 10^2 weighted per channel
        assert!((black.weighted_distance(&Rgb::new(10, 0, 0)) - 30.0).abs() < 1e-9);
        assert!((black.weighted_distance(&Rgb::new(0, 10, 0)) - 59.0).abs() < 1e-9);
        assert!((black.weighted_distance(&Rgb::new(0, 0, 10)) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_distance_identity_is_exact_zero() {
        let c = Rgb::new(12, 34, 56);
        assert_eq!(c.weighted_distance(&c), 0.0);
    }
}
