//! Hex color string parsing.
//!
//! The accepted grammar is an optional leading `#` followed by exactly six
//! hexadecimal digits, case-insensitive. The digits are read as three
//! consecutive 2-digit bytes: red, green, blue.
//!
//! ```
//! use color_distance::hex::parse_hex;
//!
//! let red = parse_hex("#FF0000").unwrap();
//! assert_eq!((red.red, red.green, red.blue), (255, 0, 0));
//!
//! let green = parse_hex("00ff00").unwrap();
//! assert_eq!((green.red, green.green, green.blue), (0, 255, 0));
//!
//! assert!(parse_hex("#FFF").is_err());
//! ```

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;

use crate::error::InvalidColorFormat;
use crate::rgb::Rgb;
use crate::sync::lock_recover;

/// Number of digits after the optional `#`.
const HEX_DIGITS: usize = 6;

/// Capacity of the process-wide parse cache.
const CACHE_CAPACITY: usize = 1024;

/// Parse a 6-digit hex color string into an [`Rgb`] triplet.
///
/// # Errors
///
/// Returns [`InvalidColorFormat`] carrying `input` unchanged when it is not
/// an optional `#` followed by exactly six hex digits.
pub fn parse_hex(input: &str) -> Result<Rgb, InvalidColorFormat> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    // `from_str_radix` tolerates a leading `+`, so validate the character
    // set up front. All-ASCII also makes the byte slicing below safe.
    if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(reject(input));
    }

    // Cannot fail once the digits are validated above.
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| reject(input))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn reject(input: &str) -> InvalidColorFormat {
    log::debug!("rejected hex color {input:?}");
    InvalidColorFormat::new(input)
}

/// Parse a hex color string, consulting a shared LRU cache first.
///
/// Results are identical to [`parse_hex`]; only successful parses are
/// cached, keyed by the exact input string.
///
/// # Errors
///
/// Same as [`parse_hex`].
pub fn parse_hex_cached(input: &str) -> Result<Rgb, InvalidColorFormat> {
    static CACHE: LazyLock<Mutex<LruCache<String, Rgb>>> = LazyLock::new(|| {
        Mutex::new(LruCache::new(
            NonZeroUsize::new(CACHE_CAPACITY).expect("non-zero"),
        ))
    });

    if let Some(&cached) = lock_recover(&CACHE).get(input) {
        log::trace!("hex cache hit for {input:?}");
        return Ok(cached);
    }

    let rgb = parse_hex(input)?;
    log::trace!("hex cache miss for {input:?} -> {rgb}");
    lock_recover(&CACHE).put(input.to_string(), rgb);

    Ok(rgb)
}
