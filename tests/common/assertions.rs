//! Assertions that log what they compared before panicking.
//!
//! Each helper emits a debug event with both sides, an error event on
//! failure, and panics with the same context string so the failing
//! input is easy to find in the captured output.

#![allow(dead_code)]

use std::fmt::Debug;

use color_distance::InvalidColorFormat;

#[track_caller]
fn fail(context: &str, message: String) -> ! {
    tracing::error!(context, %message, "assertion failed");
    panic!("{context}: {message}");
}

/// Assert equality, logging both sides.
///
/// ```rust,ignore
/// assert_eq_logged("red channel", color.r(), 255);
/// ```
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(context, ?actual, ?expected, "eq");
    if actual != expected {
        fail(context, format!("expected {expected:?}, got {actual:?}"));
    }
}

/// Assert a condition, logging the context.
#[track_caller]
pub fn assert_true_logged(context: &str, value: bool) {
    tracing::debug!(context, value, "true");
    if !value {
        fail(context, "expected true, got false".to_string());
    }
}

/// Unwrap an `Ok`, logging the error otherwise.
///
/// ```rust,ignore
/// let color = assert_ok_logged("construct", Color::new("red", "#ff0000"));
/// ```
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    tracing::debug!(context, ?result, "ok");
    match result {
        Ok(value) => value,
        Err(e) => fail(context, format!("expected Ok, got Err({e:?})")),
    }
}

/// Unwrap an `Err`, logging the value otherwise.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    tracing::debug!(context, ?result, "err");
    match result {
        Err(e) => e,
        Ok(value) => fail(context, format!("expected Err, got Ok({value:?})")),
    }
}

/// Unwrap a `Some`, for example a `nearest` hit over a non-empty list.
#[track_caller]
pub fn assert_some_logged<T: Debug>(context: &str, option: Option<T>) -> T {
    tracing::debug!(context, ?option, "some");
    match option {
        Some(value) => value,
        None => fail(context, "expected Some, got None".to_string()),
    }
}

/// Assert that a hex string was rejected and that the error reports it
/// verbatim, both through `input()` and in the message.
///
/// ```rust,ignore
/// assert_invalid_hex_logged("#fff", Color::new("x", "#fff"));
/// ```
#[track_caller]
pub fn assert_invalid_hex_logged<T: Debug>(hex: &str, result: Result<T, InvalidColorFormat>) {
    let err = assert_err_logged(hex, result);
    assert_eq_logged("rejected input", err.input(), hex);
    assert_eq_logged("message", err.to_string(), format!("Invalid hex color {hex}"));
}

/// Assert that a distance is within `epsilon` of `expected`.
///
/// ```rust,ignore
/// assert_distance_logged("black to white", distance, 100.0, 1e-3);
/// ```
#[track_caller]
pub fn assert_distance_logged(context: &str, actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    tracing::debug!(context, actual, expected, diff, epsilon, "distance");
    if diff.is_nan() || diff > epsilon {
        fail(
            context,
            format!("expected {expected} within {epsilon}, got {actual} (off by {diff})"),
        );
    }
}
