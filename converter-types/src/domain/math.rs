//! Decimal rounding for computed rates.

/// Rounds `value` to `places` decimal digits, ties away from zero.
///
/// `round(0.125, 2)` is `0.13` whenever the scaled product lands exactly on
/// the tie; products a hair below the tie round down as IEEE-754 dictates.
pub fn round(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
