//! Kinematic observables derived from momentum components.

/// Transverse momentum: the momentum magnitude perpendicular to the beam
/// axis, `sqrt(px^2 + py^2)`.
///
/// The radicand is a sum of squares and therefore non-negative, and the value
/// is taken with a plain square root rather than a fractional power of an
/// intermediate, so malformed finite inputs cannot turn the exponentiation
/// itself into a NaN.
pub fn transverse_momentum(px: f64, py: f64) -> f64 {
    (px * px + py * py).sqrt()
}
