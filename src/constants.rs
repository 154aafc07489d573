use crate::Num;

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: Num = 6.6725985e-11;

/// Truncated π. Every angle formula in the crate uses this value so results
/// stay comparable with tables produced by the same constant.
#[allow(clippy::approx_constant)]
pub const PI: Num = 3.14159265358979;

pub const TWO_PI: Num = 2.0 * PI;

/// Newton iteration stops once two successive estimates differ by at most this.
pub const TOLERANCE: Num = 1e-6;

pub const MAX_ITERATIONS: usize = 1_000;

/// Eccentricities at or above this start Kepler's equation at ±π.
pub const HIGH_ECCENTRICITY: Num = 0.6;
