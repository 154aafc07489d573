use crate::constants::PI;
use crate::Num;

/// Degrees from radians.
pub fn degrees(rad: Num) -> Num {
    180.0 * rad / PI
}

/// Radians from degrees.
pub fn radians(deg: Num) -> Num {
    PI * deg / 180.0
}
