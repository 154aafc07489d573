//! Vector primitives the orbit conversions are written in terms of.
//!
//! Division by a zero scalar follows IEEE 754: the result holds `±inf` or
//! NaN components. Callers dividing by a magnitude must make sure the vector
//! is not zero-length.

use crate::{Num, Vec3};

/// `a - b`, component-wise.
#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> Num {
    a.dot(b)
}

#[inline]
pub fn mul_scalar(v: Vec3, s: Num) -> Vec3 {
    v * s
}

#[inline]
pub fn div_scalar(v: Vec3, s: Num) -> Vec3 {
    v / s
}

/// Euclidean length, never negative.
#[inline]
pub fn magnitude(v: Vec3) -> Num {
    dot(v, v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn subtracts_component_wise() {
        assert_eq!(
            sub(vec3(1.0, 2.0, 3.0), vec3(0.5, -2.0, 4.0)),
            vec3(0.5, 4.0, -1.0)
        );
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);
        assert_eq!(
            cross(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)),
            vec3(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn dot_and_magnitude() {
        assert_eq!(dot(vec3(1.0, 2.0, 3.0), vec3(4.0, -5.0, 6.0)), 12.0);
        assert_eq!(magnitude(vec3(3.0, 4.0, 12.0)), 13.0);
        assert_eq!(magnitude(Vec3::ZERO), 0.0);
    }

    #[test]
    fn scalar_multiply_and_divide() {
        assert_eq!(mul_scalar(vec3(1.0, -2.0, 3.0), 2.0), vec3(2.0, -4.0, 6.0));
        assert_eq!(div_scalar(vec3(2.0, -4.0, 6.0), 2.0), vec3(1.0, -2.0, 3.0));
    }

    #[test]
    fn divide_by_zero_is_ieee() {
        let v = div_scalar(vec3(1.0, -1.0, 0.0), 0.0);

        assert_eq!(v.x, Num::INFINITY);
        assert_eq!(v.y, Num::NEG_INFINITY);
        assert!(v.z.is_nan());
    }
}
