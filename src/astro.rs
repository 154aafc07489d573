use crate::constants::{G, TWO_PI};
use crate::vector::{div_scalar, magnitude, mul_scalar, sub};
use crate::{Num, Vec3};

pub mod elliptic;

/// μ = G(m1 + m2)
///
/// Pass `m2 = 0` when the primary is on rails. A nonzero `m2` describes both
/// bodies orbiting their barycenter.
///
/// https://en.wikipedia.org/wiki/Standard_gravitational_parameter
#[inline]
pub fn standard_gravitational_parameter(m1: Num, m2: Num) -> Num {
    G * (m1 + m2)
}

/// Force of gravity (N) on the body at `p2` exerted by the body at `p1`.
///
/// The returned vector points from `p2` toward `p1`. Apply it to the body at
/// `p2` and its negation to the body at `p1`.
///
/// Coincident positions divide by zero and yield NaN components.
///
/// https://en.wikipedia.org/wiki/Newton%27s_law_of_universal_gravitation#Vector_form
pub fn force(p1: Vec3, p2: Vec3, m1: Num, m2: Num) -> Vec3 {
    let r = sub(p2, p1);
    let d = magnitude(r);
    let r_hat = div_scalar(r, d);

    mul_scalar(r_hat, -(G * m1 * m2) / (d * d))
}

/// https://en.wikipedia.org/wiki/Apsis
pub fn periapsis(a: Num, e: Num) -> Num {
    a * (1.0 - e)
}

/// https://en.wikipedia.org/wiki/Apsis
pub fn apoapsis(a: Num, e: Num) -> Num {
    a * (1.0 + e)
}

/// Orbital period in seconds. Only meaningful for `a > 0`.
///
/// https://en.wikipedia.org/wiki/Orbital_period
pub fn period(a: Num, m1: Num, m2: Num) -> Num {
    let μ = standard_gravitational_parameter(m1, m2);

    TWO_PI * ((a * a * a) / μ).sqrt()
}

/// Mean motion in rad/s.
///
/// https://en.wikipedia.org/wiki/Mean_motion
pub fn mean_motion(a: Num, μ: Num) -> Num {
    (μ / (a * a * a)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;
    use test_case::test_case;

    const M1: Num = 2e6;
    const M2: Num = 8e6;

    #[test_case(vec3(200.0, 0.0, 0.0), vec3(0.026690394, 0.0, 0.0) ; "along x")]
    #[test_case(vec3(0.0, 200.0, 0.0), vec3(0.0, 0.026690394, 0.0) ; "along y")]
    #[test_case(vec3(0.0, 0.0, 200.0), vec3(0.0, 0.0, 0.026690394) ; "along z")]
    #[test_case(vec3(200.0, 200.0, 200.0), vec3(0.0051365687, 0.0051365687, 0.0051365687) ; "along all axes")]
    fn force_pulls_toward_first_body(p1: Vec3, expected: Vec3) {
        let f = force(p1, Vec3::ZERO, M1, M2);

        assert!(
            f.distance(expected) < 1e-9,
            "expected {expected:?}, got {f:?}"
        );
    }

    #[test]
    fn reaction_on_first_body() {
        let reaction = -force(vec3(200.0, 0.0, 0.0), Vec3::ZERO, M1, M2);

        assert!((reaction.x - -0.02669).abs() < 1e-5);
        assert!((magnitude(reaction) - 0.02669).abs() < 1e-5);
    }

    #[test]
    fn force_is_symmetric() {
        let p1 = vec3(-12.0, 40.5, 7.0);
        let p2 = vec3(3.0, -8.0, 19.25);

        let f12 = force(p1, p2, M1, M2);
        let f21 = force(p2, p1, M1, M2);

        assert!((magnitude(f12) - magnitude(f21)).abs() < 1e-18);
        assert!((f12 + f21).length() < 1e-18);
    }

    #[test]
    fn coincident_bodies_give_nan() {
        let f = force(Vec3::ONE, Vec3::ONE, M1, M2);

        assert!(f.is_nan());
    }

    #[test]
    fn apsides() {
        assert_eq!(periapsis(10.0, 0.25), 7.5);
        assert_eq!(apoapsis(10.0, 0.25), 12.5);
        assert_eq!(periapsis(10.0, 0.0), apoapsis(10.0, 0.0));
    }

    #[test]
    fn period_of_the_moon() {
        let a = 502989447.71483934;
        let t = period(a, 5.972e24, 7.34767309e22);

        assert!((t - 3529030.4503167123).abs() < 1e-6);
    }

    #[test]
    fn mean_motion_completes_a_turn_per_period() {
        let (a, m1, m2) = (7.0e6, 5.972e24, 0.0);
        let μ = standard_gravitational_parameter(m1, m2);

        let turn = mean_motion(a, μ) * period(a, m1, m2);

        assert!((turn - TWO_PI).abs() < 1e-12);
    }
}
