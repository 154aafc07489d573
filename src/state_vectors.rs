use crate::astro::elliptic::{eccentric_anomaly_from_true, mean_anomaly};
use crate::astro::standard_gravitational_parameter;
use crate::vector::{cross, div_scalar, dot, magnitude, sub};
use crate::{vec3, KeplerianElements, Num, Vec3, TWO_PI};

/// Position (m) and velocity (m/s) of a body relative to its primary.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateVectors {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl StateVectors {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// State of `self` as seen from `primary`.
    pub fn relative_to(&self, primary: &Self) -> Self {
        Self {
            position: sub(self.position, primary.position),
            velocity: sub(self.velocity, primary.velocity),
        }
    }

    pub fn abs_diff(&self, other: &Self) -> Num {
        self.position.distance(other.position) + self.velocity.distance(other.velocity)
    }

    /// Classical orbital elements of these state vectors.
    ///
    /// `m1` is the mass of the primary and `m2` the mass of the orbiting body.
    /// If the primary is on rails set `m2` to 0, otherwise the elements
    /// describe both bodies orbiting their common barycenter.
    ///
    /// # Degenerate orbits
    /// - Equatorial orbits (inclination 0 or π) have no line of nodes, so the
    ///   longitude of the ascending node and the argument of periapsis come
    ///   out as 0. The direction of periapsis within the plane is lost with
    ///   them, so feeding these elements back to
    ///   [`KeplerianElements::state_vectors_at`] does NOT reproduce the input
    ///   state: the orbit keeps its shape and size, but periapsis lands on the
    ///   x axis.
    /// - Circular orbits (e = 0) have no periapsis: the argument of periapsis
    ///   and the true anomaly come out as 0.
    /// - Parabolic and hyperbolic trajectories (e >= 1) give a negative
    ///   semi-major axis and a NaN mean anomaly.
    /// - A zero position vector, or a velocity parallel to the position,
    ///   leaves the angular momentum undefined and produces NaN.
    ///
    /// https://downloads.rene-schwarz.com/download/M002-Cartesian_State_Vectors_to_Keplerian_Orbit_Elements.pdf
    pub fn to_elements(&self, m1: Num, m2: Num) -> KeplerianElements {
        let μ = standard_gravitational_parameter(m1, m2);

        let rv = self.position;
        let r = magnitude(rv);
        let vv = self.velocity;
        let v = magnitude(vv);

        // Orbital angular momentum
        // This vector should point in the normal direction of the orbit
        let hv = cross(rv, vv);

        // Eccentricity vector, pointing at periapsis
        let ev = sub(div_scalar(cross(vv, hv), μ), div_scalar(rv, r));
        let e = magnitude(ev);

        // N vector - it's the vector parallel to the node line
        let nv = vec3(-hv.y, hv.x, 0.0);
        let n = magnitude(nv);

        tracing::trace!(?hv, ?ev, ?nv, "extracting elements");

        // True anomaly
        let mut nu = or_zero(acos(dot(ev, rv) / (e * r)), "true anomaly");

        if dot(rv, vv) < 0.0 {
            nu = TWO_PI - nu;
        }

        // Inclination
        let i = acos(hv.z / magnitude(hv));

        let E = eccentric_anomaly_from_true(nu, e);

        // We find the angle between the node line & the X axis
        let mut Ω = or_zero(acos(nv.x / n), "longitude of ascending node");

        if nv.y < 0.0 {
            Ω = TWO_PI - Ω;
        }

        // Argument of periapsis
        let mut ω = or_zero(acos(dot(nv, ev) / (n * e)), "argument of periapsis");

        if ev.z < 0.0 {
            ω = TWO_PI - ω;
        }

        let M = mean_anomaly(E, e);

        // Vis-viva, negative for hyperbolic trajectories
        let a = 1.0 / ((2.0 / r) - ((v * v) / μ));

        KeplerianElements {
            semi_major_axis: a,
            eccentricity: e,
            argument_of_periapsis: ω,
            longitude_of_ascending_node: Ω,
            inclination: i,
            mean_anomaly: M,
        }
    }
}

/// Converts cartesian state vectors to classical orbital elements.
///
/// `r` - position relative to the primary body (m)
/// `v` - velocity relative to the primary body (m/s)
/// `m1` - mass of the primary body (kg)
/// `m2` - mass of the secondary body (kg)
///
/// See [`StateVectors::to_elements`] for the degenerate cases.
pub fn orbital_elements(r: Vec3, v: Vec3, m1: Num, m2: Num) -> KeplerianElements {
    StateVectors::new(r, v).to_elements(m1, m2)
}

/// `acos` with its argument clamped to [-1, 1], so a cosine that rounding
/// pushed a hair past ±1 still maps to 0 or π. NaN passes through.
fn acos(cos: Num) -> Num {
    cos.clamp(-1.0, 1.0).acos()
}

/// Angles that are undefined for the orbit at hand are reported as 0.
fn or_zero(angle: Num, what: &str) -> Num {
    if angle.is_nan() {
        tracing::debug!(what, "angle undefined for this orbit, using 0");
        0.0
    } else {
        angle
    }
}
