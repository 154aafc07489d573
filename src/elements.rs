use crate::astro::elliptic::{true_anomaly, KeplerSolver};
use crate::astro::{self, mean_motion, standard_gravitational_parameter};
use crate::error::Result;
use crate::vector::mul_scalar;
use crate::{vec3, Mat3, Num, StateVectors, Vec3, TWO_PI};

/// The six classical orbital elements.
///
/// Angles are in radians, the semi-major axis in meters. The semi-major axis
/// is negative for hyperbolic trajectories.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeplerianElements {
    pub semi_major_axis: Num,
    pub eccentricity: Num,
    pub argument_of_periapsis: Num,
    pub longitude_of_ascending_node: Num,
    pub inclination: Num,
    /// Mean anomaly at epoch
    pub mean_anomaly: Num,
}

impl KeplerianElements {
    pub fn from_state_vectors(state_vectors: &StateVectors, m1: Num, m2: Num) -> Self {
        state_vectors.to_elements(m1, m2)
    }

    pub fn periapsis(&self) -> Num {
        astro::periapsis(self.semi_major_axis, self.eccentricity)
    }

    pub fn apoapsis(&self) -> Num {
        astro::apoapsis(self.semi_major_axis, self.eccentricity)
    }

    pub fn period(&self, m1: Num, m2: Num) -> Num {
        astro::period(self.semi_major_axis, m1, m2)
    }

    /// Mean anomaly `t` seconds after epoch.
    ///
    /// At `t == 0` the epoch mean anomaly is returned untouched. Otherwise it
    /// is advanced by the mean motion and wrapped into `[0, 2π)`.
    pub fn mean_anomaly_at(&self, t: Num, m1: Num, m2: Num) -> Num {
        if t == 0.0 {
            return self.mean_anomaly;
        }

        let μ = standard_gravitational_parameter(m1, m2);

        (self.mean_anomaly + t * mean_motion(self.semi_major_axis, μ)).rem_euclid(TWO_PI)
    }

    /// Position and velocity `t` seconds after epoch.
    ///
    /// Only elliptic orbits (`0 <= e < 1`, `a > 0`) are supported; anything
    /// else yields NaN vectors.
    ///
    /// # Errors
    /// [`crate::Error::NonConvergent`] if Kepler's equation could not be solved.
    ///
    /// https://downloads.rene-schwarz.com/download/M001-Keplerian_Orbit_Elements_to_Cartesian_State_Vectors.pdf
    pub fn state_vectors_at(&self, t: Num, m1: Num, m2: Num) -> Result<StateVectors> {
        self.state_vectors_with(&KeplerSolver::default(), t, m1, m2)
    }

    pub fn state_vectors_with(
        &self,
        solver: &KeplerSolver,
        t: Num,
        m1: Num,
        m2: Num,
    ) -> Result<StateVectors> {
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        let μ = standard_gravitational_parameter(m1, m2);

        let M = self.mean_anomaly_at(t, m1, m2);
        let E = solver.eccentric_anomaly(e, M)?;
        let nu = true_anomaly(E, e);

        // Distance to the central body
        let r = a * (1.0 - e * E.cos());

        tracing::trace!(
            mean_anomaly = M,
            eccentric_anomaly = E,
            true_anomaly = nu,
            radius = r,
            "synthesizing state vectors"
        );

        // Perifocal position and velocity
        let position = mul_scalar(vec3(nu.cos(), nu.sin(), 0.0), r);
        let velocity = mul_scalar(
            vec3(-E.sin(), (1.0 - (e * e)).sqrt() * E.cos(), 0.0),
            (μ * a).sqrt() / r,
        );

        Ok(StateVectors {
            position: self.perifocal_to_reference(position),
            velocity: self.perifocal_to_reference(velocity),
        })
    }

    /// Rotates a vector from the perifocal frame (x towards periapsis, z along
    /// the angular momentum) into the reference frame: by the argument of
    /// periapsis about z, the inclination about x, then the longitude of the
    /// ascending node about z.
    #[inline]
    pub fn perifocal_to_reference(&self, perifocal: Vec3) -> Vec3 {
        self.rotation().mul_vec3(perifocal)
    }

    pub fn normal(&self) -> Vec3 {
        self.perifocal_to_reference(Vec3::Z)
    }

    fn rotation(&self) -> Mat3 {
        let (sin_ω, cos_ω) = self.argument_of_periapsis.sin_cos();
        let (sin_Ω, cos_Ω) = self.longitude_of_ascending_node.sin_cos();
        let (sin_i, cos_i) = self.inclination.sin_cos();

        Mat3::from_cols(
            vec3(
                cos_ω * cos_Ω - sin_ω * cos_i * sin_Ω,
                cos_ω * sin_Ω + sin_ω * cos_i * cos_Ω,
                sin_ω * sin_i,
            ),
            vec3(
                -(sin_ω * cos_Ω + cos_ω * cos_i * sin_Ω),
                cos_ω * cos_i * cos_Ω - sin_ω * sin_Ω,
                cos_ω * sin_i,
            ),
            vec3(sin_i * sin_Ω, -sin_i * cos_Ω, cos_i),
        )
    }

    pub fn is_elliptical(&self) -> bool {
        self.eccentricity < 1.0
    }

    pub fn is_hyperbolic(&self) -> bool {
        // Parabolic orbits are lumped in here
        self.eccentricity >= 1.0
    }
}

/// Converts classical orbital elements to cartesian state vectors `t` seconds
/// after epoch.
///
/// `a` - semi-major axis (m)
/// `e` - eccentricity, in `[0, 1)`
/// `w` - argument of periapsis (rad)
/// `lan` - longitude of ascending node (rad)
/// `i` - inclination (rad)
/// `m0` - mean anomaly at epoch (rad)
/// `t` - time since epoch (s)
/// `m1` - mass of the primary body (kg)
/// `m2` - mass of the secondary body (kg), 0 if the primary is on rails
///
/// The returned vectors are relative to the primary body.
#[allow(clippy::too_many_arguments)]
pub fn state_vectors(
    a: Num,
    e: Num,
    w: Num,
    lan: Num,
    i: Num,
    m0: Num,
    t: Num,
    m1: Num,
    m2: Num,
) -> Result<StateVectors> {
    KeplerianElements {
        semi_major_axis: a,
        eccentricity: e,
        argument_of_periapsis: w,
        longitude_of_ascending_node: lan,
        inclination: i,
        mean_anomaly: m0,
    }
    .state_vectors_at(t, m1, m2)
}
