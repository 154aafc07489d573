use crate::constants::{HIGH_ECCENTRICITY, MAX_ITERATIONS, PI, TOLERANCE, TWO_PI};
use crate::error::Result;
use crate::math::newton_approx;
use crate::Num;

/// Settings for solving Kepler's equation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeplerSolver {
    /// Largest step between two estimates that counts as converged (rad).
    pub tolerance: Num,
    pub max_iterations: usize,
    /// At or above this eccentricity the iteration starts at ±π instead of
    /// `M + e / 2`.
    pub high_eccentricity: Num,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            high_eccentricity: HIGH_ECCENTRICITY,
        }
    }
}

impl KeplerSolver {
    /// Eccentric Anomaly (E) is given by the equation:
    /// M = E - e * sin(E)
    /// where
    /// M is the mean anomaly
    /// e is the eccentricity
    ///
    /// Only elliptic orbits are supported. For `e >= 1` the equation has no
    /// elliptic solution and NaN is returned without iterating.
    ///
    /// # Errors
    /// [`crate::Error::NonConvergent`] if the iteration cap is reached.
    ///
    /// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-keplers-equation-ellipse
    pub fn eccentric_anomaly(&self, e: Num, M: Num) -> Result<Num> {
        if e >= 1.0 {
            tracing::debug!(
                eccentricity = e,
                mean_anomaly = M,
                "eccentric anomaly requested for a non-elliptic orbit"
            );
            return Ok(Num::NAN);
        }

        // Starting from π (on the side of M, within M's own revolution) keeps
        // Newton stable for eccentric orbits, where f'(E) gets close to zero
        // near periapsis.
        let E0 = if e >= self.high_eccentricity {
            let revolution = TWO_PI * (M / TWO_PI).round();
            revolution + PI.copysign(M - revolution)
        } else {
            M + e / 2.0
        };

        newton_approx(
            // f(E) = E - e*sin(E) - M
            |E| E - (e * E.sin()) - M,
            // f'(E) = 1 - e*cos(E)
            |E| 1.0 - (e * E.cos()),
            E0,
            self.tolerance,
            self.max_iterations,
        )
    }
}

/// Solves Kepler's equation with the default [`KeplerSolver`].
///
/// `e` - eccentricity, expected in `[0, 1)`
/// `M` - mean anomaly (rad)
pub fn eccentric_anomaly(e: Num, M: Num) -> Result<Num> {
    KeplerSolver::default().eccentric_anomaly(e, M)
}

/// True anomaly from eccentric anomaly, quadrant-safe.
///
/// https://en.wikipedia.org/wiki/True_anomaly#From_the_eccentric_anomaly
pub fn true_anomaly(E: Num, e: Num) -> Num {
    2.0 * Num::atan2(
        (1.0 + e).sqrt() * (E / 2.0).sin(),
        (1.0 - e).sqrt() * (E / 2.0).cos(),
    )
}

/// Eccentric anomaly from true anomaly. The result lies in `(-π, π)`.
///
/// https://orbital-mechanics.space/time-since-periapsis-and-keplers-equation/elliptical-orbits.html#equation-eq-eccentric-anomaly-true-anomaly-ellipse
pub fn eccentric_anomaly_from_true(nu: Num, e: Num) -> Num {
    2.0 * ((nu / 2.0).tan() / ((1.0 + e) / (1.0 - e)).sqrt()).atan()
}

/// Kepler's equation, M = E - e * sin(E)
pub fn mean_anomaly(E: Num, e: Num) -> Num {
    E - (e * E.sin())
}
