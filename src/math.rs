use crate::error::{Error, Result};
use crate::Num;

/// Approximates the root of a function using the Newton-Raphson method.
///
/// # Arguments
/// f - The function to approximate the root of.
/// f_prime - The derivative of the function.
/// x0 - The initial guess.
/// epsilon - The largest step between two estimates that counts as converged.
/// max_steps - How many steps to take before giving up.
///
/// # Returns
/// The approximate root of the function. A NaN estimate is returned as-is
/// rather than iterated on, so degenerate inputs surface as NaN.
///
/// # Errors
/// [`Error::NonConvergent`] when `max_steps` is exhausted.
pub fn newton_approx(
    f: impl Fn(Num) -> Num,
    f_prime: impl Fn(Num) -> Num,
    x0: Num,
    epsilon: Num,
    max_steps: usize,
) -> Result<Num> {
    let mut x = x0;

    for _ in 0..max_steps {
        let x_next = x - f(x) / f_prime(x);

        if x_next.is_nan() {
            return Ok(x_next);
        }

        let error = (x_next - x).abs();

        if error <= epsilon {
            return Ok(x_next);
        }

        x = x_next;
    }

    tracing::warn!(max_steps, x0, x, "newton iteration did not converge");

    Err(Error::NonConvergent {
        iterations: max_steps,
        x0,
        x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_square_root() {
        let root = newton_approx(|x| x * x - 2.0, |x| 2.0 * x, 1.0, 1e-12, 100).unwrap();

        assert!((root - 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn reports_non_convergence() {
        // x^2 + 1 has no real root, so the iteration wanders forever
        let result = newton_approx(|x| x * x + 1.0, |x| 2.0 * x, 0.5, 1e-12, 50);

        assert!(matches!(
            result,
            Err(Error::NonConvergent { iterations: 50, .. })
        ));
    }

    #[test]
    fn nan_is_returned_not_iterated() {
        let root = newton_approx(|x| x, |_| 0.0, 0.0, 1e-12, 10).unwrap();

        assert!(root.is_nan());
    }
}
