use crate::Num;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    /// The Newton iteration ran out of steps before two successive estimates
    /// came within tolerance of each other.
    #[error("failed to converge after {iterations} iterations (x0 = {x0}, x = {x})")]
    NonConvergent { iterations: usize, x0: Num, x: Num },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
