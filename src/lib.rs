//! Two-body orbital mechanics: Newtonian gravity, conversion between
//! cartesian state vectors and Keplerian orbital elements, and the apsides
//! and period derived from them.
//!
//! Every function is pure. Degenerate inputs (zero-length vectors, `e >= 1`
//! where an ellipse is required) are not rejected; they propagate as NaN or
//! infinity, so check the documented preconditions before calling.
#![allow(non_snake_case)]

pub mod angle;
pub mod astro;
pub mod constants;
pub mod elements;
pub mod error;
pub mod math;
pub mod state_vectors;
pub mod vector;

pub use angle::{degrees, radians};
pub use astro::elliptic::{eccentric_anomaly, KeplerSolver};
pub use astro::{apoapsis, force, periapsis, period};
pub use constants::*;
pub use elements::{state_vectors, KeplerianElements};
pub use error::{Error, Result};
pub use glam::{dvec3 as vec3, DMat3 as Mat3, DVec3 as Vec3};
pub use state_vectors::{orbital_elements, StateVectors};

pub type Num = f64;
