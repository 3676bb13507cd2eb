//! # cnot_error_propagation
//!
//! How single-qubit errors propagate through a CNOT, read off as per-qubit
//! Bloch Z projections.
//!
//! A two-qubit register starts in |00⟩, receives an error gate (X on the
//! control or Z on the target) and then a CNOT(0 → 1). The final statevector
//! `[a00, a01, a10, a11]` is reduced to one Z-expectation value per qubit by
//! marginalizing the joint outcome distribution over the other qubit.
//!
//! ## Usage
//!
//! ```
//! use cnot_error_propagation::prelude::*;
//!
//! let extractor = BlochZExtractor::default();
//! let outcome = run_scenario(&ErrorScenario::bit_flip(), &extractor).unwrap();
//! assert_eq!(outcome.projection.pair.as_tuple(), (-1.0, -1.0));
//! ```

pub mod bloch;
pub mod error;
pub mod gates;
pub mod register;
pub mod report;
pub mod scenario;
pub mod state;
#[cfg(test)]
mod tests;

pub use bloch::{compute_z_projections, BlochZExtractor, BlochZPair, ExtractorConfig, ZProjection};
pub use error::{BlochError, NormalizationWarning, Result};
pub use state::QuantumState2Q;

pub mod prelude {
    pub use crate::bloch::*;
    pub use crate::error::{BlochError, NormalizationWarning};
    pub use crate::gates::*;
    pub use crate::register::*;
    pub use crate::report::*;
    pub use crate::scenario::*;
    pub use crate::state::*;
}
