//! Error and diagnostic types for Bloch Z extraction.

use std::fmt;

use thiserror::Error;

/// Errors raised while building states, applying gates or extracting projections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlochError {
    /// The amplitude vector does not describe exactly two qubits.
    #[error("Invalid two-qubit state: expected 4 amplitudes, got {len}")]
    InvalidState { len: usize },

    /// Strict extraction refused a state whose probabilities do not sum to 1.
    #[error("State vector not normalized: total probability {total} (tolerance {tolerance})")]
    NotNormalized { total: f64, tolerance: f64 },

    /// Normalization tolerance must be finite and non-negative.
    #[error("Invalid normalization tolerance {tolerance}: must be finite and non-negative")]
    InvalidTolerance { tolerance: f64 },

    /// A gate referenced a qubit outside the register, or a CNOT used the
    /// same qubit as control and target.
    #[error("Invalid qubit operand {qubit} for gate {gate}")]
    InvalidQubit { qubit: usize, gate: &'static str },
}

pub type Result<T> = std::result::Result<T, BlochError>;

/// Non-fatal diagnostic: the supplied state's total probability mass is off
/// from 1 by more than the configured tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationWarning {
    pub total: f64,
    pub tolerance: f64,
}

impl NormalizationWarning {
    /// Absolute distance of the total probability from 1.
    pub fn deviation(&self) -> f64 {
        (self.total - 1.0).abs()
    }
}

impl fmt::Display for NormalizationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total probability {:.6} deviates from 1 by {:.3e} (tolerance {:.1e})",
            self.total,
            self.deviation(),
            self.tolerance
        )
    }
}

impl From<NormalizationWarning> for BlochError {
    fn from(warning: NormalizationWarning) -> Self {
        BlochError::NotNormalized {
            total: warning.total,
            tolerance: warning.tolerance,
        }
    }
}
