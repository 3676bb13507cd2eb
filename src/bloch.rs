//! Per-qubit Bloch Z-expectation values of a two-qubit pure state.
//!
//! For a single qubit, ⟨Z⟩ = P(0) − P(1). In a two-qubit state each qubit's
//! outcome distribution is obtained by marginalizing the joint distribution
//! over the other qubit:
//!
//! ```text
//! z0 = (p00 + p01) − (p10 + p11)
//! z1 = (p00 + p10) − (p01 + p11)
//! ```
//!
//! # Example
//!
//! ```
//! use cnot_error_propagation::bloch::compute_z_projections;
//! use num_complex::Complex;
//!
//! let zero = Complex::new(0.0, 0.0);
//! let one = Complex::new(1.0, 0.0);
//! // |10⟩: first qubit flipped, second untouched
//! let projection = compute_z_projections(&[zero, zero, one, zero]).unwrap();
//! assert_eq!(projection.pair.as_tuple(), (-1.0, 1.0));
//! assert!(projection.warning.is_none());
//! ```

use log::{debug, warn};
use num_complex::Complex;

use crate::error::{BlochError, NormalizationWarning, Result};
use crate::state::QuantumState2Q;

/// Default tolerance on |Σp − 1| before a state is reported as unnormalized.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Z-expectation values of the first and second qubit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochZPair {
    pub first: f64,
    pub second: f64,
}

impl BlochZPair {
    pub fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }

    /// Both values pinned into [-1, 1].
    pub fn clamped(&self) -> Self {
        Self {
            first: self.first.clamp(-1.0, 1.0),
            second: self.second.clamp(-1.0, 1.0),
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.first, self.second)
    }

    /// Both values within [-1, 1], allowing `eps` of floating-point slack.
    pub fn within_bounds(&self, eps: f64) -> bool {
        [self.first, self.second]
            .iter()
            .all(|z| (-1.0 - eps..=1.0 + eps).contains(z))
    }
}

impl From<BlochZPair> for (f64, f64) {
    fn from(pair: BlochZPair) -> Self {
        pair.as_tuple()
    }
}

/// Result of an extraction: the Z pair plus an optional normalization diagnostic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZProjection {
    pub pair: BlochZPair,
    pub warning: Option<NormalizationWarning>,
}

/// Configuration for [`BlochZExtractor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorConfig {
    /// Allowed deviation of the total probability from 1.
    pub tolerance: f64,
    /// Upgrade normalization warnings to [`BlochError::NotNormalized`].
    pub strict: bool,
}

impl ExtractorConfig {
    /// Default tolerance, normalization violations are hard errors.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Replace the tolerance. Must be finite and non-negative.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(BlochError::InvalidTolerance { tolerance });
        }
        self.tolerance = tolerance;
        Ok(self)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            strict: false,
        }
    }
}

/// Marginal Z expectations from raw probabilities. No validation.
pub fn z_expectations(state: &QuantumState2Q) -> BlochZPair {
    let [p00, p01, p10, p11] = state.probabilities();
    BlochZPair {
        first: (p00 + p01) - (p10 + p11),
        second: (p00 + p10) - (p01 + p11),
    }
}

/// Converts two-qubit states into per-qubit Z projections.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlochZExtractor {
    config: ExtractorConfig,
}

impl BlochZExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Check normalization against the configured tolerance. A non-finite
    /// total always warns.
    pub fn check_normalization(&self, state: &QuantumState2Q) -> Option<NormalizationWarning> {
        if !state.is_normalized(self.config.tolerance) {
            Some(NormalizationWarning {
                total: state.total_probability(),
                tolerance: self.config.tolerance,
            })
        } else {
            None
        }
    }

    /// Compute the Z pair for `state`.
    ///
    /// An unnormalized state yields a warning alongside values computed from
    /// the raw amplitudes, or `Err(NotNormalized)` when the extractor is strict.
    /// States within tolerance always give values in [-1, 1].
    pub fn extract(&self, state: &QuantumState2Q) -> Result<ZProjection> {
        let warning = self.check_normalization(state);
        let raw = z_expectations(state);
        let pair = match warning {
            Some(w) if self.config.strict => return Err(BlochError::from(w)),
            Some(w) => {
                warn!("Extracting Z projections from unnormalized state: {}", w);
                raw
            }
            None => raw.clamped(),
        };
        debug!(
            "Z projections: first = {:.6}, second = {:.6}",
            pair.first, pair.second
        );
        Ok(ZProjection { pair, warning })
    }

    /// Like [`extract`](Self::extract) but validates the amplitude count first.
    pub fn extract_amplitudes(&self, amplitudes: &[Complex<f64>]) -> Result<ZProjection> {
        let state = QuantumState2Q::from_amplitudes(amplitudes)?;
        self.extract(&state)
    }
}

/// Compute per-qubit Z projections with the default (lenient) configuration.
///
/// Fails with [`BlochError::InvalidState`] unless exactly four amplitudes are
/// supplied.
pub fn compute_z_projections(amplitudes: &[Complex<f64>]) -> Result<ZProjection> {
    BlochZExtractor::default().extract_amplitudes(amplitudes)
}
