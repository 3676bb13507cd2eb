//! Two-qubit pure states.
//!
//! Amplitudes are stored in computational-basis order `[a00, a01, a10, a11]`.
//! Qubit 0 is the more significant bit of the basis index, so the amplitude of
//! |b0 b1⟩ lives at `2·b0 + b1`.

use num_complex::Complex;
use rand::Rng;

use crate::error::{BlochError, Result};

/// Number of amplitudes in a two-qubit statevector.
pub const NUM_AMPLITUDES: usize = 4;

/// Index of the amplitude for basis state |b0 b1⟩.
pub fn basis_index(b0: bool, b1: bool) -> usize {
    ((b0 as usize) << 1) | (b1 as usize)
}

/// Immutable two-qubit amplitude vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumState2Q {
    amplitudes: [Complex<f64>; NUM_AMPLITUDES],
}

impl QuantumState2Q {
    pub fn new(amplitudes: [Complex<f64>; NUM_AMPLITUDES]) -> Self {
        Self { amplitudes }
    }

    /// Build a state from an arbitrary slice, rejecting anything that is not
    /// exactly four amplitudes long.
    pub fn from_amplitudes(amplitudes: &[Complex<f64>]) -> Result<Self> {
        let amplitudes: [Complex<f64>; NUM_AMPLITUDES] = amplitudes
            .try_into()
            .map_err(|_| BlochError::InvalidState {
                len: amplitudes.len(),
            })?;
        Ok(Self { amplitudes })
    }

    /// Real amplitudes, promoted to complex with zero imaginary part.
    pub fn from_real(amplitudes: &[f64]) -> Result<Self> {
        let promoted: Vec<Complex<f64>> =
            amplitudes.iter().map(|&re| Complex::new(re, 0.0)).collect();
        Self::from_amplitudes(&promoted)
    }

    /// The computational basis state |b0 b1⟩.
    pub fn basis(b0: bool, b1: bool) -> Self {
        let mut amplitudes = [Complex::new(0.0, 0.0); NUM_AMPLITUDES];
        amplitudes[basis_index(b0, b1)] = Complex::new(1.0, 0.0);
        Self { amplitudes }
    }

    /// |00⟩, the register's initial state.
    pub fn zero() -> Self {
        Self::basis(false, false)
    }

    /// Draw a random normalized state.
    ///
    /// Real and imaginary parts are sampled uniformly from [-1, 1) and the
    /// vector is rescaled to unit norm. The distribution is not Haar, which is
    /// fine for property checks.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        loop {
            let mut amplitudes = [Complex::new(0.0, 0.0); NUM_AMPLITUDES];
            for amp in amplitudes.iter_mut() {
                *amp = Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
            }
            if let Some(state) = Self::new(amplitudes).normalized() {
                return state;
            }
        }
    }

    pub fn amplitudes(&self) -> &[Complex<f64>; NUM_AMPLITUDES] {
        &self.amplitudes
    }

    pub fn amplitude(&self, b0: bool, b1: bool) -> Complex<f64> {
        self.amplitudes[basis_index(b0, b1)]
    }

    /// Outcome probabilities |a_i|² in basis order.
    pub fn probabilities(&self) -> [f64; NUM_AMPLITUDES] {
        let mut probs = [0.0; NUM_AMPLITUDES];
        for (p, amp) in probs.iter_mut().zip(self.amplitudes.iter()) {
            *p = amp.norm_sqr();
        }
        probs
    }

    /// Sum of squared magnitudes. Equals 1 for a physical state.
    pub fn total_probability(&self) -> f64 {
        self.probabilities().iter().sum()
    }

    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() <= tolerance
    }

    /// Rescale to unit norm. Returns `None` for the zero vector.
    pub fn normalized(&self) -> Option<Self> {
        let norm = self.total_probability().sqrt();
        if norm < 1e-12 {
            return None;
        }
        let mut amplitudes = self.amplitudes;
        for amp in amplitudes.iter_mut() {
            *amp /= norm;
        }
        Some(Self { amplitudes })
    }
}

impl Default for QuantumState2Q {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[Complex<f64>; NUM_AMPLITUDES]> for QuantumState2Q {
    fn from(amplitudes: [Complex<f64>; NUM_AMPLITUDES]) -> Self {
        Self::new(amplitudes)
    }
}

impl TryFrom<&[Complex<f64>]> for QuantumState2Q {
    type Error = BlochError;

    fn try_from(amplitudes: &[Complex<f64>]) -> Result<Self> {
        Self::from_amplitudes(amplitudes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn basis_index_puts_first_qubit_in_high_bit() {
        assert_eq!(basis_index(false, false), 0);
        assert_eq!(basis_index(false, true), 1);
        assert_eq!(basis_index(true, false), 2);
        assert_eq!(basis_index(true, true), 3);
    }

    #[test]
    fn from_amplitudes_rejects_wrong_length() {
        let three = [Complex::new(1.0, 0.0); 3];
        assert_eq!(
            QuantumState2Q::from_amplitudes(&three),
            Err(BlochError::InvalidState { len: 3 })
        );
        let five = [Complex::new(0.0, 0.0); 5];
        assert_eq!(
            QuantumState2Q::try_from(&five[..]),
            Err(BlochError::InvalidState { len: 5 })
        );
        assert_eq!(
            QuantumState2Q::from_real(&[]),
            Err(BlochError::InvalidState { len: 0 })
        );
    }

    #[test]
    fn basis_state_has_single_unit_amplitude() {
        let state = QuantumState2Q::basis(true, false);
        assert_eq!(state.probabilities(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(state.amplitude(true, false), Complex::new(1.0, 0.0));
    }

    #[test]
    fn phases_do_not_change_probabilities() {
        let state =
            QuantumState2Q::from_real(&[FRAC_1_SQRT_2, 0.0, 0.0, -FRAC_1_SQRT_2]).unwrap();
        let probs = state.probabilities();
        assert!((probs[0] - 0.5).abs() < 1e-12);
        assert!((probs[3] - 0.5).abs() < 1e-12);
        assert!(state.is_normalized(1e-9));
    }

    #[test]
    fn normalized_rescales_and_rejects_zero() {
        let state = QuantumState2Q::from_real(&[2.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(!state.is_normalized(1e-6));
        let unit = state.normalized().unwrap();
        assert!((unit.total_probability() - 1.0).abs() < 1e-12);

        let zero = QuantumState2Q::from_real(&[0.0; 4]).unwrap();
        assert!(zero.normalized().is_none());
    }

    #[test]
    fn random_states_are_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let state = QuantumState2Q::random(&mut rng);
            assert!(state.is_normalized(1e-9), "total = {}", state.total_probability());
        }
    }
}
