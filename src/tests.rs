use crate::bloch::{compute_z_projections, BlochZExtractor, ExtractorConfig};
use crate::error::BlochError;
use crate::gates::Gate;
use crate::register::TwoQubitRegister;
use crate::scenario::{run_scenario, ErrorScenario};
use crate::state::QuantumState2Q;
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::FRAC_1_SQRT_2;

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_bit_flip_propagates_to_target() {
        let outcome =
            run_scenario(&ErrorScenario::bit_flip(), &BlochZExtractor::default()).unwrap();
        assert_eq!(
            outcome.state,
            QuantumState2Q::basis(true, true),
            "X on the control followed by CNOT should leave |11⟩"
        );
        assert_eq!(outcome.projection.pair.as_tuple(), (-1.0, -1.0));
        assert!(outcome.projection.warning.is_none());
    }

    #[test]
    fn test_phase_flip_invisible_in_z() {
        let outcome =
            run_scenario(&ErrorScenario::phase_flip(), &BlochZExtractor::default()).unwrap();
        assert_eq!(
            outcome.state,
            QuantumState2Q::zero(),
            "Z on |0⟩ is a no-op, so CNOT leaves |00⟩"
        );
        assert_eq!(outcome.projection.pair.as_tuple(), (1.0, 1.0));
    }

    #[test]
    fn test_phase_error_on_superposed_control() {
        // H, Z on the control, then CNOT: (|00⟩ - |11⟩)/√2
        let scenario = ErrorScenario::new(
            "phase error on superposition",
            "Z Error",
            vec![Gate::h(0), Gate::z(0), Gate::cnot(0, 1)],
        );
        let outcome = run_scenario(&scenario, &BlochZExtractor::default()).unwrap();
        let amps = outcome.state.amplitudes();
        assert!((amps[0].re - FRAC_1_SQRT_2).abs() < EPS);
        assert!((amps[3].re + FRAC_1_SQRT_2).abs() < EPS);

        let pair = outcome.projection.pair;
        assert!(pair.first.abs() < EPS && pair.second.abs() < EPS);
    }

    #[test]
    fn test_basis_and_malformed_vectors() {
        let real = |v: [f64; 4]| -> Vec<Complex<f64>> {
            v.iter().map(|&x| Complex::new(x, 0.0)).collect()
        };

        let p = compute_z_projections(&real([1.0, 0.0, 0.0, 0.0])).unwrap();
        assert_eq!(p.pair.as_tuple(), (1.0, 1.0));

        let p = compute_z_projections(&real([0.0, 0.0, 1.0, 0.0])).unwrap();
        assert_eq!(p.pair.as_tuple(), (-1.0, 1.0));

        let p = compute_z_projections(&real([0.0, 0.0, 0.0, 1.0])).unwrap();
        assert_eq!(p.pair.as_tuple(), (-1.0, -1.0));

        let err = compute_z_projections(&real([1.0, 0.0, 0.0, 0.0])[..3]).unwrap_err();
        assert_eq!(err, BlochError::InvalidState { len: 3 });
    }

    #[test]
    fn test_random_states_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = ExtractorConfig::strict().with_tolerance(1e-9).unwrap();
        let extractor = BlochZExtractor::new(config);
        for _ in 0..1000 {
            let state = QuantumState2Q::random(&mut rng);
            let projection = extractor.extract(&state).unwrap();
            assert!(
                projection.pair.within_bounds(1e-12),
                "Z pair {:?} out of bounds for state {:?}",
                projection.pair,
                state
            );
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        let extractor = BlochZExtractor::default();
        for _ in 0..50 {
            let state = QuantumState2Q::random(&mut rng);
            let first = extractor.extract(&state).unwrap();
            let second = extractor.extract(&state).unwrap();
            assert_eq!(first, second, "Repeated extraction should be identical");
        }
    }

    #[test]
    fn test_gates_preserve_normalization() {
        let mut rng = StdRng::seed_from_u64(11);
        let gates = [
            Gate::x(0),
            Gate::y(1),
            Gate::z(0),
            Gate::h(1),
            Gate::cnot(1, 0),
        ];
        for _ in 0..20 {
            let mut register = TwoQubitRegister::new();
            register.set_state(QuantumState2Q::random(&mut rng));
            for gate in gates {
                register.apply_gate(gate).unwrap();
                assert!(register.current_state().is_normalized(1e-9));
            }
        }
    }

    #[test]
    fn test_unnormalized_input_still_computes() {
        let half = [
            Complex::new(0.5, 0.0),
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 0.5),
            Complex::new(0.0, 0.0),
        ];
        let projection = compute_z_projections(&half).unwrap();
        let warning = projection.warning.expect("total probability 0.5 should warn");
        assert!((warning.total - 0.5).abs() < EPS);
        assert!(projection.pair.first.abs() < EPS);
        assert!((projection.pair.second - 0.5).abs() < EPS);
    }
}
