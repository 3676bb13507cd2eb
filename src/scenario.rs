//! Error-propagation scenarios: a single-qubit error followed by a CNOT.
//!
//! - **Bit flip**: X on the control before CNOT(0 → 1). The flip propagates
//!   forward to the target, giving |11⟩.
//! - **Phase flip**: Z on the target before CNOT(0 → 1). Starting from |00⟩
//!   the Z only contributes a global phase, so both qubits stay at |0⟩.

use log::info;

use crate::bloch::{BlochZExtractor, ZProjection};
use crate::error::Result;
use crate::gates::Gate;
use crate::register::TwoQubitRegister;
use crate::state::QuantumState2Q;

/// A named gate sequence applied to |00⟩.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorScenario {
    title: String,
    error_label: String,
    circuit_label: String,
    gates: Vec<Gate>,
}

impl ErrorScenario {
    pub fn new(
        title: impl Into<String>,
        error_label: impl Into<String>,
        gates: Vec<Gate>,
    ) -> Self {
        let title = title.into();
        ErrorScenario {
            circuit_label: title.clone(),
            title,
            error_label: error_label.into(),
            gates,
        }
    }

    pub fn with_circuit_label(mut self, label: impl Into<String>) -> Self {
        self.circuit_label = label.into();
        self
    }

    /// X error on the control qubit, then CNOT.
    pub fn bit_flip() -> Self {
        Self::new(
            "CNOT X Error Propagation in Bit Basis",
            "X Error in Bit Basis",
            vec![Gate::x(0), Gate::cnot(0, 1)],
        )
        .with_circuit_label("CNOT + X error circuit (bit basis)")
    }

    /// Z error on the target qubit, then CNOT.
    pub fn phase_flip() -> Self {
        Self::new(
            "CNOT Z Error Propagation in Phase Basis",
            "Z Error in Phase Basis",
            vec![Gate::z(1), Gate::cnot(0, 1)],
        )
        .with_circuit_label("CNOT + Z error circuit (phase basis)")
    }

    /// Both scenarios of the demonstration, in presentation order.
    pub fn standard() -> Vec<Self> {
        vec![Self::bit_flip(), Self::phase_flip()]
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn error_label(&self) -> &str {
        &self.error_label
    }

    pub fn circuit_label(&self) -> &str {
        &self.circuit_label
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }
}

/// Final state and Z projections of one scenario run.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioOutcome {
    pub scenario: ErrorScenario,
    pub state: QuantumState2Q,
    pub projection: ZProjection,
}

/// Evolve |00⟩ through the scenario and extract the per-qubit Z projections.
pub fn run_scenario(
    scenario: &ErrorScenario,
    extractor: &BlochZExtractor,
) -> Result<ScenarioOutcome> {
    info!("Running scenario: {}", scenario.title());
    let mut register = TwoQubitRegister::new();
    register.apply_scenario(scenario)?;

    let state = *register.current_state();
    let projection = extractor.extract(&state)?;
    info!(
        "{}: control z = {:.3}, target z = {:.3}",
        scenario.title(),
        projection.pair.first,
        projection.pair.second
    );

    Ok(ScenarioOutcome {
        scenario: scenario.clone(),
        state,
        projection,
    })
}
