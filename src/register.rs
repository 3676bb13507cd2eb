use log::debug;

use crate::error::Result;
use crate::gates::Gate;
use crate::scenario::ErrorScenario;
use crate::state::QuantumState2Q;

/// A two-qubit register evolving one gate at a time from |00⟩.
#[derive(Clone, Debug, Default)]
pub struct TwoQubitRegister {
    current_state: QuantumState2Q,
}

impl TwoQubitRegister {
    pub fn new() -> Self {
        Self {
            current_state: QuantumState2Q::zero(),
        }
    }

    // Overwrite the register contents, e.g. to start from a prepared state
    pub fn set_state(&mut self, new_state: QuantumState2Q) {
        self.current_state = new_state;
    }

    pub fn reset(&mut self) {
        self.current_state = QuantumState2Q::zero();
    }

    pub fn current_state(&self) -> &QuantumState2Q {
        &self.current_state
    }

    /// Apply a gate. On error the register is left unchanged.
    pub fn apply_gate(&mut self, gate: Gate) -> Result<()> {
        let next = gate.apply_to(&self.current_state)?;
        debug!("Applied {}: {:?}", gate, next.amplitudes());
        self.current_state = next;
        Ok(())
    }

    /// Apply the scenario's gates in order, stopping at the first invalid one.
    pub fn apply_scenario(&mut self, scenario: &ErrorScenario) -> Result<()> {
        for gate in scenario.gates() {
            self.apply_gate(*gate)?;
        }
        Ok(())
    }
}
