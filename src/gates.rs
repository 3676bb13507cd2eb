//! The closed gate set used to inject errors ahead of a CNOT.

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use num_complex::Complex;

use crate::error::{BlochError, Result};
use crate::state::{QuantumState2Q, NUM_AMPLITUDES};

/// Number of qubits in the register.
pub const NUM_QUBITS: usize = 2;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum GateType {
    PauliX,
    PauliY,
    PauliZ,
    Hadamard,
    CNOT,
}

impl GateType {
    pub fn name(&self) -> &'static str {
        match self {
            GateType::PauliX => "X",
            GateType::PauliY => "Y",
            GateType::PauliZ => "Z",
            GateType::Hadamard => "H",
            GateType::CNOT => "CX",
        }
    }
}

/// A gate bound to its qubit operands. Operands are checked when the gate is applied.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Gate {
    gate_type: GateType,
    target: usize,
    control: Option<usize>,
}

// Bit of the basis index that holds `qubit`. Qubit 0 is the high bit.
fn qubit_mask(qubit: usize) -> usize {
    1 << (NUM_QUBITS - 1 - qubit)
}

impl Gate {
    pub fn x(qubit: usize) -> Self {
        Self::single(GateType::PauliX, qubit)
    }

    pub fn y(qubit: usize) -> Self {
        Self::single(GateType::PauliY, qubit)
    }

    pub fn z(qubit: usize) -> Self {
        Self::single(GateType::PauliZ, qubit)
    }

    pub fn h(qubit: usize) -> Self {
        Self::single(GateType::Hadamard, qubit)
    }

    pub fn cnot(control: usize, target: usize) -> Self {
        Self {
            gate_type: GateType::CNOT,
            target,
            control: Some(control),
        }
    }

    fn single(gate_type: GateType, target: usize) -> Self {
        Self {
            gate_type,
            target,
            control: None,
        }
    }

    pub fn get_gate_type(&self) -> GateType {
        self.gate_type
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn control(&self) -> Option<usize> {
        self.control
    }

    fn validate(&self) -> Result<()> {
        let invalid = |qubit| BlochError::InvalidQubit {
            qubit,
            gate: self.gate_type.name(),
        };
        if self.target >= NUM_QUBITS {
            return Err(invalid(self.target));
        }
        if let Some(control) = self.control {
            if control >= NUM_QUBITS || control == self.target {
                return Err(invalid(control));
            }
        }
        Ok(())
    }

    /// Apply this gate to `state`, returning the new state.
    pub fn apply_to(&self, state: &QuantumState2Q) -> Result<QuantumState2Q> {
        self.validate()?;

        let input = state.amplitudes();
        let mut out = [Complex::new(0.0, 0.0); NUM_AMPLITUDES];
        let m = qubit_mask(self.target);

        for (i, amp) in out.iter_mut().enumerate() {
            let bit_set = i & m != 0;
            *amp = match self.gate_type {
                GateType::PauliX => input[i ^ m],
                GateType::PauliY => {
                    if bit_set {
                        Complex::new(0.0, 1.0) * input[i ^ m]
                    } else {
                        Complex::new(0.0, -1.0) * input[i ^ m]
                    }
                }
                GateType::PauliZ => {
                    if bit_set {
                        -input[i]
                    } else {
                        input[i]
                    }
                }
                GateType::Hadamard => {
                    let a0 = input[i & !m];
                    let a1 = input[i | m];
                    if bit_set {
                        (a0 - a1) * FRAC_1_SQRT_2
                    } else {
                        (a0 + a1) * FRAC_1_SQRT_2
                    }
                }
                GateType::CNOT => {
                    // validate() guarantees a control for CNOT
                    let c = self.control.map(qubit_mask).unwrap_or(0);
                    if i & c != 0 {
                        input[i ^ m]
                    } else {
                        input[i]
                    }
                }
            };
        }

        Ok(QuantumState2Q::new(out))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.control {
            Some(control) => write!(
                f,
                "{}(q{} -> q{})",
                self.gate_type.name(),
                control,
                self.target
            ),
            None => write!(f, "{}(q{})", self.gate_type.name(), self.target),
        }
    }
}
