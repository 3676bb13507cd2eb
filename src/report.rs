//! Text rendering of scenario outcomes.
//!
//! Each scenario gets a title line, the final state in ket notation and one
//! panel per qubit showing its Z value on a fixed [-1, 1] axis.

use num_complex::Complex;

use crate::scenario::{ErrorScenario, ScenarioOutcome};
use crate::state::QuantumState2Q;

const AMPLITUDE_EPS: f64 = 1e-12;
const KETS: [&str; 4] = ["|00⟩", "|01⟩", "|10⟩", "|11⟩"];

/// Layout of the text plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    /// Number of cells on the axis, including both ends.
    pub width: usize,
    /// Character placed at the plotted value.
    pub marker: char,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            width: 41,
            marker: '*',
        }
    }
}

/// Plot `z` on a horizontal axis from -1 to +1.
///
/// Values outside the axis are pinned to the nearest end.
pub fn render_axis(z: f64, config: &ReportConfig) -> String {
    let width = config.width.max(3);
    let last = (width - 1) as f64;
    let center = (width - 1) / 2;
    let pos = (((z.clamp(-1.0, 1.0) + 1.0) / 2.0) * last).round() as usize;

    let cells: String = (0..width)
        .map(|i| {
            if i == pos {
                config.marker
            } else if i == center {
                '|'
            } else {
                '-'
            }
        })
        .collect();
    format!("-1 [{}] +1", cells)
}

fn format_amplitude(amp: Complex<f64>) -> String {
    let re_zero = amp.re.abs() < AMPLITUDE_EPS;
    let im_zero = amp.im.abs() < AMPLITUDE_EPS;
    if im_zero && (amp.re - 1.0).abs() < AMPLITUDE_EPS {
        String::new()
    } else if im_zero {
        format!("{:.3}", amp.re)
    } else if re_zero {
        format!("{:.3}i", amp.im)
    } else {
        format!("({:.3}{:+.3}i)", amp.re, amp.im)
    }
}

/// Ket notation of the non-zero terms, e.g. `0.707|00⟩ + -0.707|11⟩`.
pub fn format_state(state: &QuantumState2Q) -> String {
    let terms: Vec<String> = state
        .amplitudes()
        .iter()
        .zip(KETS.iter())
        .filter(|(amp, _)| amp.norm_sqr() > AMPLITUDE_EPS)
        .map(|(amp, ket)| format!("{}{}", format_amplitude(*amp), ket))
        .collect();

    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}

fn render_panel(label: &str, z: f64, config: &ReportConfig) -> String {
    format!("{}: z = {:+.3}\n  {}\n", label, z, render_axis(z, config))
}

/// Full report for one scenario: title, final state, control and target panels.
pub fn render_outcome(outcome: &ScenarioOutcome, config: &ReportConfig) -> String {
    let scenario = &outcome.scenario;
    let pair = outcome.projection.pair;

    let mut out = String::new();
    out.push_str(&format!("━━━ {} ━━━\n", scenario.title()));
    out.push_str(&format!("Final state: {}\n", format_state(&outcome.state)));
    out.push_str(&render_panel(
        &format!("Control Qubit ({})", scenario.error_label()),
        pair.first,
        config,
    ));
    out.push_str(&render_panel(
        &format!("Target Qubit ({})", scenario.error_label()),
        pair.second,
        config,
    ));
    if let Some(warning) = outcome.projection.warning {
        out.push_str(&format!("WARNING: {}\n", warning));
    }
    out
}

/// Gate listing of a scenario under its circuit header.
pub fn render_circuit(scenario: &ErrorScenario) -> String {
    let gates: Vec<String> = scenario.gates().iter().map(|g| g.to_string()).collect();
    format!("=== {} ===\n{}\n", scenario.circuit_label(), gates.join(" -> "))
}
