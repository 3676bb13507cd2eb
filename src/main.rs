//! CNOT error propagation demo: bit-flip and phase-flip scenarios rendered as text plots.

use std::env;

use log::info;

use cnot_error_propagation::bloch::{BlochZExtractor, ExtractorConfig};
use cnot_error_propagation::report::{render_circuit, render_outcome, ReportConfig};
use cnot_error_propagation::scenario::{run_scenario, ErrorScenario};

fn parse_args<I>(mut args: I) -> Result<ExtractorConfig, Box<dyn std::error::Error>>
where
    I: Iterator<Item = String>,
{
    let mut config = ExtractorConfig::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => config.strict = true,
            "--tolerance" => {
                let value = args.next().ok_or("--tolerance requires a value")?;
                config = config.with_tolerance(value.parse()?)?;
            }
            other => return Err(format!("unknown argument: {}", other).into()),
        }
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = parse_args(env::args().skip(1))?;
    info!("Extractor config: {:?}", config);
    let extractor = BlochZExtractor::new(config);
    let report_config = ReportConfig::default();

    let scenarios = ErrorScenario::standard();
    for scenario in &scenarios {
        let outcome = run_scenario(scenario, &extractor)?;
        println!("{}", render_outcome(&outcome, &report_config));
    }

    for scenario in &scenarios {
        println!("{}", render_circuit(scenario));
    }

    Ok(())
}
