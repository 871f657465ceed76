//! Run every regime and print the keep-vs-switch comparison
//!
//! ```bash
//! cargo run --example compare_strategies
//! ```

use montyq::sim::{verify_preparation, InternalWavefunction, PreparationCheck};
use montyq::{
    run_classical, run_collapsed, ClassicalConfig, CollapseConfig, ComparisonReport,
    SimulatorConfig, Strategy, StrategySimulator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rounds = 10_000;

    let classical = run_classical(
        &ClassicalConfig::new()
            .with_rounds(rounds)
            .with_sample_limit(5),
    )?;
    let collapsed = run_collapsed(&CollapseConfig::new().with_rounds(rounds))?;
    let simulator = StrategySimulator::new(SimulatorConfig::default())?;

    let mut report = ComparisonReport::new();
    report.add_classical(&classical);
    report.add_collapsed(&collapsed);
    report.add_uncollapsed();
    for strategy in Strategy::ALL {
        let outcome = simulator.run(strategy)?;
        for diagnostic in &outcome.diagnostics {
            eprintln!("{}", diagnostic);
        }
        report.add_unitary(&outcome);
    }

    println!("{}", report.with_samples(classical.samples.clone()));

    // opportunistic sanity check of the prize preparation
    let backend = InternalWavefunction;
    match verify_preparation(Some(&backend), 1e-9)? {
        PreparationCheck::Consistent {
            backend,
            max_deviation,
        } => println!(
            "preparation cross-check ({}): consistent, max deviation {:.1e}",
            backend, max_deviation
        ),
        PreparationCheck::Inconsistent {
            backend,
            max_deviation,
        } => eprintln!(
            "preparation cross-check ({}): INCONSISTENT, max deviation {:.3e}",
            backend, max_deviation
        ),
        PreparationCheck::Skipped => {}
    }

    Ok(())
}
