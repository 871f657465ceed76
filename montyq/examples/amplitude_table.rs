//! Dump the stage-by-stage amplitude tables of the unitary pipeline
//!
//! ```bash
//! cargo run --example amplitude_table
//! ```

use montyq::sim::report::render_amplitude_table;
use montyq::{SimulatorConfig, Strategy, StrategySimulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let simulator = StrategySimulator::new(SimulatorConfig::default().with_trace(true))?;

    for strategy in Strategy::ALL {
        let outcome = simulator.run(strategy)?;
        println!("=== strategy: {} ===", strategy);

        if let Some(trace) = &outcome.trace {
            for snapshot in trace {
                println!("-- stage: {}", snapshot.stage);
                let table = simulator.engine().amplitude_table(&snapshot.state);
                print!("{}", render_amplitude_table(&table, 1e-12));
            }
        }

        println!("win probability: {:.6}\n", outcome.probability);
    }

    Ok(())
}
