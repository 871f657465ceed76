//! Quantum Monty Hall laboratory
//!
//! montyq models the Monty Hall game under three regimes and compares
//! the win probabilities of keeping versus switching doors:
//!
//! - **classical** — Monte Carlo over random play (keep 1/3, switch 2/3);
//! - **collapsed** — quantum play where measuring the prize mid-game
//!   restores the classical odds;
//! - **unitary** — the game as pure linear algebra: a 64-dimensional
//!   statevector over (prize, player, host) door registers, the host's
//!   reveal and the player's switch as unitary operators, and win
//!   probability read off the final amplitudes (keep exactly 1/3,
//!   switch exactly 2/3).
//!
//! This crate re-exports the workspace members; see the `examples/`
//! directory for runnable comparisons.
//!
//! # Example
//! ```
//! use montyq::{Strategy, SimulatorConfig, StrategySimulator};
//!
//! let simulator = StrategySimulator::new(SimulatorConfig::default()).unwrap();
//! let switch = simulator.simulate_strategy(Strategy::Switch).unwrap();
//! assert!((switch - 2.0 / 3.0).abs() < 1e-9);
//! ```

pub use montyq_core as core;
pub use montyq_gates as gates;
pub use montyq_sim as sim;
pub use montyq_state as state;

pub use montyq_core::{BasisState, Strategy, DIMENSION, PLAYER_HOST_DIMENSION};
pub use montyq_sim::{
    run_classical, run_collapsed, ClassicalConfig, CollapseConfig, ComparisonReport,
    SimulatorConfig, StrategyOutcome, StrategySimulator,
};
pub use montyq_state::{StateEngine, StateVector};
