//! Strategy simulators for the Monty Hall game
//!
//! Three regimes answer the same question — how often does "keep" win,
//! how often does "switch" win — with different physics:
//!
//! - [`classical`] — Monte Carlo over fully classical random play.
//! - [`collapse`] — quantum play where the prize superposition is
//!   measured (collapsed) before the player decides; the collapse
//!   restores classical behavior.
//! - [`simulator`] — the fully unitary formulation: no measurement until
//!   scoring, the host's reveal and the player's switch acting as
//!   unitary operators on a 64-dimensional statevector. Exact linear
//!   algebra, not sampling.
//! - [`uncollapsed`] — the degenerate no-measurement baseline where the
//!   reveal never happens and neither strategy gains an edge.
//!
//! The unitary core exposes the
//! [`simulate_strategy`](simulator::StrategySimulator::simulate_strategy)
//! contract: a strategy label in, a win probability out. [`report`]
//! renders the cross-regime comparison; nothing in this crate prints.

pub mod classical;
pub mod collapse;
pub mod config;
pub mod crosscheck;
pub mod error;
pub mod report;
pub mod result;
pub mod simulator;
pub mod uncollapsed;

pub use classical::{run_classical, ClassicalConfig, ClassicalResults, PlayedRound, RegimeStats};
pub use collapse::{run_collapsed, CollapseConfig, CollapseResults};
pub use config::SimulatorConfig;
pub use crosscheck::{verify_preparation, InternalWavefunction, PreparationCheck, WavefunctionBackend};
pub use error::{Result, SimulatorError};
pub use report::{ComparisonReport, Regime, RegimeRow};
pub use result::{Diagnostic, OperatorKind, Stage, StageSnapshot, StrategyOutcome};
pub use simulator::StrategySimulator;
