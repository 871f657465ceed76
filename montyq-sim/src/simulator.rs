//! The fully unitary strategy simulator

use crate::config::SimulatorConfig;
use crate::error::{Result, SimulatorError};
use crate::result::{Diagnostic, OperatorKind, Stage, StageSnapshot, StrategyOutcome};
use montyq_core::{Strategy, DIMENSION};
use montyq_gates::{extended_switch_operator, reveal_operator, unitarity_deviation};
use montyq_state::{StateEngine, StateVector};
use num_complex::Complex64;

/// Unitary Monty Hall simulator
///
/// Owns the state engine and the two precomputed operators; both are
/// built once at construction, unitarity-checked, and reused read-only
/// across strategies. Statevectors are created fresh per run.
///
/// The pipeline is fixed and non-branching: prepare the initial state,
/// apply the reveal operator, apply the switch operator when the
/// strategy says so, read off the win probability. Everything is exact
/// linear algebra; the reported probability is a quantum expectation,
/// not a sample.
///
/// # Example
/// ```
/// use montyq_core::Strategy;
/// use montyq_sim::{SimulatorConfig, StrategySimulator};
///
/// let simulator = StrategySimulator::new(SimulatorConfig::default()).unwrap();
/// let keep = simulator.simulate_strategy(Strategy::Keep).unwrap();
/// let switch = simulator.simulate_strategy(Strategy::Switch).unwrap();
/// assert!((keep - 1.0 / 3.0).abs() < 1e-9);
/// assert!((switch - 2.0 / 3.0).abs() < 1e-9);
/// ```
pub struct StrategySimulator {
    config: SimulatorConfig,
    engine: StateEngine,
    reveal: Vec<Complex64>,
    switch: Vec<Complex64>,
    diagnostics: Vec<Diagnostic>,
}

impl StrategySimulator {
    /// Build the operators and verify them
    ///
    /// # Errors
    /// [`SimulatorError::InvalidConfig`] for a bad configuration, or
    /// [`SimulatorError::UnitarityViolation`] when a check fails and the
    /// configuration promotes violations to errors. Otherwise violations
    /// are kept as diagnostics on every outcome this simulator produces.
    pub fn new(config: SimulatorConfig) -> Result<Self> {
        config.validate()?;

        let reveal = reveal_operator();
        let switch = extended_switch_operator();

        let mut diagnostics = Vec::new();
        for (kind, operator) in [
            (OperatorKind::Reveal, &reveal),
            (OperatorKind::Switch, &switch),
        ] {
            let deviation = unitarity_deviation(operator, DIMENSION);
            if deviation > config.unitarity_tolerance {
                if config.fail_on_unitarity_violation {
                    return Err(SimulatorError::UnitarityViolation {
                        operator: kind,
                        deviation,
                        tolerance: config.unitarity_tolerance,
                    });
                }
                diagnostics.push(Diagnostic::UnitarityDeviation {
                    operator: kind,
                    deviation,
                    tolerance: config.unitarity_tolerance,
                });
            }
        }

        Ok(Self {
            config,
            engine: StateEngine::new(),
            reveal,
            switch,
            diagnostics,
        })
    }

    /// Construction-time diagnostics (empty when every check passed)
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The configuration this simulator was built with
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Win probability for one strategy
    ///
    /// The core contract: deterministic, exact to floating precision,
    /// 1/3 for keeping and 2/3 for switching.
    pub fn simulate_strategy(&self, strategy: Strategy) -> Result<f64> {
        self.run(strategy).map(|outcome| outcome.probability)
    }

    /// Like [`StrategySimulator::simulate_strategy`] but parses the
    /// strategy label first
    pub fn simulate_strategy_named(&self, label: &str) -> Result<f64> {
        let strategy: Strategy = label.parse()?;
        self.simulate_strategy(strategy)
    }

    /// Run the full pipeline for one strategy
    ///
    /// # Errors
    /// State errors are fatal: a dimension mismatch, a norm drift beyond
    /// tolerance or amplitude leakage onto invalid-door states aborts
    /// the run before a probability is produced.
    pub fn run(&self, strategy: Strategy) -> Result<StrategyOutcome> {
        let mut trace = self.config.collect_trace.then(Vec::new);

        let initial = self.engine.prepare_initial();
        self.check_stage(&initial)?;
        Self::snapshot(&mut trace, Stage::Initial, &initial);

        let revealed = self.engine.apply(&self.reveal, &initial)?;
        self.check_stage(&revealed)?;
        Self::snapshot(&mut trace, Stage::Revealed, &revealed);

        let decided = match strategy {
            Strategy::Switch => {
                let switched = self.engine.apply(&self.switch, &revealed)?;
                self.check_stage(&switched)?;
                switched
            }
            Strategy::Keep => revealed,
        };
        Self::snapshot(&mut trace, Stage::Decided, &decided);

        let probability = self.engine.win_probability(&decided);

        let mut outcome = StrategyOutcome::new(strategy, probability)
            .with_diagnostics(self.diagnostics.clone());
        if let Some(trace) = trace {
            outcome = outcome.with_trace(trace);
        }
        Ok(outcome)
    }

    /// Per-stage invariants: unit probability mass, closed invalid
    /// subspace
    fn check_stage(&self, psi: &StateVector) -> Result<()> {
        let mass = psi.norm_sqr_sum();
        if (mass - 1.0).abs() > self.config.norm_tolerance {
            return Err(montyq_state::StateError::NotNormalized { mass }.into());
        }
        self.engine
            .check_valid_subspace(psi, self.config.norm_tolerance)?;
        Ok(())
    }

    fn snapshot(trace: &mut Option<Vec<StageSnapshot>>, stage: Stage, state: &StateVector) {
        if let Some(trace) = trace {
            trace.push(StageSnapshot {
                stage,
                state: state.clone(),
            });
        }
    }

    /// Borrow the engine, e.g. to render amplitude tables from snapshots
    pub fn engine(&self) -> &StateEngine {
        &self.engine
    }
}
