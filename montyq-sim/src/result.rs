//! Simulation result types

use montyq_core::Strategy;
use montyq_state::StateVector;
use std::fmt;

/// Which operator a diagnostic refers to
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OperatorKind {
    /// The host's 64×64 reveal operator
    Reveal,
    /// The player's switch operator extended to the full space
    Switch,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Reveal => f.write_str("reveal"),
            OperatorKind::Switch => f.write_str("switch"),
        }
    }
}

/// Stages of the fixed strategy pipeline
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Prize superposition prepared, player committed, host idle
    Initial,
    /// Reveal operator applied
    Revealed,
    /// Strategy applied: switch operator for "switch", no-op for "keep"
    Decided,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Initial => f.write_str("initial"),
            Stage::Revealed => f.write_str("revealed"),
            Stage::Decided => f.write_str("decided"),
        }
    }
}

/// A statevector snapshot taken after one pipeline stage
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    pub stage: Stage,
    pub state: StateVector,
}

/// Non-fatal findings surfaced alongside a result
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// An operator deviated from U†U = I beyond the tolerance; the
    /// simulation proceeded anyway
    UnitarityDeviation {
        operator: OperatorKind,
        deviation: f64,
        tolerance: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnitarityDeviation {
                operator,
                deviation,
                tolerance,
            } => write!(
                f,
                "warning: {} operator deviates from unitarity by {:.3e} (tolerance {:.1e})",
                operator, deviation, tolerance
            ),
        }
    }
}

/// Outcome of one unitary strategy simulation
#[derive(Debug, Clone)]
pub struct StrategyOutcome {
    /// Strategy that was simulated
    pub strategy: Strategy,
    /// Win probability extracted from the final state
    pub probability: f64,
    /// Construction-time diagnostics (empty when all checks passed)
    pub diagnostics: Vec<Diagnostic>,
    /// Per-stage snapshots, when trace collection was enabled
    pub trace: Option<Vec<StageSnapshot>>,
}

impl StrategyOutcome {
    /// Create an outcome with no diagnostics or trace attached
    pub fn new(strategy: Strategy, probability: f64) -> Self {
        Self {
            strategy,
            probability,
            diagnostics: Vec::new(),
            trace: None,
        }
    }

    /// Attach diagnostics
    pub fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Attach a stage trace
    pub fn with_trace(mut self, trace: Vec<StageSnapshot>) -> Self {
        self.trace = Some(trace);
        self
    }
}
