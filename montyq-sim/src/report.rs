//! Report rendering
//!
//! Pure formatting over values the simulators produced: a cross-regime
//! comparison table and a basis-indexed amplitude dump. Nothing here
//! performs I/O; callers print the rendered strings where they see fit.

use crate::classical::{ClassicalResults, PlayedRound};
use crate::collapse::CollapseResults;
use crate::result::StrategyOutcome;
use crate::uncollapsed;
use montyq_core::Strategy;
use montyq_state::AmplitudeRow;
use std::fmt;

/// The regimes a comparison row can belong to
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Regime {
    /// Classical Monte Carlo play
    Classical,
    /// Quantum play with the prize measured mid-game
    Collapsed,
    /// Quantum play with no measurement and no reveal
    Uncollapsed,
    /// Fully unitary pipeline
    Unitary,
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Classical => f.write_str("classical"),
            Regime::Collapsed => f.write_str("collapsed"),
            Regime::Uncollapsed => f.write_str("uncollapsed"),
            Regime::Unitary => f.write_str("unitary"),
        }
    }
}

/// One comparison row: a regime, a strategy and its win probability
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeRow {
    pub regime: Regime,
    pub strategy: Strategy,
    /// Measured or computed win probability
    pub probability: f64,
    /// Theoretical reference value for this regime and strategy
    pub expected: f64,
    /// Monte Carlo round count, when the regime sampled
    pub rounds: Option<usize>,
}

/// Cross-regime comparison of keep versus switch
#[derive(Debug, Clone, Default)]
pub struct ComparisonReport {
    rows: Vec<RegimeRow>,
    samples: Vec<PlayedRound>,
}

impl ComparisonReport {
    /// Start an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row
    pub fn push(&mut self, row: RegimeRow) {
        self.rows.push(row);
    }

    /// Attach example rounds shown below the table
    pub fn with_samples(mut self, samples: Vec<PlayedRound>) -> Self {
        self.samples = samples;
        self
    }

    /// The collected rows, in insertion order
    pub fn rows(&self) -> &[RegimeRow] {
        &self.rows
    }

    /// Add both rows of a classical Monte Carlo run
    pub fn add_classical(&mut self, results: &ClassicalResults) {
        for strategy in Strategy::ALL {
            let stats = results.stats(strategy);
            self.push(RegimeRow {
                regime: Regime::Classical,
                strategy,
                probability: stats.probability(),
                expected: classical_expectation(strategy),
                rounds: Some(stats.rounds()),
            });
        }
    }

    /// Add both rows of a collapse-regime run
    pub fn add_collapsed(&mut self, results: &CollapseResults) {
        for strategy in Strategy::ALL {
            let stats = results.stats(strategy);
            self.push(RegimeRow {
                regime: Regime::Collapsed,
                strategy,
                probability: stats.probability(),
                expected: classical_expectation(strategy),
                rounds: Some(stats.rounds()),
            });
        }
    }

    /// Add both rows of the static no-measurement baseline
    pub fn add_uncollapsed(&mut self) {
        for strategy in Strategy::ALL {
            self.push(RegimeRow {
                regime: Regime::Uncollapsed,
                strategy,
                probability: uncollapsed::strategy_probability(strategy),
                expected: 1.0 / 3.0,
                rounds: None,
            });
        }
    }

    /// Add one unitary-pipeline outcome
    pub fn add_unitary(&mut self, outcome: &StrategyOutcome) {
        self.push(RegimeRow {
            regime: Regime::Unitary,
            strategy: outcome.strategy,
            probability: outcome.probability,
            expected: classical_expectation(outcome.strategy),
            rounds: None,
        });
    }
}

/// Theoretical win probability under host-reveal regimes
fn classical_expectation(strategy: Strategy) -> f64 {
    match strategy {
        Strategy::Keep => 1.0 / 3.0,
        Strategy::Switch => 2.0 / 3.0,
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monty Hall win probabilities, keep vs switch")?;
        writeln!(
            f,
            "{:<13} {:<8} {:>12} {:>10} {:>10}",
            "regime", "strategy", "P(win)", "expected", "rounds"
        )?;
        writeln!(f, "{}", "-".repeat(57))?;
        for row in &self.rows {
            let rounds = row
                .rounds
                .map(|n| n.to_string())
                .unwrap_or_else(|| "exact".to_string());
            writeln!(
                f,
                "{:<13} {:<8} {:>12.4} {:>10.4} {:>10}",
                row.regime.to_string(),
                row.strategy.to_string(),
                row.probability,
                row.expected,
                rounds
            )?;
        }

        if !self.samples.is_empty() {
            writeln!(f)?;
            writeln!(f, "example rounds:")?;
            for round in &self.samples {
                writeln!(
                    f,
                    "  {:<6} prize={} pick={} revealed={} final={} -> {}",
                    round.strategy.to_string(),
                    round.prize,
                    round.initial_pick,
                    round.revealed,
                    round.final_pick,
                    if round.won { "won" } else { "lost" }
                )?;
            }
        }
        Ok(())
    }
}

/// Render a basis-indexed amplitude table
///
/// Rows with probability below `threshold` are elided and summarized on
/// the final line.
pub fn render_amplitude_table(rows: &[AmplitudeRow], threshold: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:<26} {:>22} {:>10}\n",
        "index", "registers", "amplitude", "P"
    ));

    let mut elided = 0usize;
    for row in rows {
        if row.probability < threshold {
            elided += 1;
            continue;
        }
        out.push_str(&format!(
            "{:>5}  {:<26} {:>10.6} {:+.6}i {:>10.6}\n",
            row.index,
            row.state.to_string(),
            row.amplitude.re,
            row.amplitude.im,
            row.probability
        ));
    }
    if elided > 0 {
        out.push_str(&format!("  ({} rows below {:.1e} elided)\n", elided, threshold));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use montyq_state::StateEngine;

    #[test]
    fn test_report_orders_rows_and_formats() {
        let mut report = ComparisonReport::new();
        report.add_uncollapsed();
        assert_eq!(report.rows().len(), 2);

        let rendered = report.to_string();
        assert!(rendered.contains("uncollapsed"));
        assert!(rendered.contains("keep"));
        assert!(rendered.contains("switch"));
        assert!(rendered.contains("exact"));
    }

    #[test]
    fn test_amplitude_table_elides_empty_rows() {
        let engine = StateEngine::new();
        let psi = engine.prepare_initial();
        let table = engine.amplitude_table(&psi);

        let rendered = render_amplitude_table(&table, 1e-12);
        // three populated rows plus header and elision note
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains("61 rows below"));
    }
}
