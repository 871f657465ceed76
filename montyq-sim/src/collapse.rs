//! Quantum regime with an intermediate collapse
//!
//! The prize starts in superposition, but measuring it before the player
//! decides collapses the state to a uniform classical draw over the
//! three doors. From there the round proceeds classically: the player is
//! committed to door 0, the host opens an allowed door at random, the
//! strategy picks the final door. The collapse restores the classical
//! odds — this regime exists to show exactly that.

use crate::classical::RegimeStats;
use crate::error::{Result, SimulatorError};
use montyq_core::door::{third_door, DOOR_COUNT};
use montyq_core::Strategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Door the player commits to before the collapse
const COMMITTED_DOOR: u8 = 0;

/// Configuration for the collapse-regime Monte Carlo run
#[derive(Debug, Clone)]
pub struct CollapseConfig {
    /// Rounds played per strategy
    ///
    /// Default: 10_000
    pub rounds: usize,

    /// Random seed for reproducibility; `None` draws from entropy
    ///
    /// Default: None
    pub seed: Option<u64>,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            seed: None,
        }
    }
}

impl CollapseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Results of the collapse-regime run
#[derive(Debug, Clone)]
pub struct CollapseResults {
    pub keep: RegimeStats,
    pub switch: RegimeStats,
}

impl CollapseResults {
    /// Tally for the given strategy
    pub fn stats(&self, strategy: Strategy) -> RegimeStats {
        match strategy {
            Strategy::Keep => self.keep,
            Strategy::Switch => self.switch,
        }
    }
}

/// Play one collapsed round: measure the prize, continue classically
fn play_collapsed_round(rng: &mut StdRng, strategy: Strategy) -> bool {
    // measuring the prize superposition yields each door with equal weight
    let prize = rng.gen_range(0..DOOR_COUNT);

    let options: Vec<u8> = (0..DOOR_COUNT)
        .filter(|&door| door != COMMITTED_DOOR && door != prize)
        .collect();
    let revealed = options[rng.gen_range(0..options.len())];

    let final_pick = match strategy {
        Strategy::Keep => COMMITTED_DOOR,
        Strategy::Switch => third_door(COMMITTED_DOOR, revealed),
    };

    final_pick == prize
}

/// Run the collapse-regime comparison for both strategies
///
/// # Errors
/// [`SimulatorError::InvalidConfig`] when `rounds` is zero.
pub fn run_collapsed(config: &CollapseConfig) -> Result<CollapseResults> {
    if config.rounds == 0 {
        return Err(SimulatorError::InvalidConfig(
            "collapse regime needs at least one round".to_string(),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut results = CollapseResults {
        keep: RegimeStats::default(),
        switch: RegimeStats::default(),
    };

    for strategy in Strategy::ALL {
        for _ in 0..config.rounds {
            let won = play_collapsed_round(&mut rng, strategy);
            match strategy {
                Strategy::Keep => results.keep.record(won),
                Strategy::Switch => results.switch.record(won),
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_restores_classical_odds() {
        let config = CollapseConfig::new().with_rounds(20_000).with_seed(5);
        let results = run_collapsed(&config).unwrap();
        assert!((results.keep.probability() - 1.0 / 3.0).abs() < 0.02);
        assert!((results.switch.probability() - 2.0 / 3.0).abs() < 0.02);
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let config = CollapseConfig::new().with_rounds(1_000).with_seed(9);
        let first = run_collapsed(&config).unwrap();
        let second = run_collapsed(&config).unwrap();
        assert_eq!(first.keep, second.keep);
        assert_eq!(first.switch, second.switch);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = CollapseConfig::new().with_rounds(0);
        assert!(run_collapsed(&config).is_err());
    }
}
