//! Classical Monte Carlo regime
//!
//! The baseline the quantum regimes are compared against: fully random
//! play, repeated many times. The prize and the player's first pick are
//! drawn uniformly, the host opens a random empty non-picked door, the
//! strategy decides the final door. No statevector is involved and no
//! RNG state is shared with the quantum core.

use crate::error::{Result, SimulatorError};
use montyq_core::door::{third_door, DOOR_COUNT};
use montyq_core::Strategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the classical Monte Carlo run
#[derive(Debug, Clone)]
pub struct ClassicalConfig {
    /// Rounds played per strategy
    ///
    /// Default: 10_000
    pub rounds: usize,

    /// Random seed for reproducibility; `None` draws from entropy
    ///
    /// Default: None
    pub seed: Option<u64>,

    /// How many played rounds to keep per strategy as a report sample
    ///
    /// Default: 10
    pub sample_limit: usize,
}

impl Default for ClassicalConfig {
    fn default() -> Self {
        Self {
            rounds: 10_000,
            seed: None,
            sample_limit: 10,
        }
    }
}

impl ClassicalConfig {
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

    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }
}

/// One fully played round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedRound {
    pub prize: u8,
    pub initial_pick: u8,
    pub revealed: u8,
    pub final_pick: u8,
    pub strategy: Strategy,
    pub won: bool,
}

/// Win/loss tally for one strategy under one regime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegimeStats {
    pub wins: usize,
    pub losses: usize,
}

impl RegimeStats {
    /// Total rounds tallied
    pub fn rounds(&self) -> usize {
        self.wins + self.losses
    }

    /// Empirical win probability
    pub fn probability(&self) -> f64 {
        let rounds = self.rounds();
        if rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / rounds as f64
    }

    /// Record one round
    pub fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}

/// Results of the classical Monte Carlo run
#[derive(Debug, Clone)]
pub struct ClassicalResults {
    pub keep: RegimeStats,
    pub switch: RegimeStats,
    /// First few rounds per strategy, for the report
    pub samples: Vec<PlayedRound>,
}

impl ClassicalResults {
    /// Tally for the given strategy
    pub fn stats(&self, strategy: Strategy) -> RegimeStats {
        match strategy {
            Strategy::Keep => self.keep,
            Strategy::Switch => self.switch,
        }
    }
}

/// Play one round with an explicit RNG
pub fn play_round(rng: &mut StdRng, strategy: Strategy) -> PlayedRound {
    let prize = rng.gen_range(0..DOOR_COUNT);
    let initial_pick = rng.gen_range(0..DOOR_COUNT);

    // the host opens an empty door the player does not hold
    let options: Vec<u8> = (0..DOOR_COUNT)
        .filter(|&door| door != initial_pick && door != prize)
        .collect();
    let revealed = options[rng.gen_range(0..options.len())];

    let final_pick = match strategy {
        Strategy::Keep => initial_pick,
        Strategy::Switch => third_door(initial_pick, revealed),
    };

    PlayedRound {
        prize,
        initial_pick,
        revealed,
        final_pick,
        strategy,
        won: final_pick == prize,
    }
}

/// Run the classical Monte Carlo comparison for both strategies
///
/// # Errors
/// [`SimulatorError::InvalidConfig`] when `rounds` is zero.
pub fn run_classical(config: &ClassicalConfig) -> Result<ClassicalResults> {
    if config.rounds == 0 {
        return Err(SimulatorError::InvalidConfig(
            "classical regime needs at least one round".to_string(),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut results = ClassicalResults {
        keep: RegimeStats::default(),
        switch: RegimeStats::default(),
        samples: Vec::new(),
    };

    for strategy in Strategy::ALL {
        let mut kept = 0;
        for _ in 0..config.rounds {
            let round = play_round(&mut rng, strategy);
            match strategy {
                Strategy::Keep => results.keep.record(round.won),
                Strategy::Switch => results.switch.record(round.won),
            }
            if kept < config.sample_limit {
                results.samples.push(round);
                kept += 1;
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_never_reveals_prize_or_pick() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            for strategy in Strategy::ALL {
                let round = play_round(&mut rng, strategy);
                assert_ne!(round.revealed, round.prize);
                assert_ne!(round.revealed, round.initial_pick);
                assert!(round.prize < DOOR_COUNT);
            }
        }
    }

    #[test]
    fn test_switch_lands_on_remaining_door() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let round = play_round(&mut rng, Strategy::Switch);
            assert_ne!(round.final_pick, round.initial_pick);
            assert_ne!(round.final_pick, round.revealed);
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let config = ClassicalConfig::new().with_rounds(1_000).with_seed(42);
        let first = run_classical(&config).unwrap();
        let second = run_classical(&config).unwrap();
        assert_eq!(first.keep, second.keep);
        assert_eq!(first.switch, second.switch);
        assert_eq!(first.samples, second.samples);
    }

    #[test]
    fn test_estimates_near_theory() {
        let config = ClassicalConfig::new().with_rounds(20_000).with_seed(3);
        let results = run_classical(&config).unwrap();
        assert!((results.keep.probability() - 1.0 / 3.0).abs() < 0.02);
        assert!((results.switch.probability() - 2.0 / 3.0).abs() < 0.02);
    }

    #[test]
    fn test_sample_limit_bounds_samples() {
        let config = ClassicalConfig::new()
            .with_rounds(100)
            .with_seed(1)
            .with_sample_limit(3);
        let results = run_classical(&config).unwrap();
        assert_eq!(results.samples.len(), 6); // 3 per strategy
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = ClassicalConfig::new().with_rounds(0);
        assert!(run_classical(&config).is_err());
    }
}
