//! Running batches of independent games.
//!
//! ## Determinism
//!
//! Game `i` of a batch always plays with `GameRng::for_game(seed, i)`, and
//! results come back in game order, so a batch is reproducible from its
//! seed regardless of thread count.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig, GameRng, PlayerId, PlayerMap, Ruleset, SimulationConfig};
use crate::game::{simulate_game, GameResult};

use super::bootstrap::{bootstrap, BootstrapSummary};

/// Play `games` independent games in parallel.
///
/// The configuration is validated once up front; an invalid one runs no
/// games.
pub fn simulate_batch(
    config: &GameConfig,
    games: usize,
    seed: u64,
) -> Result<Vec<GameResult>, ConfigError> {
    config.validate()?;
    let start = Instant::now();

    let results = (0..games)
        .into_par_iter()
        .map(|i| simulate_game(config.clone(), GameRng::for_game(seed, i as u64)))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("simulated {games} games in {:.1?}", start.elapsed());
    Ok(results)
}

/// Games won by each player over a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    wins: PlayerMap<u32>,
}

impl WinTally {
    /// Empty tally for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            wins: PlayerMap::with_value(player_count, 0),
        }
    }

    /// Tally the winners of `results`.
    #[must_use]
    pub fn from_results(player_count: usize, results: &[GameResult]) -> Self {
        let mut tally = Self::new(player_count);
        for result in results {
            tally.record(result.winner);
        }
        tally
    }

    /// Count one win.
    pub fn record(&mut self, winner: PlayerId) {
        self.wins[winner] += 1;
    }

    /// Wins for one player.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.wins[player]
    }

    /// Games tallied.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.wins.values().sum()
    }

    /// Wins per player, in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, u32)> + '_ {
        self.wins.iter().map(|(id, &wins)| (id, wins))
    }
}

/// Everything measured for one ruleset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RulesetReport {
    pub ruleset: Ruleset,
    pub config: GameConfig,
    pub games: usize,
    pub summary: BootstrapSummary,
    pub wins: WinTally,
}

/// Simulate and summarize one ruleset under `settings`.
///
/// The batch and bootstrap streams are derived from the base seed and the
/// ruleset label, so each ruleset is reproducible on its own.
pub fn run_ruleset(
    ruleset: Ruleset,
    settings: &SimulationConfig,
) -> Result<RulesetReport, ConfigError> {
    let config = settings.game_config(ruleset);
    let streams = GameRng::new(settings.seed).for_context(ruleset.label());

    let results = simulate_batch(&config, settings.games_per_ruleset, streams.seed())?;
    let mut resampler = streams.for_context("bootstrap");
    let summary = bootstrap(&results, settings.resamples, &mut resampler);
    let wins = WinTally::from_results(config.player_count, &results);

    log::info!(
        "{ruleset}: {} games, mean turns {}",
        results.len(),
        summary
            .mean_turns
            .map_or_else(|| "n/a".to_string(), |turns| format!("{turns:.1}"))
    );

    Ok(RulesetReport {
        ruleset,
        config,
        games: results.len(),
        summary,
        wins,
    })
}

/// Run every ruleset in `settings`, in order.
pub fn run_all(settings: &SimulationConfig) -> Result<Vec<RulesetReport>, ConfigError> {
    settings.validate()?;
    settings
        .rulesets
        .iter()
        .map(|&ruleset| run_ruleset(ruleset, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_is_deterministic() {
        let config = GameConfig::new(3);
        let a = simulate_batch(&config, 8, 11).unwrap();
        let b = simulate_batch(&config, 8, 11).unwrap();
        assert_eq!(a.len(), 8);
        assert_eq!(a, b);
    }

    #[test]
    fn test_batch_matches_sequential_games() {
        let config = GameConfig::new(4).with_auctions(false);
        let batch = simulate_batch(&config, 4, 5).unwrap();

        for (i, result) in batch.iter().enumerate() {
            let single = simulate_game(config.clone(), GameRng::for_game(5, i as u64)).unwrap();
            assert_eq!(*result, single);
        }
    }

    #[test]
    fn test_invalid_batch_config() {
        let config = GameConfig::new(1);
        assert!(matches!(
            simulate_batch(&config, 10, 0),
            Err(ConfigError::TooFewPlayers { count: 1 })
        ));
    }

    #[test]
    fn test_empty_batch() {
        let results = simulate_batch(&GameConfig::new(2), 0, 0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_win_tally() {
        let mut tally = WinTally::new(3);
        tally.record(PlayerId::new(2));
        tally.record(PlayerId::new(2));
        tally.record(PlayerId::new(0));

        assert_eq!(tally.wins(PlayerId::new(0)), 1);
        assert_eq!(tally.wins(PlayerId::new(1)), 0);
        assert_eq!(tally.wins(PlayerId::new(2)), 2);
        assert_eq!(tally.total(), 3);
        assert_eq!(
            tally.iter().map(|(_, wins)| wins).collect::<Vec<_>>(),
            vec![1, 0, 2]
        );
    }

    #[test]
    fn test_run_ruleset_report() {
        let settings = SimulationConfig {
            player_count: 3,
            games_per_ruleset: 6,
            resamples: 20,
            ..SimulationConfig::default()
        };

        let report = run_ruleset(Ruleset::NoAuctions, &settings).unwrap();

        assert_eq!(report.games, 6);
        assert_eq!(report.wins.total(), 6);
        assert_eq!(report.summary.draws, 120);
        assert!(!report.config.auction_unbought);
        assert!(report.summary.mean_turns.is_some());
        assert_eq!(report, run_ruleset(Ruleset::NoAuctions, &settings).unwrap());
    }

    #[test]
    fn test_run_all_in_order() {
        let settings = SimulationConfig {
            player_count: 2,
            games_per_ruleset: 2,
            resamples: 2,
            rulesets: vec![Ruleset::FreeParkingBonus, Ruleset::Standard],
            ..SimulationConfig::default()
        };

        let reports = run_all(&settings).unwrap();
        let order: Vec<_> = reports.iter().map(|r| r.ruleset).collect();
        assert_eq!(order, vec![Ruleset::FreeParkingBonus, Ruleset::Standard]);
    }
}
