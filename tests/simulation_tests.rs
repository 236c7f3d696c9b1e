//! Batch simulation and reporting through the public API.

use monopoly_sim::{
    bootstrap, run_all, run_ruleset, simulate_batch, GameConfig, GameRng, Ruleset,
    SimulationConfig,
};

fn small_settings() -> SimulationConfig {
    SimulationConfig {
        player_count: 4,
        games_per_ruleset: 12,
        resamples: 50,
        seed: 7,
        ..SimulationConfig::default()
    }
}

/// Results do not depend on how many threads ran the batch.
#[test]
fn test_batch_independent_of_thread_count() {
    let config = GameConfig::new(5).with_free_parking_bonus(true);

    let single = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(|| simulate_batch(&config, 16, 99))
        .unwrap();
    let several = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap()
        .install(|| simulate_batch(&config, 16, 99))
        .unwrap();

    assert_eq!(single, several);
}

/// Different seeds give different batches.
#[test]
fn test_batch_seed_matters() {
    let config = GameConfig::new(4);
    let a = simulate_batch(&config, 16, 1).unwrap();
    let b = simulate_batch(&config, 16, 2).unwrap();
    assert_ne!(a, b);
}

/// Every finished game has a valid, consistent record.
#[test]
fn test_batch_records_are_consistent() {
    let config = GameConfig::new(6).with_auctions(false);
    for result in simulate_batch(&config, 24, 3).unwrap() {
        assert!(result.winner.index() < 6);
        assert!(result.turns_elapsed > 0);
        assert_eq!(
            result.turn_of_last_first_purchase.is_some(),
            result.lap_of_last_first_purchase.is_some()
        );
        if let Some(lap) = result.lap_of_last_first_purchase {
            assert!(lap <= result.laps_completed);
        }
        if let Some(turn) = result.turn_of_last_first_purchase {
            assert!(turn < result.turns_elapsed);
        }
    }
}

/// One report per configured ruleset, each with matching rules.
#[test]
fn test_run_all_covers_every_ruleset() {
    let settings = small_settings();
    let reports = run_all(&settings).unwrap();

    assert_eq!(reports.len(), Ruleset::ALL.len());
    for (report, ruleset) in reports.iter().zip(Ruleset::ALL) {
        assert_eq!(report.ruleset, ruleset);
        assert_eq!(report.config.auction_unbought, ruleset.auctions());
        assert_eq!(report.config.free_parking_bonus, ruleset.free_parking_bonus());
        assert_eq!(report.games, 12);
        assert_eq!(report.wins.total(), 12);
        assert_eq!(report.summary.draws, 12 * 50);
    }
}

/// A ruleset report is the same whether run alone or with others.
#[test]
fn test_ruleset_report_standalone() {
    let settings = small_settings();
    let all = run_all(&settings).unwrap();
    let alone = run_ruleset(Ruleset::NoAuctions, &settings).unwrap();
    assert_eq!(all[2], alone);
}

/// Invalid settings fail before any game runs.
#[test]
fn test_run_all_rejects_invalid_settings() {
    let settings = SimulationConfig {
        rent_escalation_interval: 0,
        ..small_settings()
    };
    let err = run_all(&settings).unwrap_err();
    assert_eq!(
        err.to_string(),
        "rent escalation interval must be a positive number of turns"
    );
}

/// Bootstrap means stay within the range of the batch.
#[test]
fn test_bootstrap_within_batch_range() {
    let results = simulate_batch(&GameConfig::new(3), 20, 5).unwrap();
    let mut rng = GameRng::new(5);
    let summary = bootstrap(&results, 200, &mut rng);

    let min = results.iter().map(|r| r.turns_elapsed).min().unwrap();
    let max = results.iter().map(|r| r.turns_elapsed).max().unwrap();
    let mean = summary.mean_turns.unwrap();
    assert!(f64::from(min) <= mean && mean <= f64::from(max));

    let percent = summary.percent_all_purchased.unwrap();
    assert!((0.0..=100.0).contains(&percent));
}

/// Reports serialize for `--json` output and read back unchanged.
#[test]
fn test_reports_serialize() {
    let settings = SimulationConfig {
        rulesets: vec![Ruleset::Standard],
        ..small_settings()
    };
    let reports = run_all(&settings).unwrap();

    let json = serde_json::to_string(&reports).unwrap();
    assert!(json.contains("\"ruleset\":\"standard\""));

    let parsed: Vec<monopoly_sim::RulesetReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].games, reports[0].games);
    assert_eq!(parsed[0].wins, reports[0].wins);
}
