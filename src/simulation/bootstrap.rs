//! Bootstrap estimates over completed games.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;
use crate::game::GameResult;

/// Means and percentages estimated by resampling a batch of results.
///
/// Every statistic is `None` when it had no samples to average over.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BootstrapSummary {
    /// Total results drawn: resamples times batch size.
    pub draws: usize,

    /// Mean turns elapsed per game.
    pub mean_turns: Option<f64>,

    /// Mean lap at which every space had been bought, over draws that got
    /// that far.
    pub mean_first_purchase_lap: Option<f64>,

    /// Percent of draws in which every space was bought at least once.
    pub percent_all_purchased: Option<f64>,
}

/// Resample `results` with replacement `resamples` times.
///
/// Each resample draws as many results as the batch holds. Turn counts are
/// averaged over every draw; the first-purchase lap only over draws where
/// it was reached.
pub fn bootstrap<R: RandomSource + ?Sized>(
    results: &[GameResult],
    resamples: usize,
    rng: &mut R,
) -> BootstrapSummary {
    if results.is_empty() || resamples == 0 {
        return BootstrapSummary::default();
    }

    let mut draws = 0usize;
    let mut turns = 0u64;
    let mut laps = 0u64;
    let mut lap_samples = 0usize;

    for _ in 0..resamples {
        for _ in 0..results.len() {
            let result = &results[rng.select_index(results.len())];
            draws += 1;
            turns += u64::from(result.turns_elapsed);
            if let Some(lap) = result.lap_of_last_first_purchase {
                laps += u64::from(lap);
                lap_samples += 1;
            }
        }
    }

    BootstrapSummary {
        draws,
        mean_turns: mean(turns, draws),
        mean_first_purchase_lap: mean(laps, lap_samples),
        percent_all_purchased: Some(100.0 * lap_samples as f64 / draws as f64),
    }
}

fn mean(total: u64, samples: usize) -> Option<f64> {
    (samples > 0).then(|| total as f64 / samples as f64)
}
