use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::constants::{ELO_BASE, ELO_SCALE};
use crate::error::{ConfigError, OddsError};

/// Classical two-player Elo expected score of `rating` against `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + ELO_BASE.powf((opponent - rating) / ELO_SCALE))
}

/// Win probability of every team in the roster using the default
/// configuration (summed ratings, base 10, scale 400).
pub fn calculate_odds<T: AsRef<[f64]>>(roster: &[T]) -> Result<Vec<f64>, OddsError> {
    OddsEngine::default().odds(roster)
}

/// Converts rosters of member ratings into normalized win probabilities.
///
/// The engine holds only its configuration, so a single instance can be
/// shared across threads and calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct OddsEngine {
    config: EngineConfig,
}

impl OddsEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(OddsEngine { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Calculate the probability of each team winning.
    ///
    /// Each team's combined strength `R_i` is turned into a weight
    /// `base^(R_i / scale)` and the weights are normalized to sum to 1.
    /// With two single-member teams this is exactly [`expected_score`].
    ///
    /// # Arguments
    /// * `roster` - One slice of member ratings per team slot; a slot may be empty
    ///
    /// # Returns
    /// One probability per team, in roster order
    ///
    /// # Errors
    /// * [`OddsError::InvalidRoster`] if the roster has no teams
    /// * [`OddsError::InvalidRating`] if any rating is NaN or infinite
    /// * [`OddsError::StrengthOverflow`] if a scaled strength is not representable,
    ///   which needs hundreds of members rated near `f64::MAX`
    pub fn odds<T: AsRef<[f64]>>(&self, roster: &[T]) -> Result<Vec<f64>, OddsError> {
        let strengths = self.scaled_strengths(roster)?;

        // Weights are taken relative to the strongest team so large
        // strengths don't overflow; the ratio between weights is unchanged.
        let max_strength = strengths.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let weights: Vec<f64> = strengths
            .iter()
            .map(|&s| self.config.base.powf(s - max_strength))
            .collect();

        // The strongest team always has weight 1, so the total is never 0
        let total: f64 = weights.iter().sum();
        let odds: Vec<f64> = weights.iter().map(|w| w / total).collect();

        debug!(teams = odds.len(), ?strengths, ?odds, "calculated odds");
        Ok(odds)
    }

    /// Combined strength of each team in units of `scale`, after validating
    /// every rating. Ratings are scaled before aggregation so that sums of
    /// large finite ratings stay finite.
    pub fn scaled_strengths<T: AsRef<[f64]>>(&self, roster: &[T]) -> Result<Vec<f64>, OddsError> {
        if roster.is_empty() {
            warn!("rejected roster with no teams");
            return Err(OddsError::InvalidRoster);
        }

        for (team, ratings) in roster.iter().enumerate() {
            if let Some((member, &value)) =
                ratings.as_ref().iter().enumerate().find(|(_, r)| !r.is_finite())
            {
                warn!(team, member, value, "rejected non-finite rating");
                return Err(OddsError::InvalidRating { team, member, value });
            }
        }

        roster
            .iter()
            .enumerate()
            .map(|(team, ratings)| {
                let scaled: Vec<f64> =
                    ratings.as_ref().iter().map(|r| r / self.config.scale).collect();
                let strength = self.config.aggregation.combine(&scaled);
                if strength.is_finite() {
                    Ok(strength)
                } else {
                    warn!(team, "combined strength overflowed");
                    Err(OddsError::StrengthOverflow { team })
                }
            })
            .collect()
    }

    /// Calculate odds for many independent rosters in parallel.
    ///
    /// Results are in the same order as `rosters`; a failing roster does not
    /// affect the others.
    pub fn odds_batch<T>(&self, rosters: &[Vec<T>]) -> Vec<Result<Vec<f64>, OddsError>>
    where
        T: AsRef<[f64]> + Sync,
    {
        rosters.par_iter().map(|roster| self.odds(roster)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::Aggregation;

    fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < tol, "expected {:?}, got {:?}", expected, actual);
        }
    }

    #[test]
    fn test_equal_teams_50_50() {
        let odds = calculate_odds(&[vec![1500.0], vec![1500.0]]).unwrap();
        assert_close(&odds, &[0.5, 0.5], 1e-12);
    }

    #[test]
    fn test_classical_elo() {
        let odds = calculate_odds(&[vec![1600.0], vec![1400.0]]).unwrap();
        assert!((odds[0] - 0.7597).abs() < 1e-4);
        assert!((odds[1] - 0.2403).abs() < 1e-4);
        assert!((odds[0] - expected_score(1600.0, 1400.0)).abs() < 1e-12);
    }

    #[test]
    fn test_two_team_reduction_with_teams() {
        let roster = vec![vec![1500.0, 1300.0], vec![2000.0]];
        let odds = calculate_odds(&roster).unwrap();
        assert!((odds[0] - expected_score(2800.0, 2000.0)).abs() < 1e-12);
    }

    #[test]
    fn test_four_slots_sum_to_one() {
        let roster = vec![vec![1500.0], vec![1650.0, 1200.0], vec![], vec![1800.0]];
        let odds = calculate_odds(&roster).unwrap();
        assert_eq!(odds.len(), 4);
        let sum: f64 = odds.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(odds.iter().all(|&p| (0.0..=1.0).contains(&p)));
        // The pair outweighs everyone else
        assert!(odds[1] > odds[3]);
    }

    #[test]
    fn test_more_members_favoured() {
        let pair = calculate_odds(&[vec![1500.0, 1500.0], vec![1500.0]]).unwrap();
        let single = calculate_odds(&[vec![1500.0], vec![1500.0]]).unwrap();
        assert!(pair[0] > single[0]);
    }

    #[test]
    fn test_empty_team_is_neutral() {
        let odds = calculate_odds(&[vec![], vec![0.0]]).unwrap();
        assert_close(&odds, &[0.5, 0.5], 1e-12);
    }

    #[test]
    fn test_all_teams_empty() {
        let roster: Vec<Vec<f64>> = vec![vec![]; 4];
        let odds = calculate_odds(&roster).unwrap();
        assert_close(&odds, &[0.25; 4], 1e-12);
    }

    #[test]
    fn test_single_team() {
        let odds = calculate_odds(&[vec![1200.0]]).unwrap();
        assert_close(&odds, &[1.0], 1e-12);
    }

    #[test]
    fn test_negative_ratings() {
        let odds = calculate_odds(&[vec![-400.0], vec![0.0]]).unwrap();
        assert_close(&odds, &[1.0 / 11.0, 10.0 / 11.0], 1e-12);
    }

    #[test]
    fn test_large_strengths_do_not_overflow() {
        // 10^(1e6 / 400) is not representable, the ratio is
        let odds = calculate_odds(&[vec![1e6], vec![1e6 - 400.0]]).unwrap();
        assert_close(&odds, &[10.0 / 11.0, 1.0 / 11.0], 1e-12);
    }

    #[test]
    fn test_nan_rating_rejected() {
        let err = calculate_odds(&[vec![1500.0], vec![1400.0, f64::NAN]]).unwrap_err();
        assert!(matches!(err, OddsError::InvalidRating { team: 1, member: 1, .. }));
    }

    #[test]
    fn test_infinite_rating_rejected() {
        let err = calculate_odds(&[vec![f64::NEG_INFINITY], vec![1400.0]]).unwrap_err();
        assert!(matches!(err, OddsError::InvalidRating { team: 0, member: 0, .. }));
    }

    #[test]
    fn test_empty_roster_rejected() {
        let roster: Vec<Vec<f64>> = Vec::new();
        assert_eq!(calculate_odds(&roster), Err(OddsError::InvalidRoster));
    }

    #[test]
    fn test_sum_of_huge_ratings_stays_finite() {
        let odds = calculate_odds(&[vec![f64::MAX, f64::MAX], vec![0.0]]).unwrap();
        assert_eq!(odds, vec![1.0, 0.0]);
    }

    #[test]
    fn test_strength_overflow_rejected() {
        let roster = vec![vec![0.0], vec![f64::MAX; 401]];
        let err = calculate_odds(&roster).unwrap_err();
        assert_eq!(err, OddsError::StrengthOverflow { team: 1 });
    }

    #[test]
    fn test_mean_policy() {
        let engine = OddsEngine::new(EngineConfig::with_aggregation(Aggregation::Mean)).unwrap();
        let odds = engine.odds(&[vec![1500.0, 1500.0], vec![1500.0]]).unwrap();
        assert_close(&odds, &[0.5, 0.5], 1e-12);
    }

    #[test]
    fn test_max_policy() {
        let engine = OddsEngine::new(EngineConfig::with_aggregation(Aggregation::Max)).unwrap();
        let odds = engine.odds(&[vec![1600.0, 100.0], vec![1400.0]]).unwrap();
        assert!((odds[0] - expected_score(1600.0, 1400.0)).abs() < 1e-12);
    }

    #[test]
    fn test_custom_scale() {
        let config = EngineConfig {
            scale: 200.0,
            ..Default::default()
        };
        let engine = OddsEngine::new(config).unwrap();
        let odds = engine.odds(&[vec![1600.0], vec![1400.0]]).unwrap();
        assert_close(&odds, &[10.0 / 11.0, 1.0 / 11.0], 1e-12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            base: 0.5,
            ..Default::default()
        };
        assert!(OddsEngine::new(config).is_err());
    }

    #[test]
    fn test_batch_preserves_order() {
        let rosters = vec![
            vec![vec![1600.0], vec![1400.0]],
            vec![vec![1500.0], vec![f64::NAN]],
            vec![],
            vec![vec![1400.0], vec![1600.0]],
        ];
        let results = OddsEngine::default().odds_batch(&rosters);
        assert_eq!(results.len(), 4);
        assert!((results[0].as_ref().unwrap()[0] - 0.7597).abs() < 1e-4);
        assert!(matches!(results[1], Err(OddsError::InvalidRating { .. })));
        assert_eq!(results[2], Err(OddsError::InvalidRoster));
        assert!((results[3].as_ref().unwrap()[1] - 0.7597).abs() < 1e-4);
    }
}
