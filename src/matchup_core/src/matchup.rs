use tracing::debug;

use crate::competitor::Competitor;
use crate::constants::{DEFAULT_SLOTS, DISPLAY_PRECISION};
use crate::error::OddsError;
use crate::odds::OddsEngine;

/// Render a probability as a percentage with one decimal place, e.g. `75.9%`.
pub fn format_probability(prob: f64) -> String {
    format!("{:.*}%", DISPLAY_PRECISION, prob * 100.0)
}

/// Selection board for a match-up between a fixed number of team slots.
///
/// Every selection change recomputes the odds for the whole board; the
/// latest selection always wins.
#[derive(Clone, Debug)]
pub struct MatchUp {
    engine: OddsEngine,
    slots: Vec<Vec<Competitor>>,
    odds: Vec<f64>,
}

impl Default for MatchUp {
    fn default() -> Self {
        let engine = OddsEngine::default();
        let slots = vec![Vec::new(); DEFAULT_SLOTS];
        let odds = vec![1.0 / DEFAULT_SLOTS as f64; DEFAULT_SLOTS];
        MatchUp { engine, slots, odds }
    }
}

impl MatchUp {
    pub fn new(slots: usize) -> Result<Self, OddsError> {
        Self::with_engine(slots, OddsEngine::default())
    }

    pub fn with_engine(slots: usize, engine: OddsEngine) -> Result<Self, OddsError> {
        let slots = vec![Vec::new(); slots];
        let odds = engine.odds(&Self::ratings(&slots))?;
        Ok(MatchUp { engine, slots, odds })
    }

    /// Replace the selection of one slot and recompute the odds.
    ///
    /// On error the board keeps its previous selection and odds.
    pub fn select(&mut self, slot: usize, competitors: Vec<Competitor>) -> Result<&[f64], OddsError> {
        if slot >= self.slots.len() {
            return Err(OddsError::SlotOutOfRange {
                slot,
                slots: self.slots.len(),
            });
        }

        let previous = std::mem::replace(&mut self.slots[slot], competitors);
        match self.engine.odds(&Self::ratings(&self.slots)) {
            Ok(odds) => {
                debug!(slot, ?odds, "selection changed");
                self.odds = odds;
                Ok(&self.odds)
            }
            Err(e) => {
                self.slots[slot] = previous;
                Err(e)
            }
        }
    }

    /// Empty one slot.
    pub fn clear(&mut self, slot: usize) -> Result<&[f64], OddsError> {
        self.select(slot, Vec::new())
    }

    pub fn slots(&self) -> &[Vec<Competitor>] {
        &self.slots
    }

    pub fn odds(&self) -> &[f64] {
        &self.odds
    }

    /// Formatted odds per slot; slots with no selection show nothing.
    pub fn display_odds(&self) -> Vec<Option<String>> {
        self.slots
            .iter()
            .zip(&self.odds)
            .map(|(team, &p)| (!team.is_empty()).then(|| format_probability(p)))
            .collect()
    }

    fn ratings(slots: &[Vec<Competitor>]) -> Vec<Vec<f64>> {
        slots
            .iter()
            .map(|team| team.iter().map(|c| c.rating).collect())
            .collect()
    }
}
