use serde::{Deserialize, Serialize};

use crate::aggregation::Aggregation;

/// Ratings of the competitors selected into one team slot.
///
/// A team may be empty when nothing has been selected for its slot yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team {
    pub ratings: Vec<f64>,
}

impl Team {
    pub fn new(ratings: Vec<f64>) -> Self {
        Team { ratings }
    }

    pub fn empty() -> Self {
        Team::default()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Combined strength of the team under the given policy
    pub fn strength(&self, aggregation: Aggregation) -> f64 {
        aggregation.combine(&self.ratings)
    }
}

impl AsRef<[f64]> for Team {
    fn as_ref(&self) -> &[f64] {
        &self.ratings
    }
}

impl From<Vec<f64>> for Team {
    fn from(ratings: Vec<f64>) -> Self {
        Team::new(ratings)
    }
}

/// Ordered team slots for one match-up. Slot order is the order of the odds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    pub fn new(teams: Vec<Team>) -> Self {
        Roster { teams }
    }

    pub fn from_ratings(ratings: Vec<Vec<f64>>) -> Self {
        Roster {
            teams: ratings.into_iter().map(Team::new).collect(),
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl FromIterator<Team> for Roster {
    fn from_iter<I: IntoIterator<Item = Team>>(iter: I) -> Self {
        Roster::new(iter.into_iter().collect())
    }
}
