use std::cmp::Ordering;

use chrono::{Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_LAST_MATCH_WITHIN_DAYS, DEFAULT_MIN_MATCHES};

/// A selectable competitor: display name and current rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub rating: f64,
}

impl Competitor {
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Competitor {
            name: name.into(),
            rating,
        }
    }
}

/// Competitor statistics as supplied by the upstream ratings source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    pub name: String,
    #[serde(alias = "currentElo")]
    pub rating: f64,
    pub matches_played: u32,
    pub last_match: NaiveDate,
}

/// Which upstream records are offered for selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub min_matches: u32,
    pub last_match_within_days: i64,
    pub as_of: NaiveDate,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        CatalogFilter {
            min_matches: DEFAULT_MIN_MATCHES,
            last_match_within_days: DEFAULT_LAST_MATCH_WITHIN_DAYS,
            as_of: Local::now().date_naive(),
        }
    }
}

impl CatalogFilter {
    pub fn accepts(&self, record: &CompetitorRecord) -> bool {
        if self.last_match_within_days < 0 {
            return false;
        }
        // A window wider than the calendar accepts every past date
        let earliest = TimeDelta::try_days(self.last_match_within_days)
            .and_then(|window| self.as_of.checked_sub_signed(window))
            .unwrap_or(NaiveDate::MIN);
        record.matches_played >= self.min_matches
            && record.last_match >= earliest
            && record.last_match <= self.as_of
    }
}

/// Display order of names: case-insensitive, ties broken by exact bytes.
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Competitors available for selection, sorted by display name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    competitors: Vec<Competitor>,
}

impl Catalog {
    pub fn new(mut competitors: Vec<Competitor>) -> Self {
        competitors.sort_by(|a, b| name_order(&a.name, &b.name));
        Catalog { competitors }
    }

    /// Build the catalog from upstream records, dropping those the filter rejects.
    pub fn from_records<'a, I>(records: I, filter: &CatalogFilter) -> Self
    where
        I: IntoIterator<Item = &'a CompetitorRecord>,
    {
        let competitors: Vec<Competitor> = records
            .into_iter()
            .filter(|r| filter.accepts(r))
            .map(|r| Competitor::new(r.name.clone(), r.rating))
            .collect();
        debug!(count = competitors.len(), "built competitor catalog");
        Catalog::new(competitors)
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn find(&self, name: &str) -> Option<&Competitor> {
        self.competitors
            .binary_search_by(|c| name_order(&c.name, name))
            .ok()
            .map(|i| &self.competitors[i])
    }

    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }
}
