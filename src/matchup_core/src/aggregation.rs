use serde::{Deserialize, Serialize};

/// Policy for combining member ratings into a team's combined strength.
///
/// `Sum` rewards teams with more (or stronger) members, so a pair of 1500s
/// beats a single 1500. Every policy gives an empty team a strength of 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Sum,
    Mean,
    Max,
}

impl Aggregation {
    /// Combine member ratings. Ratings are assumed finite.
    pub fn combine(self, ratings: &[f64]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }

        match self {
            Aggregation::Sum => ratings.iter().sum(),
            Aggregation::Mean => {
                // Divide first so the partial sums stay within range
                let n = ratings.len() as f64;
                ratings.iter().map(|r| r / n).sum()
            }
            Aggregation::Max => ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Mean => "mean",
            Aggregation::Max => "max",
        }
    }
}

impl std::str::FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sum" => Ok(Aggregation::Sum),
            "mean" | "average" => Ok(Aggregation::Mean),
            "max" => Ok(Aggregation::Max),
            other => Err(format!("unknown aggregation policy: {}", other)),
        }
    }
}
