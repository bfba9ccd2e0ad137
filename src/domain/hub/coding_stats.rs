//! LeetCode solved-problem statistics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Problem difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = ();

    /// Parses the labels LeetCode uses. `All` (the aggregate row) is not a tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// Accepted submissions for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: Difficulty,
    pub count: u64,
}

/// Solved-problem counts plus global ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingStats {
    /// At most one entry per tier, in Easy/Medium/Hard order.
    pub counts: Vec<DifficultyCount>,
    pub ranking: Option<u64>,
}

impl CodingStats {
    /// Builds stats from raw `(label, count)` rows.
    ///
    /// Rows with unknown labels (including `All`) are dropped and tiers that
    /// are absent stay absent; no zero is invented for them. When a tier
    /// appears twice the first row wins.
    pub fn from_rows<'a>(
        rows: impl IntoIterator<Item = (&'a str, u64)>,
        ranking: Option<u64>,
    ) -> Self {
        let mut counts: Vec<DifficultyCount> = Vec::with_capacity(3);
        for (label, count) in rows {
            let Ok(difficulty) = label.parse::<Difficulty>() else {
                continue;
            };
            if counts.iter().any(|c| c.difficulty == difficulty) {
                continue;
            }
            counts.push(DifficultyCount { difficulty, count });
        }
        counts.sort_by_key(|c| c.difficulty as u8);
        Self { counts, ranking }
    }

    /// Ranking for display, `N/A` when unranked.
    pub fn ranking_label(&self) -> String {
        self.ranking
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn count_for(&self, difficulty: Difficulty) -> Option<u64> {
        self.counts
            .iter()
            .find(|c| c.difficulty == difficulty)
            .map(|c| c.count)
    }
}
