//! Scoring engine: heuristic suitability scores over filtered catalog records.
//!
//! Each rule that fires adds (or subtracts) points and appends one reasoning
//! line, in evaluation order. Results are stable-sorted by score, descending,
//! so equal scores keep their input order.

pub mod colleges;
pub mod scholarships;

use serde::Serialize;

/// Score at or above which a result is `High` priority.
pub const HIGH_PRIORITY_SCORE: i32 = 60;
/// Score at or above which a result is `Medium` priority.
pub const MEDIUM_PRIORITY_SCORE: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_score(score: i32) -> Self {
        if score >= HIGH_PRIORITY_SCORE {
            Priority::High
        } else if score >= MEDIUM_PRIORITY_SCORE {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// A catalog record enriched with its score. The record's own fields are
/// flattened into the serialized output unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult<T> {
    #[serde(flatten)]
    pub item: T,
    pub score: i32,
    pub reasoning: Vec<String>,
    pub priority: Priority,
}

#[derive(Debug, Default)]
pub(crate) struct ScoreCard {
    score: i32,
    reasoning: Vec<String>,
}

impl ScoreCard {
    pub(crate) fn award(&mut self, points: i32, reason: impl Into<String>) {
        self.score += points;
        self.reasoning.push(reason.into());
    }

    pub(crate) fn finish<T>(self, item: T) -> RankedResult<T> {
        RankedResult {
            item,
            score: self.score,
            priority: Priority::from_score(self.score),
            reasoning: self.reasoning,
        }
    }
}

/// Stable sort, highest score first.
pub(crate) fn rank<T>(mut results: Vec<RankedResult<T>>) -> Vec<RankedResult<T>> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_thresholds() {
        assert_eq!(Priority::from_score(60), Priority::High);
        assert_eq!(Priority::from_score(59), Priority::Medium);
        assert_eq!(Priority::from_score(40), Priority::Medium);
        assert_eq!(Priority::from_score(39), Priority::Low);
        assert_eq!(Priority::from_score(-20), Priority::Low);
    }

    #[test]
    fn test_score_card_accumulates_in_order() {
        let mut card = ScoreCard::default();
        card.award(30, "first");
        card.award(-10, "second");
        let ranked = card.finish("item");
        assert_eq!(ranked.score, 20);
        assert_eq!(ranked.reasoning, vec!["first", "second"]);
        assert_eq!(ranked.priority, Priority::Low);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let results = ["a", "b", "c", "d"]
            .into_iter()
            .zip([10, 20, 10, 20])
            .map(|(item, score)| {
                let mut card = ScoreCard::default();
                card.award(score, "x");
                card.finish(item)
            })
            .collect();
        let ranked: Vec<&str> = rank(results).into_iter().map(|r| r.item).collect();
        assert_eq!(ranked, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_serialization_flattens_item() {
        #[derive(Serialize)]
        struct Thing {
            name: &'static str,
        }
        let mut card = ScoreCard::default();
        card.award(65, "good");
        let json = serde_json::to_value(card.finish(Thing { name: "IIT" })).unwrap();
        assert_eq!(json["name"], "IIT");
        assert_eq!(json["score"], 65);
        assert_eq!(json["priority"], "High");
        assert_eq!(json["reasoning"][0], "good");
    }
}
