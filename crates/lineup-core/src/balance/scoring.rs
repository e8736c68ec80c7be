//! Skill-balance and repeat-avoidance scores.

use std::collections::{BTreeMap, BTreeSet};

use super::history::History;
use super::types::{RepeatPolicy, ScoredCandidate, Split};
use crate::roster::Identity;

/// Weights for the most recent matches, newest first.
pub const RECENCY_WEIGHTS: [u64; 5] = [100, 10, 5, 2, 1];

/// Weight for matches older than [`RECENCY_WEIGHTS`] covers.
pub const BASE_WEIGHT: u64 = 1;

/// Weight of the match `age` steps back (0 = most recent).
pub fn recency_weight(age: usize) -> u64 {
    RECENCY_WEIGHTS.get(age).copied().unwrap_or(BASE_WEIGHT)
}

fn team_total(team: &BTreeSet<Identity>, ratings: &BTreeMap<Identity, i64>) -> i128 {
    team.iter()
        .map(|id| i128::from(ratings.get(id).copied().unwrap_or_default()))
        .sum()
}

/// `|Σ rating(team_a) − Σ rating(team_b)|`.
///
/// Players without a rating count as 0; callers check ratings up front.
pub fn skill_diff(split: &Split, ratings: &BTreeMap<Identity, i64>) -> u64 {
    let diff = team_total(&split.team_a, ratings).abs_diff(team_total(&split.team_b, ratings));
    u64::try_from(diff).unwrap_or(u64::MAX)
}

/// Recency-weighted overlap between `split` and past matches.
///
/// Each past match is compared in whichever labelling lines up better with
/// the candidate, so a split and its mirror always score the same. Under
/// [`RepeatPolicy::Exact`] only exact repeats contribute.
pub fn repeat_score(split: &Split, history: &History, policy: RepeatPolicy) -> u64 {
    history
        .recent_first()
        .enumerate()
        .map(|(age, past)| {
            let counted = match policy {
                RepeatPolicy::Overlap => true,
                RepeatPolicy::Exact => split.same_teams(past),
            };
            if !counted {
                return 0;
            }
            let aligned = split.overlap(past).max(split.swapped_overlap(past));
            recency_weight(age) * aligned as u64
        })
        .sum()
}

/// Score every candidate.
pub fn score_all(
    splits: Vec<Split>,
    ratings: &BTreeMap<Identity, i64>,
    history: &History,
    policy: RepeatPolicy,
) -> Vec<ScoredCandidate> {
    splits
        .into_iter()
        .map(|split| ScoredCandidate {
            skill_diff: skill_diff(&split, ratings),
            repeat_score: repeat_score(&split, history, policy),
            split,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<Identity> {
        ids.iter().map(|s| Identity::from(*s)).collect()
    }

    fn base_split() -> Split {
        Split::new(set(&["a", "b", "c", "d", "e"]), set(&["f", "g", "h", "i", "j"]))
    }

    fn one_swap() -> Split {
        // e and f trade places
        Split::new(set(&["a", "b", "c", "d", "f"]), set(&["e", "g", "h", "i", "j"]))
    }

    #[test]
    fn test_recency_weights() {
        assert_eq!(recency_weight(0), 100);
        assert_eq!(recency_weight(1), 10);
        assert_eq!(recency_weight(4), 1);
        assert_eq!(recency_weight(9), BASE_WEIGHT);
    }

    #[test]
    fn test_skill_diff() {
        let ratings: BTreeMap<Identity, i64> = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]
            .into_iter()
            .zip([10, 10, 10, 10, 10, 0, 0, 0, 0, -5])
            .map(|(k, v)| (Identity::from(k), v))
            .collect();

        assert_eq!(skill_diff(&base_split(), &ratings), 55);
        assert_eq!(skill_diff(&base_split().swapped(), &ratings), 55);
    }

    #[test]
    fn test_skill_diff_extreme_ratings_do_not_overflow() {
        let ratings: BTreeMap<Identity, i64> = ["a", "b", "c", "d", "e"]
            .into_iter()
            .map(|k| (Identity::from(k), i64::MAX))
            .chain(
                ["f", "g", "h", "i", "j"]
                    .into_iter()
                    .map(|k| (Identity::from(k), i64::MIN)),
            )
            .collect();
        assert_eq!(skill_diff(&base_split(), &ratings), u64::MAX);
    }

    #[test]
    fn test_empty_history_scores_zero() {
        let history = History::new();
        assert_eq!(repeat_score(&base_split(), &history, RepeatPolicy::Overlap), 0);
        assert_eq!(repeat_score(&base_split(), &history, RepeatPolicy::Exact), 0);
    }

    #[test]
    fn test_overlap_is_orientation_symmetric() {
        let mut history = History::new();
        history.push(base_split(), None);

        let forward = repeat_score(&one_swap(), &history, RepeatPolicy::Overlap);
        let mirrored = repeat_score(&one_swap().swapped(), &history, RepeatPolicy::Overlap);
        assert_eq!(forward, mirrored);
        // 4 + 4 players kept together, most recent weight
        assert_eq!(forward, 800);
    }

    #[test]
    fn test_exact_repeat_scores_highest() {
        let mut history = History::new();
        history.push(base_split(), None);

        let repeat = repeat_score(&base_split().swapped(), &history, RepeatPolicy::Overlap);
        let alternative = repeat_score(&one_swap(), &history, RepeatPolicy::Overlap);
        assert_eq!(repeat, 1000);
        assert!(repeat > alternative);
    }

    #[test]
    fn test_exact_policy_ignores_partial_overlap() {
        let mut history = History::new();
        history.push(base_split(), None);

        assert_eq!(repeat_score(&one_swap(), &history, RepeatPolicy::Exact), 0);
        assert_eq!(
            repeat_score(&base_split().swapped(), &history, RepeatPolicy::Exact),
            1000
        );
    }

    #[test]
    fn test_older_matches_weigh_less() {
        let mut history = History::new();
        history.push(base_split(), None);
        history.push(one_swap(), None);

        // base_split is now one step back (weight 10), one_swap is newest (weight 100)
        let score = repeat_score(&base_split(), &history, RepeatPolicy::Exact);
        assert_eq!(score, 10 * 10);
    }
}
