//! Team balancing engine.
//!
//! [`balance`] turns ten rated participants, optional grouping constraints
//! and recent match history into one 5v5 split. The pipeline is:
//!
//! 1. [`candidates::feasible`] enumerates the 126 unordered splits and drops
//!    those that break a constraint.
//! 2. [`scoring::score_all`] attaches `skill_diff` and `repeat_score`.
//! 3. [`selection::select`] prefers in-tolerance candidates, ranks by repeat
//!    score then skill difference, and draws from the top five.
//! 4. [`selection::relabel`] orients the result against the previous match.
//!
//! The engine does no I/O. History comes in by reference and the updated
//! history goes out on the [`BalanceOutcome`]; nothing is mutated on error.

pub mod candidates;
pub mod constraints;
pub mod errors;
pub mod history;
pub mod scoring;
pub mod selection;
pub mod types;

use rand::Rng;

pub use constraints::{ConstraintSet, parse_constraints};
pub use errors::BalanceError;
pub use history::{HISTORY_CAP, History, HistoryEntry};
pub use types::{
    BalanceOutcome, BalanceRequest, MATCH_SIZE, RepeatPolicy, ScoredCandidate, Split, TEAM_SIZE,
};

/// Pick a split for `request` and return it with the extended history.
pub fn balance<R: Rng + ?Sized>(
    request: &BalanceRequest,
    history: &History,
    rng: &mut R,
) -> Result<BalanceOutcome, BalanceError> {
    let count = request.active.len();
    if count != MATCH_SIZE {
        return Err(BalanceError::WrongParticipantCount {
            count,
            required: MATCH_SIZE,
        });
    }

    if let Some(identity) = request
        .active
        .iter()
        .find(|id| !request.ratings.contains_key(*id))
    {
        return Err(BalanceError::MissingRating {
            identity: identity.clone(),
        });
    }

    let splits = candidates::feasible(&request.active, &request.constraints);
    if splits.is_empty() {
        return Err(BalanceError::UnsatisfiableConstraints);
    }
    let candidates_considered = splits.len();

    let scored = scoring::score_all(splits, &request.ratings, history, request.policy);
    let selection = selection::select(scored, request.tolerance, rng)
        .ok_or(BalanceError::UnsatisfiableConstraints)?;

    let candidate = selection.candidate;
    let split = selection::relabel(candidate.split, history.latest());

    if !selection.tolerance_met {
        tracing::warn!(
            event = "core.balance.tolerance_not_met",
            tolerance = request.tolerance,
            skill_diff = candidate.skill_diff
        );
    }

    let mut updated = history.clone();
    updated.push(split.clone(), request.recorded_at);

    tracing::info!(
        event = "core.balance.completed",
        candidates = candidates_considered,
        skill_diff = candidate.skill_diff,
        repeat_score = candidate.repeat_score,
        tolerance_met = selection.tolerance_met,
        history_len = updated.len()
    );

    Ok(BalanceOutcome {
        split,
        skill_diff: candidate.skill_diff,
        repeat_score: candidate.repeat_score,
        tolerance_met: selection.tolerance_met,
        candidates_considered,
        history: updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Identity;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{BTreeMap, BTreeSet};

    const NAMES: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

    fn id(s: &str) -> Identity {
        Identity::from(s)
    }

    fn set(ids: &[&str]) -> BTreeSet<Identity> {
        ids.iter().map(|s| id(s)).collect()
    }

    fn active() -> BTreeSet<Identity> {
        set(&NAMES)
    }

    fn ratings(values: [i64; 10]) -> BTreeMap<Identity, i64> {
        NAMES.into_iter().map(id).zip(values).collect()
    }

    fn tens_and_zeros() -> BTreeMap<Identity, i64> {
        ratings([10, 10, 10, 10, 10, 0, 0, 0, 0, 0])
    }

    fn mixed() -> BTreeMap<Identity, i64> {
        ratings([1500, 1320, 1210, 1100, 990, 870, 860, 640, 500, -20])
    }

    fn sum(team: &BTreeSet<Identity>, ratings: &BTreeMap<Identity, i64>) -> i64 {
        team.iter().map(|id| ratings[id]).sum()
    }

    #[test]
    fn test_split_is_a_partition_of_active() {
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let request = BalanceRequest::new(active(), mixed(), 50);
            let outcome = balance(&request, &History::new(), &mut rng).unwrap();

            assert_eq!(outcome.split.team_a.len(), TEAM_SIZE);
            assert_eq!(outcome.split.team_b.len(), TEAM_SIZE);
            assert!(outcome.split.team_a.is_disjoint(&outcome.split.team_b));
            let union: BTreeSet<_> = outcome.split.members().cloned().collect();
            assert_eq!(union, active());
        }
    }

    #[test]
    fn test_reported_skill_diff_is_exact() {
        let ratings = mixed();
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let request = BalanceRequest::new(active(), ratings.clone(), 0);
            let outcome = balance(&request, &History::new(), &mut rng).unwrap();

            let expected =
                (sum(&outcome.split.team_a, &ratings) - sum(&outcome.split.team_b, &ratings))
                    .unsigned_abs();
            assert_eq!(outcome.skill_diff, expected);
        }
    }

    #[test]
    fn test_history_stays_bounded_and_fifo() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut history = History::new();
        let mut produced = Vec::new();

        for _ in 0..(HISTORY_CAP + 5) {
            let request = BalanceRequest::new(active(), mixed(), 100);
            let outcome = balance(&request, &history, &mut rng).unwrap();
            assert_eq!(outcome.history.len(), (history.len() + 1).min(HISTORY_CAP));
            produced.push(outcome.split.clone());
            history = outcome.history;
        }

        let kept: Vec<_> = history.iter().map(|e| e.split.clone()).collect();
        assert_eq!(kept, produced[produced.len() - HISTORY_CAP..]);
    }

    #[test]
    fn test_same_group_always_together() {
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let request =
                BalanceRequest::new(active(), mixed(), 100).with_constraint_tokens(&["same:a,j"]);
            let outcome = balance(&request, &History::new(), &mut rng).unwrap();
            assert!(outcome.split.keeps_together(&set(&["a", "j"])));
        }
    }

    #[test]
    fn test_split_set_lands_on_both_sides() {
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let request = BalanceRequest::new(active(), mixed(), 100)
                .with_constraint_tokens(&["diff:a,b,c"]);
            let outcome = balance(&request, &History::new(), &mut rng).unwrap();
            assert!(outcome.split.divides(&set(&["a", "b", "c"])));
        }
    }

    #[test]
    fn test_equal_ratings_all_candidates_in_tolerance() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let request = BalanceRequest::new(active(), ratings([7; 10]), 0);
        let outcome = balance(&request, &History::new(), &mut rng).unwrap();

        assert!(outcome.tolerance_met);
        assert_eq!(outcome.skill_diff, 0);
        assert_eq!(outcome.candidates_considered, candidates::CANDIDATE_COUNT);
    }

    #[test]
    fn test_tens_and_zeros_best_split_is_three_two() {
        // Five 10s cannot be shared evenly: the closest split is 30 vs 20
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let request = BalanceRequest::new(active(), tens_and_zeros(), 10);
            let outcome = balance(&request, &History::new(), &mut rng).unwrap();

            assert!(outcome.tolerance_met);
            assert_eq!(outcome.skill_diff, 10);
        }
    }

    #[test]
    fn test_tens_and_zeros_zero_tolerance_falls_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let request = BalanceRequest::new(active(), tens_and_zeros(), 0);
        let outcome = balance(&request, &History::new(), &mut rng).unwrap();

        assert!(!outcome.tolerance_met);
        // Fallback still ranks by skill_diff among equal repeat scores
        assert_eq!(outcome.skill_diff, 10);
    }

    #[test]
    fn test_constraint_forces_tolerance_miss_but_is_honoured() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let request = BalanceRequest::new(active(), tens_and_zeros(), 10)
            .with_constraint_tokens(&["same:a,b,c,d"]);
        let outcome = balance(&request, &History::new(), &mut rng).unwrap();

        assert!(!outcome.tolerance_met);
        assert!(outcome.split.keeps_together(&set(&["a", "b", "c", "d"])));
        assert_eq!(outcome.skill_diff, 30);
    }

    #[test]
    fn test_forced_repeat_scores_above_alternative() {
        let forced = Split::new(set(&["a", "b", "c", "d", "e"]), set(&["f", "g", "h", "i", "j"]));
        let mut history = History::new();
        history.push(forced.clone(), None);

        // With the group forced, the only candidate is the repeat itself
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let request = BalanceRequest::new(active(), ratings([7; 10]), 0)
            .with_constraint_tokens(&["same:a,b,c,d,e"]);
        let repeated = balance(&request, &history, &mut rng).unwrap();
        assert!(repeated.split.same_teams(&forced));

        // Without it, an equally balanced alternative always wins
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let request = BalanceRequest::new(active(), ratings([7; 10]), 0);
            let outcome = balance(&request, &history, &mut rng).unwrap();
            assert!(!outcome.split.same_teams(&forced));
            assert!(outcome.repeat_score < repeated.repeat_score);
        }
    }

    #[test]
    fn test_relabel_follows_previous_match() {
        let previous = Split::new(set(&["a", "b", "c", "d", "e"]), set(&["f", "g", "h", "i", "j"]));
        let mut history = History::new();
        history.push(previous.clone(), None);

        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let request = BalanceRequest::new(active(), ratings([7; 10]), 0);
            let outcome = balance(&request, &history, &mut rng).unwrap();
            assert!(
                outcome.split.overlap(&previous) >= outcome.split.swapped_overlap(&previous)
            );
        }
    }

    #[test]
    fn test_recorded_at_is_stored() {
        let at = chrono::DateTime::parse_from_rfc3339("2025-03-01T20:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let request = BalanceRequest::new(active(), mixed(), 100).recorded_at(at);
        let outcome = balance(&request, &History::new(), &mut rng).unwrap();

        assert_eq!(outcome.history.iter().last().unwrap().recorded_at, Some(at));
    }

    #[test]
    fn test_wrong_participant_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut nine = active();
        nine.remove(&id("j"));
        let request = BalanceRequest::new(nine, mixed(), 10);

        let err = balance(&request, &History::new(), &mut rng).unwrap_err();
        assert_eq!(
            err,
            BalanceError::WrongParticipantCount {
                count: 9,
                required: 10
            }
        );
    }

    #[test]
    fn test_missing_rating() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut partial = mixed();
        partial.remove(&id("e"));
        let request = BalanceRequest::new(active(), partial, 10);

        let err = balance(&request, &History::new(), &mut rng).unwrap_err();
        assert_eq!(err, BalanceError::MissingRating { identity: id("e") });
    }

    #[test]
    fn test_unsatisfiable_constraints_leave_history_alone() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut history = History::new();
        history.push(
            Split::new(set(&["a", "b", "c", "d", "e"]), set(&["f", "g", "h", "i", "j"])),
            None,
        );
        let before = history.clone();

        let request = BalanceRequest::new(active(), mixed(), 10)
            .with_constraint_tokens(&["same:a,b", "diff:a,b"]);
        let err = balance(&request, &history, &mut rng).unwrap_err();

        assert_eq!(err, BalanceError::UnsatisfiableConstraints);
        assert_eq!(history, before);
    }

    #[test]
    fn test_unknown_ids_in_constraints_are_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let request = BalanceRequest::new(active(), mixed(), 100)
            .with_constraint_tokens(&["same:a,nobody", "diff:ghost,b"]);
        let outcome = balance(&request, &History::new(), &mut rng).unwrap();
        assert_eq!(outcome.candidates_considered, candidates::CANDIDATE_COUNT);
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let request = BalanceRequest::new(active(), mixed(), 200);
        let first = balance(&request, &History::new(), &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        let second =
            balance(&request, &History::new(), &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        assert_eq!(first.split, second.split);
    }
}
