//! Picking a split from scored candidates.

use rand::Rng;
use rand::seq::SliceRandom;

use super::types::{ScoredCandidate, Split};

/// How many of the best-ranked candidates the final pick is drawn from.
pub const TOP_CANDIDATES: usize = 5;

/// A chosen candidate and whether it came from the in-tolerance pool.
#[derive(Debug, Clone)]
pub struct Selection {
    pub candidate: ScoredCandidate,
    pub tolerance_met: bool,
}

/// Rank candidates and draw one of the best.
///
/// Candidates within `tolerance` are preferred; if there are none, the whole
/// pool is used and `tolerance_met` is `false`. The pool is shuffled before a
/// stable sort on `(repeat_score, skill_diff)`, so equally ranked candidates
/// reach the top slots in random order. Returns `None` for an empty pool.
pub fn select<R: Rng + ?Sized>(
    candidates: Vec<ScoredCandidate>,
    tolerance: u64,
    rng: &mut R,
) -> Option<Selection> {
    let (within, outside): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|c| c.skill_diff <= tolerance);

    let tolerance_met = !within.is_empty();
    let mut pool = if tolerance_met {
        within
    } else {
        outside
    };

    pool.shuffle(rng);
    pool.sort_by_key(|c| (c.repeat_score, c.skill_diff));
    pool.truncate(TOP_CANDIDATES);

    let index = (!pool.is_empty()).then(|| rng.gen_range(0..pool.len()))?;
    Some(Selection {
        candidate: pool.swap_remove(index),
        tolerance_met,
    })
}

/// Label `split` so that as few players as possible change team name
/// compared with `previous`.
///
/// Labels are swapped only when that strictly increases same-side overlap,
/// so applying this twice gives the same result as applying it once.
pub fn relabel(split: Split, previous: Option<&Split>) -> Split {
    match previous {
        Some(prev) if split.swapped_overlap(prev) > split.overlap(prev) => split.swapped(),
        _ => split,
    }
}
