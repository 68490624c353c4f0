//! Quiz question selection
//!
//! Selection is deterministic: the first candidate, in the order given,
//! whose id has not been seen yet. Callers are expected to pass candidates
//! in ascending id order (which is what every store returns) and to record
//! the returned id in their own seen set.

use std::collections::HashSet;

use crate::Question;

/// Pick the next unseen question, or `None` when the pool is exhausted.
///
/// `candidates` must already be filtered by category. `seen` is never
/// modified.
pub fn next_question<'a>(candidates: &'a [Question], seen: &HashSet<i64>) -> Option<&'a Question> {
    candidates.iter().find(|q| !seen.contains(&q.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(ids: impl IntoIterator<Item = i64>) -> Vec<Question> {
        ids.into_iter()
            .map(|id| Question {
                id,
                question: format!("q{id}"),
                answer: format!("a{id}"),
                category: 1,
                difficulty: 2,
            })
            .collect()
    }

    #[test]
    fn empty_pool_is_exhausted() {
        assert!(next_question(&[], &HashSet::new()).is_none());
    }

    #[test]
    fn skips_seen() {
        let candidates = pool([1, 2, 3]);
        let seen = HashSet::from([1]);
        assert_eq!(next_question(&candidates, &seen).map(|q| q.id), Some(2));
    }

    #[test]
    fn first_unseen_not_lowest_gap() {
        let candidates = pool([4, 8, 15, 16]);
        let seen = HashSet::from([4, 15]);
        assert_eq!(next_question(&candidates, &seen).map(|q| q.id), Some(8));
    }

    #[test]
    fn all_seen_is_exhausted() {
        let candidates = pool([1, 2, 3]);
        let seen = HashSet::from([1, 2, 3]);
        assert!(next_question(&candidates, &seen).is_none());
    }

    #[test]
    fn unrelated_seen_ids_are_ignored() {
        let candidates = pool([5, 6]);
        let seen = HashSet::from([1, 2, 99]);
        assert_eq!(next_question(&candidates, &seen).map(|q| q.id), Some(5));
    }

    #[test]
    fn full_session_visits_every_question_once() {
        let candidates = pool(1..=15);
        let mut seen = HashSet::new();
        let mut order = Vec::new();

        while let Some(q) = next_question(&candidates, &seen) {
            order.push(q.id);
            seen.insert(q.id);
        }

        assert_eq!(order, (1..=15).collect::<Vec<_>>());
    }
}
