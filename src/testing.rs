//! Assertion helpers for tests.

use crate::core::error::Error;
use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::State;

/// Assert that a goal fails.
pub fn fails(goal: impl Goal<State>) {
    assert!(goal.run(1).is_empty());
}

/// Assert that a goal succeeds at least once.
pub fn succeeds(goal: impl Goal<State>) {
    assert!(matches!(goal.run(1), Stream::Pair(_, _)));
}

/// Assert that an answer iterator holds exactly the expected value.
pub fn has_unique_solution(
    mut solutions: impl Iterator<Item = Result<Term, Error>>,
    expected: Term,
) {
    assert_eq!(solutions.next().transpose().unwrap(), Some(expected));
    assert!(solutions.next().is_none());
}
