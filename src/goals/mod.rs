//! Library of goals.

pub mod combinators;
pub mod list;
pub mod numbers;
pub mod primitive;
pub mod strings;

use crate::core::stream::Stream;
use crate::core::substitution::Substitution;

/// The state threaded through goals.
pub type State = Substitution;

/// Lift the result of a unification into a stream.
pub(crate) fn unit(s: Option<State>) -> Stream<State> {
    match s {
        Some(s) => Stream::singleton(s),
        None => Stream::empty(),
    }
}
