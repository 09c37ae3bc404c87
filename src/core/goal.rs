//! Goals are the building blocks of the engine.
//!
//! A goal applied to a substitution returns a `Stream` of
//! substitutions. If the goal fails the `Stream` is empty.

use crate::core::stream::{Stream, StreamIter};
use std::rc::Rc;

/// Object-safe goal interface: anything that maps a state to a stream
/// of states. Implemented for all suitable closures.
pub trait RawGoal<T> {
    /// Apply the goal to a state.
    fn apply(&self, s: T) -> Stream<T>;
}

impl<T, F: Fn(T) -> Stream<T>> RawGoal<T> for F {
    fn apply(&self, s: T) -> Stream<T> {
        self(s)
    }
}

/// The `Goal` trait. See module-level documentation for more details.
pub trait Goal<T: Default>: RawGoal<T> + Clone + 'static {
    /// Run the goal against the empty state. Returns at most `n` values.
    fn run(&self, n: usize) -> Stream<T> {
        self.apply(T::default()).take_inf(n)
    }

    /// Run the goal against the empty state. Returns all values but
    /// does not terminate if there are infinitely many.
    fn run_inf(&self) -> Stream<T> {
        self.apply(T::default()).take_inf_all()
    }

    /// Convert the goal into an iterator of values.
    fn iter(&self) -> StreamIter<T> {
        self.apply(T::default()).into_iter()
    }
}

impl<T: Default, G: 'static + Clone + RawGoal<T>> Goal<T> for G {}

/// Put a goal behind a shared reference so it can live in collections
/// of heterogeneous goals.
pub fn share<T>(g: impl 'static + RawGoal<T>) -> Rc<dyn RawGoal<T>> {
    Rc::new(g)
}
