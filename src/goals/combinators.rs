//! Compose goals using combinators to build more complex goals.

use crate::core::goal::{Goal, RawGoal};
use crate::core::stream::Stream;
use crate::goals::State;
use std::collections::VecDeque;
use std::rc::Rc;

/// Creates a goal that succeeds if either of its subgoals succeeds.
/// All answers of `g1` come before any answer of `g2`.
pub fn disj2(g1: impl Goal<State>, g2: impl Goal<State>) -> impl Goal<State> {
    move |s: State| Stream::append_inf(g1.apply(s.clone()), g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
pub fn conj2(g1: impl Goal<State>, g2: impl 'static + Goal<State>) -> impl Goal<State> {
    move |s: State| g1.apply(s).append_map_inf(g2.clone())
}

/// Fair disjunction over any number of goals: answers are drawn from
/// the clauses in strict rotation, so a clause with an answer at finite
/// depth gets through even next to an infinite clause.
pub fn disji(goals: Vec<Rc<dyn RawGoal<State>>>) -> impl Goal<State> {
    move |s: State| {
        let sources: VecDeque<_> = goals.iter().map(|g| g.apply(s.clone())).collect();
        Stream::interleave(sources)
    }
}

/// Randomized disjunction: each pull advances a uniformly random
/// non-exhausted clause. Makes no ordering guarantees.
pub fn condr(goals: Vec<Rc<dyn RawGoal<State>>>) -> impl Goal<State> {
    move |s: State| {
        let sources: Vec<_> = goals.iter().map(|g| g.apply(s.clone())).collect();
        Stream::interleave_random(sources)
    }
}

/// Creates a goal that succeeds if g_cond and g_then succeed or g_cond
/// fails and g_else succeeds. The condition's stream is probed only as
/// far as its first answer; once one exists the else branch is gone.
pub fn ifte(
    g_cond: impl Goal<State>,
    g_then: impl 'static + Goal<State>,
    g_else: impl Goal<State>,
) -> impl Goal<State> {
    move |s: State| {
        let mut s_inf = g_cond.apply(s.clone());
        loop {
            match s_inf {
                Stream::Empty => return g_else.apply(s),
                Stream::Pair(_, _) => return s_inf.append_map_inf(g_then.clone()),
                Stream::Suspension(sup) => s_inf = sup(),
                Stream::Error(e) => return Stream::raise(e),
            }
        }
    }
}

/// Creates a goal that succeeds at most once.
pub fn once(g: impl Goal<State>) -> impl Goal<State> {
    move |s: State| {
        let mut s_inf = g.apply(s);
        loop {
            match s_inf {
                Stream::Empty => return Stream::Empty,
                Stream::Pair(a, _) => return Stream::singleton(a),
                Stream::Suspension(sup) => s_inf = sup(),
                Stream::Error(e) => return Stream::raise(e),
            }
        }
    }
}
