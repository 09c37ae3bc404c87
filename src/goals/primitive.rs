use crate::core::goal::{Goal, RawGoal};
use crate::core::logic_variable::Var;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::{unit, State};
use std::rc::Rc;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal<State> {
    let u = u.into();
    let v = v.into();
    move |s: State| unit(s.unify(&u, &v))
}

/// As [`eq`], but with the occurs check: a variable is never bound to a
/// term containing it.
pub fn eq_checked(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal<State> {
    let u = u.into();
    let v = v.into();
    move |s: State| unit(s.unify_occurs(&u, &v))
}

pub fn succeed() -> impl Goal<State> {
    |s: State| Stream::singleton(s)
}

pub fn fail() -> impl Goal<State> {
    |_: State| Stream::empty()
}

/// Creates a goal that rebuilds the goal returned by `f` every time it
/// is applied, behind a suspension. `f` is not called at construction
/// time; this is what breaks unguarded recursion.
pub fn delay<G: Goal<State>>(f: impl 'static + Fn() -> G) -> impl Goal<State> {
    let f = Rc::new(f);
    move |s: State| {
        let f = f.clone();
        Stream::suspension(move || f().apply(s))
    }
}

/// Creates a goal that yields at most `n` of the answers of `g`.
pub fn take(n: usize, g: impl Goal<State>) -> impl Goal<State> {
    move |s: State| g.apply(s).take_inf(n)
}

/// Introduce the logic variable named `id` and hand it to `f`, which
/// builds the goal in its scope. Applying the result records the
/// variable in the incoming substitution as a self-binding before the
/// inner goal runs.
pub fn call_fresh<G: Goal<State>>(id: impl Into<Rc<str>>, f: impl FnOnce(Var) -> G) -> impl Goal<State> {
    let v = Var::new(id);
    let g = f(v.clone());
    move |s: State| g.apply(s.extend(v.clone(), Term::Var(v.clone())))
}

/// Creates a goal that succeeds if `x` resolves to a fully ground term.
pub fn groundo(x: impl Into<Term>) -> impl Goal<State> {
    let x = x.into();
    move |s: State| {
        if s.walk_star(&x).is_ground() {
            Stream::singleton(s)
        } else {
            Stream::empty()
        }
    }
}

/// A goal that never produces an answer, yet never stops trying.
pub fn nevero() -> impl Goal<State> {
    |s: State| Stream::suspension(move || nevero().apply(s))
}

/// A goal that succeeds any number of times.
pub fn alwayso() -> impl Goal<State> {
    |s: State| {
        Stream::suspension(move || crate::goals::combinators::disj2(succeed(), alwayso()).apply(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::substitution::Substitution;
    use crate::testing::{fails, succeeds};

    #[test]
    fn succeed_yields_the_state_unchanged() {
        assert_eq!(
            succeed().apply(Substitution::empty()),
            Stream::singleton(Substitution::empty())
        );
    }

    #[test]
    fn fail_yields_nothing() {
        assert!(fail().apply(Substitution::empty()).is_empty());
    }

    #[test]
    fn eq_binds_a_variable() {
        let x = Var::new("x");
        let s = eq(&x, 42)
            .apply(Substitution::empty())
            .into_vec()
            .unwrap()
            .remove(0);
        assert_eq!(s.walk(&Term::Var(x)), &Term::from(42));
    }

    #[test]
    fn eq_of_distinct_atoms_fails() {
        fails(eq(42, 123));
        fails(eq(true, false));
        fails(eq("ab", seq!['a', 'b']));
    }

    #[test]
    fn eq_checked_refuses_cyclic_terms() {
        let x = Var::new("x");
        fails(eq_checked(&x, seq![&x]));
        succeeds(eq_checked(&x, seq![1, 2]));
    }

    #[test]
    fn call_fresh_records_the_variable_as_a_self_binding() {
        let g = call_fresh("x", |x| {
            move |s: State| {
                assert_eq!(s.lookup(&x), Some(&Term::Var(x.clone())));
                Stream::singleton(s)
            }
        });
        assert_eq!(g.run(1).len(), Some(1));
    }

    #[test]
    fn take_truncates_an_endless_goal() {
        let answers = take(3, alwayso()).run(9).into_vec().unwrap();
        assert_eq!(answers.len(), 3);
    }

    #[test]
    fn delay_defers_construction_of_the_inner_goal() {
        let g = delay(|| fail());
        assert!(matches!(g.apply(Substitution::empty()), Stream::Suspension(_)));
        fails(g);
    }

    #[test]
    fn groundo_accepts_resolved_terms_only() {
        let x = Var::new("x");
        succeeds(groundo(seq![1, "a"]));
        fails(groundo(seq![1, &x]));
        succeeds(crate::goals::combinators::conj2(
            eq(&x, 7),
            groundo(seq![1, &x]),
        ));
    }

    #[test]
    fn alwayso_succeeds_repeatedly() {
        assert_eq!(alwayso().run(3).len(), Some(3));
    }
}
