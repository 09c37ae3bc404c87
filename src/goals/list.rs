//! Relational goals over sequences.
//!
//! Every relation documents its modes: an argument may arrive ground,
//! unbound, or partially instantiated. Where an unbound argument makes
//! the answer set infinite, the relation enumerates it lazily and the
//! caller bounds consumption with `take` or `run!(n, …)`. Modes a
//! relation cannot decide raise an instantiation error.

use crate::core::error::Error;
use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::{unit, State};
use num_traits::ToPrimitive;

fn fresh_vars(n: usize) -> Vec<Term> {
    (0..n).map(|_| Term::Var(Var::fresh())).collect()
}

/// Creates a goal that succeeds if `list` is `car` followed by the
/// elements of `cdr`. Either the list or the tail must be known.
pub fn conso(car: impl Into<Term>, cdr: impl Into<Term>, list: impl Into<Term>) -> impl Goal<State> {
    let car = car.into();
    let cdr = cdr.into();
    let list = list.into();
    move |s: State| match s.walk(&list).clone() {
        Term::Seq(items) => {
            if items.is_empty() {
                return Stream::empty();
            }
            let head = items[0].clone();
            let tail = Term::Seq(items[1..].to_vec());
            unit(s.unify(&car, &head).and_then(|s| s.unify(&cdr, &tail)))
        }
        _ => match s.walk(&cdr).clone() {
            Term::Seq(items) => {
                let mut whole = Vec::with_capacity(items.len() + 1);
                whole.push(s.walk(&car).clone());
                whole.extend(items);
                unit(s.unify(&list, &Term::Seq(whole)))
            }
            Term::Var(_) => Stream::raise(Error::instantiation("conso")),
            _ => Stream::empty(),
        },
    }
}

/// Creates a goal that succeeds if `a` is the first element of `list`.
pub fn firsto(list: impl Into<Term>, a: impl Into<Term>) -> impl Goal<State> {
    conso(a, Term::Var(Var::fresh()), list)
}

/// Creates a goal that succeeds if `a` is the last element of `list`.
pub fn lasto(list: impl Into<Term>, a: impl Into<Term>) -> impl Goal<State> {
    appendo(Term::Var(Var::fresh()), Term::Seq(vec![a.into()]), list)
}

/// Creates a goal that succeeds if `el` is the element of `list` at the
/// 0-indexed position `n`. With both `n` and `list` unbound it
/// enumerates, for k = 0, 1, 2, …, the shortest list carrying `el` at
/// position k.
pub fn ntho(n: impl Into<Term>, list: impl Into<Term>, el: impl Into<Term>) -> impl Goal<State> {
    let n = n.into();
    let list = list.into();
    let el = el.into();
    move |s: State| {
        let nw = s.walk(&n).clone();
        let lw = s.walk(&list).clone();
        match (nw, lw) {
            (Term::Int(k), Term::Seq(items)) => match k.to_usize() {
                Some(i) if i < items.len() => {
                    let item = items[i].clone();
                    unit(s.unify(&el, &item))
                }
                _ => Stream::empty(),
            },
            (Term::Var(_), Term::Seq(items)) => nth_scan(s, n.clone(), el.clone(), items, 0),
            (Term::Int(k), Term::Var(_)) => match k.to_usize() {
                Some(i) => {
                    let mut items = fresh_vars(i);
                    items.push(el.clone());
                    unit(s.unify(&list, &Term::Seq(items)))
                }
                None => Stream::empty(),
            },
            (Term::Var(_), Term::Var(_)) => {
                nth_enumerate(s, n.clone(), list.clone(), el.clone(), 0)
            }
            _ => Stream::empty(),
        }
    }
}

fn nth_scan(s: State, n: Term, el: Term, items: Vec<Term>, i: usize) -> Stream<State> {
    if i >= items.len() {
        return Stream::Empty;
    }
    let first = s
        .clone()
        .unify(&n, &Term::from(i))
        .and_then(|s1| s1.unify(&el, &items[i]));
    let rest = Stream::suspension(move || nth_scan(s, n, el, items, i + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

fn nth_enumerate(s: State, n: Term, list: Term, el: Term, k: usize) -> Stream<State> {
    let mut items = fresh_vars(k);
    items.push(el.clone());
    let first = s
        .clone()
        .unify(&n, &Term::from(k))
        .and_then(|s1| s1.unify(&list, &Term::Seq(items)));
    let rest = Stream::suspension(move || nth_enumerate(s, n, list, el, k + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

/// Creates a goal that succeeds once for every member of `list` that
/// unifies with `el`. An unbound `list` is enumerated: every list shape
/// carrying `el` somewhere, in order of increasing length.
pub fn membero(el: impl Into<Term>, list: impl Into<Term>) -> impl Goal<State> {
    let el = el.into();
    let list = list.into();
    move |s: State| match s.walk(&list).clone() {
        Term::Seq(items) => member_scan(s, el.clone(), items, 0),
        Term::Var(_) => member_contexts(s, el.clone(), list.clone(), 1, 0),
        _ => Stream::empty(),
    }
}

fn member_scan(s: State, el: Term, items: Vec<Term>, i: usize) -> Stream<State> {
    if i >= items.len() {
        return Stream::Empty;
    }
    let first = s.clone().unify(&el, &items[i]);
    let rest = Stream::suspension(move || member_scan(s, el, items, i + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

fn member_contexts(s: State, el: Term, list: Term, len: usize, at: usize) -> Stream<State> {
    let items: Vec<Term> = (0..len)
        .map(|j| {
            if j == at {
                el.clone()
            } else {
                Term::Var(Var::fresh())
            }
        })
        .collect();
    let first = s.clone().unify(&list, &Term::Seq(items));
    let (len2, at2) = if at + 1 < len { (len, at + 1) } else { (len + 1, 0) };
    let rest = Stream::suspension(move || member_contexts(s, el, list, len2, at2));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

/// Creates a goal that succeeds if `x` is a list. An unbound `x` is
/// bound to every list of fresh variables, shortest first.
pub fn listo(x: impl Into<Term>) -> impl Goal<State> {
    let x = x.into();
    move |s: State| match s.walk(&x).clone() {
        Term::Seq(_) => Stream::singleton(s),
        Term::Var(_) => listo_enumerate(s, x.clone(), 0),
        _ => Stream::empty(),
    }
}

fn listo_enumerate(s: State, x: Term, n: usize) -> Stream<State> {
    let first = s.clone().unify(&x, &Term::Seq(fresh_vars(n)));
    let rest = Stream::suspension(move || listo_enumerate(s, x, n + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

/// Creates a goal relating a list to its length.
pub fn lengtho(list: impl Into<Term>, n: impl Into<Term>) -> impl Goal<State> {
    let list = list.into();
    let n = n.into();
    move |s: State| {
        let lw = s.walk(&list).clone();
        let nw = s.walk(&n).clone();
        match (lw, nw) {
            (Term::Seq(items), _) => {
                let len = items.len();
                unit(s.unify(&n, &Term::from(len)))
            }
            (Term::Var(_), Term::Int(k)) => match k.to_usize() {
                Some(len) => unit(s.unify(&list, &Term::Seq(fresh_vars(len)))),
                None => Stream::empty(),
            },
            (Term::Var(_), Term::Var(_)) => length_enumerate(s, list.clone(), n.clone(), 0),
            _ => Stream::empty(),
        }
    }
}

fn length_enumerate(s: State, list: Term, n: Term, k: usize) -> Stream<State> {
    let first = s
        .clone()
        .unify(&n, &Term::from(k))
        .and_then(|s1| s1.unify(&list, &Term::Seq(fresh_vars(k))));
    let rest = Stream::suspension(move || length_enumerate(s, list, n, k + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

/// Creates a goal that succeeds if appending `a` and `b` gives `l`.
/// All modes work: a ground `l` is split every possible way, and fully
/// unbound arguments are enumerated with fresh variables, shortest
/// combined length first.
pub fn appendo(a: impl Into<Term>, b: impl Into<Term>, l: impl Into<Term>) -> impl Goal<State> {
    let a = a.into();
    let b = b.into();
    let l = l.into();
    move |s: State| {
        let aw = s.walk(&a).clone();
        let bw = s.walk(&b).clone();
        let lw = s.walk(&l).clone();
        match (aw, bw, lw) {
            (Term::Seq(xs), Term::Seq(ys), _) => {
                let mut whole = xs;
                whole.extend(ys);
                unit(s.unify(&l, &Term::Seq(whole)))
            }
            (_, _, Term::Seq(items)) => append_splits(s, a.clone(), b.clone(), items, 0),
            (Term::Seq(xs), Term::Var(_), Term::Var(_)) => {
                append_grow_back(s, xs, b.clone(), l.clone(), 0)
            }
            (Term::Var(_), Term::Seq(ys), Term::Var(_)) => {
                append_grow_front(s, a.clone(), ys, l.clone(), 0)
            }
            (Term::Var(_), Term::Var(_), Term::Var(_)) => {
                append_enumerate(s, a.clone(), b.clone(), l.clone(), 0, 0)
            }
            _ => Stream::empty(),
        }
    }
}

fn append_splits(s: State, a: Term, b: Term, items: Vec<Term>, k: usize) -> Stream<State> {
    if k > items.len() {
        return Stream::Empty;
    }
    let first = s
        .clone()
        .unify(&a, &Term::Seq(items[..k].to_vec()))
        .and_then(|s1| s1.unify(&b, &Term::Seq(items[k..].to_vec())));
    let rest = Stream::suspension(move || append_splits(s, a, b, items, k + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

fn append_grow_back(s: State, front: Vec<Term>, b: Term, l: Term, m: usize) -> Stream<State> {
    let back = fresh_vars(m);
    let mut whole = front.clone();
    whole.extend(back.iter().cloned());
    let first = s
        .clone()
        .unify(&b, &Term::Seq(back))
        .and_then(|s1| s1.unify(&l, &Term::Seq(whole)));
    let rest = Stream::suspension(move || append_grow_back(s, front, b, l, m + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

fn append_grow_front(s: State, a: Term, back: Vec<Term>, l: Term, k: usize) -> Stream<State> {
    let front = fresh_vars(k);
    let mut whole = front.clone();
    whole.extend(back.iter().cloned());
    let first = s
        .clone()
        .unify(&a, &Term::Seq(front))
        .and_then(|s1| s1.unify(&l, &Term::Seq(whole)));
    let rest = Stream::suspension(move || append_grow_front(s, a, back, l, k + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

fn append_enumerate(s: State, a: Term, b: Term, l: Term, n: usize, k: usize) -> Stream<State> {
    let whole = fresh_vars(n);
    let first = s
        .clone()
        .unify(&a, &Term::Seq(whole[..k].to_vec()))
        .and_then(|s1| s1.unify(&b, &Term::Seq(whole[k..].to_vec())))
        .and_then(|s1| s1.unify(&l, &Term::Seq(whole)));
    let (n2, k2) = if k < n { (n, k + 1) } else { (n + 1, 0) };
    let rest = Stream::suspension(move || append_enumerate(s, a, b, l, n2, k2));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

/// Creates a goal that succeeds once for every element of the ground
/// list `l` that unifies with `x`; `out` is `l` with that element
/// removed.
pub fn rembero(x: impl Into<Term>, l: impl Into<Term>, out: impl Into<Term>) -> impl Goal<State> {
    let x = x.into();
    let l = l.into();
    let out = out.into();
    move |s: State| match s.walk(&l).clone() {
        Term::Seq(items) => rember_scan(s, x.clone(), out.clone(), items, 0),
        Term::Var(_) => Stream::raise(Error::instantiation("rembero")),
        _ => Stream::empty(),
    }
}

fn rember_scan(s: State, x: Term, out: Term, items: Vec<Term>, i: usize) -> Stream<State> {
    if i >= items.len() {
        return Stream::Empty;
    }
    let mut removed = items.clone();
    removed.remove(i);
    let first = s
        .clone()
        .unify(&x, &items[i])
        .and_then(|s1| s1.unify(&out, &Term::Seq(removed)));
    let rest = Stream::suspension(move || rember_scan(s, x, out, items, i + 1));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}
