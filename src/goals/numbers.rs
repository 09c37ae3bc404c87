//! Relational arithmetic over arbitrary-precision integers.

use crate::core::error::Error;
use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::{unit, State};
use num_bigint::BigInt;
use num_traits::One;

/// Creates a goal that succeeds if `v` is one more than `u`. Either
/// side may be unbound and is computed from the other.
pub fn succo(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal<State> {
    let u = u.into();
    let v = v.into();
    move |s: State| {
        let uw = s.walk(&u).clone();
        let vw = s.walk(&v).clone();
        match (uw, vw) {
            (Term::Int(a), _) => unit(s.unify(&v, &Term::Int(a + BigInt::one()))),
            (Term::Var(_), Term::Int(b)) => unit(s.unify(&u, &Term::Int(b - BigInt::one()))),
            (Term::Var(_), Term::Var(_)) => Stream::raise(Error::instantiation("succo")),
            _ => Stream::empty(),
        }
    }
}

/// Creates a goal that succeeds if `a + b` equals `c`. Any single
/// argument may be unbound; with two or more unknowns the sum is
/// undecidable and an instantiation error is raised.
pub fn pluso(a: impl Into<Term>, b: impl Into<Term>, c: impl Into<Term>) -> impl Goal<State> {
    let a = a.into();
    let b = b.into();
    let c = c.into();
    move |s: State| {
        let aw = s.walk(&a).clone();
        let bw = s.walk(&b).clone();
        let cw = s.walk(&c).clone();
        let numeric = |t: &Term| matches!(t, Term::Int(_) | Term::Var(_));
        if !numeric(&aw) || !numeric(&bw) || !numeric(&cw) {
            return Stream::empty();
        }
        match (aw, bw, cw) {
            (Term::Int(x), Term::Int(y), _) => unit(s.unify(&c, &Term::Int(x + y))),
            (Term::Int(x), _, Term::Int(z)) => unit(s.unify(&b, &Term::Int(z - x))),
            (_, Term::Int(y), Term::Int(z)) => unit(s.unify(&a, &Term::Int(z - y))),
            _ => Stream::raise(Error::instantiation("pluso")),
        }
    }
}

/// Creates a goal that succeeds if `x` lies in the integer range
/// `[lo, hi]`. `Undef` as `hi` means the range is unbounded above. An
/// unbound `x` is enumerated upwards from `lo`.
pub fn betweeno(lo: impl Into<Term>, hi: impl Into<Term>, x: impl Into<Term>) -> impl Goal<State> {
    let lo = lo.into();
    let hi = hi.into();
    let x = x.into();
    move |s: State| {
        let low = match s.walk(&lo).clone() {
            Term::Int(n) => n,
            Term::Var(_) => return Stream::raise(Error::instantiation("betweeno")),
            _ => return Stream::empty(),
        };
        let high = match s.walk(&hi).clone() {
            Term::Int(n) => Some(n),
            Term::Undef => None,
            Term::Var(_) => return Stream::raise(Error::instantiation("betweeno")),
            _ => return Stream::empty(),
        };
        match s.walk(&x).clone() {
            Term::Int(v) => {
                let in_range = v >= low && high.as_ref().map_or(true, |h| &v <= h);
                if in_range {
                    Stream::singleton(s)
                } else {
                    Stream::empty()
                }
            }
            Term::Var(_) => between_enumerate(s, x.clone(), low, high),
            _ => Stream::empty(),
        }
    }
}

fn between_enumerate(s: State, x: Term, cur: BigInt, hi: Option<BigInt>) -> Stream<State> {
    if let Some(h) = &hi {
        if &cur > h {
            return Stream::Empty;
        }
    }
    let first = s.clone().unify(&x, &Term::Int(cur.clone()));
    let rest = Stream::suspension(move || between_enumerate(s, x, cur + BigInt::one(), hi));
    match first {
        Some(s1) => Stream::cons(s1, rest),
        None => rest,
    }
}

/// Creates a goal that succeeds if `u` resolves to a number. An unbound
/// variable is not a number and is never constrained to become one.
pub fn numbero(u: impl Into<Term>) -> impl Goal<State> {
    let u = u.into();
    move |s: State| {
        let is_number = matches!(s.walk(&u), Term::Int(_));
        if is_number {
            Stream::singleton(s)
        } else {
            Stream::empty()
        }
    }
}
