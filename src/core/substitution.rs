//! Substitutions map variables to terms.
//!
//! Terms can be atomic, composite or variables themselves.

use crate::core::logic_variable::Var;
use crate::core::term::Term;
use im::HashMap;
use std::fmt::Formatter;

/// Persistent mapping of variables to terms.
///
/// Extension never mutates: it returns a new substitution sharing
/// structure with the old one.
#[derive(Clone, PartialEq, Default)]
pub struct Substitution {
    subs: HashMap<Var, Term>,
}

impl Substitution {
    /// Initialize an empty substitution.
    pub fn empty() -> Self {
        Substitution {
            subs: HashMap::new(),
        }
    }

    /// Get number of substituted variables.
    pub fn n_subs(&self) -> usize {
        self.subs.len()
    }

    /// Look up the binding of a variable, if any.
    pub fn lookup(&self, x: &Var) -> Option<&Term> {
        self.subs.get(x)
    }

    /// Recursively attempt to resolve the value of a variable.
    ///
    /// If `t` is no variable, an unbound variable, or a variable bound
    /// to itself, `t` is returned as-is. A self-binding counts as
    /// unbound; it is how freshly introduced variables are recorded.
    pub fn walk<'a>(&'a self, mut t: &'a Term) -> &'a Term {
        while let Term::Var(x) = t {
            match self.subs.get(x) {
                Some(next) if next != t => t = next,
                _ => break,
            }
        }
        t
    }

    /// Attempt to resolve any variables contained in `t`.
    pub fn walk_star(&self, t: &Term) -> Term {
        match self.walk(t) {
            Term::Seq(items) => Term::Seq(items.iter().map(|e| self.walk_star(e)).collect()),
            other => other.clone(),
        }
    }

    /// Extend the substitution with a variable => term binding.
    ///
    /// The binding is not checked; in particular an existing
    /// self-binding for `x` is overwritten. The unifier guarantees it
    /// only binds unbound variables.
    pub fn extend(&self, x: Var, t: Term) -> Self {
        Substitution {
            subs: self.subs.update(x, t),
        }
    }

    /// Returns `true` if `t` contains a variable that is equivalent to
    /// `x` under this substitution.
    pub fn occurs(&self, x: &Var, t: &Term) -> bool {
        match self.walk(t) {
            Term::Var(v) => v == x,
            Term::Seq(items) => items.iter().any(|e| self.occurs(x, e)),
            _ => false,
        }
    }

    /// Attempt to unify terms `u` and `v` under this substitution.
    pub fn unify(self, u: &Term, v: &Term) -> Option<Self> {
        let uw = self.walk(u).clone();
        let vw = self.walk(v).clone();
        self.unify_walked(uw, vw, false)
    }

    /// As [`Substitution::unify`], but refuse to bind a variable to a
    /// term containing that variable. Never produces a cyclic
    /// substitution.
    pub fn unify_occurs(self, u: &Term, v: &Term) -> Option<Self> {
        let uw = self.walk(u).clone();
        let vw = self.walk(v).clone();
        self.unify_walked(uw, vw, true)
    }

    fn unify_walked(self, u: Term, v: Term, occurs_check: bool) -> Option<Self> {
        if u == v {
            return Some(self);
        }
        match (u, v) {
            (Term::Var(x), v) => self.bind(x, v, occurs_check),
            (u, Term::Var(y)) => self.bind(y, u, occurs_check),
            (Term::Seq(us), Term::Seq(vs)) if us.len() == vs.len() => {
                let mut s = self;
                for (a, b) in us.iter().zip(vs.iter()) {
                    s = if occurs_check {
                        s.unify_occurs(a, b)?
                    } else {
                        s.unify(a, b)?
                    };
                }
                Some(s)
            }
            _ => None,
        }
    }

    fn bind(self, x: Var, t: Term, occurs_check: bool) -> Option<Self> {
        if occurs_check && self.occurs(&x, &t) {
            return None;
        }
        Some(self.extend(x, t))
    }

    /// Substitute all variables that remain fresh in `t` with reified
    /// placeholder variables.
    fn reify_s(self, t: &Term) -> Self {
        match self.walk(t).clone() {
            Term::Var(x) => {
                let placeholder = Term::Var(Var::reified(self.n_subs()));
                self.extend(x, placeholder)
            }
            Term::Seq(items) => items.iter().fold(self, |s, e| s.reify_s(e)),
            _ => self,
        }
    }

    /// Replace all variables contained in `t` with their substituted
    /// values and name the ones without substitution `_0`, `_1`, ….
    pub fn reify(&self, t: &Term) -> Term {
        let v = self.walk_star(t);
        let names = Substitution::empty().reify_s(&v);
        names.walk_star(&v)
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.subs.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}
