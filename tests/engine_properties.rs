use kanren::prelude::*;
use kanren::{conj, disji, fresh, run, seq};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn ground_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Term::from),
        "[a-z]{0,6}".prop_map(Term::from),
        any::<bool>().prop_map(Term::from),
        Just(Term::Undef),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Term::Seq)
    })
}

fn open_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        (0..4usize).prop_map(|i| Term::Var(Var::new(format!("v{}", i)))),
        any::<i64>().prop_map(Term::from),
        "[a-z]{0,6}".prop_map(Term::from),
        any::<bool>().prop_map(Term::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Term::Seq)
    })
}

fn ground_seq() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(ground_term(), 0..5)
}

// ============================================================================
// Unification properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_unify_makes_terms_equal(u in open_term(), v in open_term()) {
        // The occurs-checked unifier cannot build cyclic substitutions,
        // so walking the result always terminates.
        if let Some(s) = Substitution::empty().unify_occurs(&u, &v) {
            prop_assert_eq!(s.walk_star(&u), s.walk_star(&v));
        }
    }

    #[test]
    fn prop_unify_of_ground_terms_is_equality(u in ground_term(), v in ground_term()) {
        let unified = Substitution::empty().unify(&u, &v).is_some();
        prop_assert_eq!(unified, u == v);
    }

    #[test]
    fn prop_unify_is_symmetric(u in open_term(), v in open_term()) {
        let forwards = Substitution::empty().unify_occurs(&u, &v).is_some();
        let backwards = Substitution::empty().unify_occurs(&v, &u).is_some();
        prop_assert_eq!(forwards, backwards);
    }

    #[test]
    fn prop_occurs_check_blocks_self_containment(t in open_term()) {
        let x = Var::new("v0");
        let s = Substitution::empty();
        let contains_x = s.occurs(&x, &t);
        let bound = s.unify_occurs(&Term::Var(x.clone()), &t);
        if contains_x && t != Term::Var(x) {
            prop_assert!(bound.is_none());
        } else {
            prop_assert!(bound.is_some());
        }
    }

    #[test]
    fn prop_answers_extend_the_incoming_substitution(u in open_term(), v in open_term(), marker in ground_term()) {
        let kept = Var::new("kept");
        let s0 = Substitution::empty().extend(kept.clone(), marker.clone());
        for s in eq(u.clone(), v.clone()).apply(s0).into_vec().unwrap() {
            prop_assert_eq!(s.lookup(&kept), Some(&marker));
        }
    }
}

// ============================================================================
// Relational library properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_appendo_computes_concatenation(a in ground_seq(), b in ground_seq()) {
        let mut both = a.clone();
        both.extend(b.iter().cloned());
        let answers = run!(*, q, appendo(Term::Seq(a), Term::Seq(b), &q)).unwrap();
        prop_assert_eq!(answers, vec![Term::Seq(both)]);
    }

    #[test]
    fn prop_appendo_splits_are_sound_and_complete(l in ground_seq()) {
        let whole = Term::Seq(l.clone());
        let splits = run!(*, (p, s), appendo(p.clone(), s.clone(), whole.clone())).unwrap();
        prop_assert_eq!(splits.len(), l.len() + 1);
        for (k, split) in splits.iter().enumerate() {
            let expected = seq![
                Term::Seq(l[..k].to_vec()),
                Term::Seq(l[k..].to_vec())
            ];
            prop_assert_eq!(split, &expected);
        }
    }

    #[test]
    fn prop_lengtho_agrees_with_len(l in ground_seq()) {
        let n = l.len();
        let answers = run!(*, q, lengtho(Term::Seq(l), &q)).unwrap();
        prop_assert_eq!(answers, vec![Term::from(n)]);
    }

    #[test]
    fn prop_membero_finds_each_occurrence(l in ground_seq(), el in ground_term()) {
        let occurrences = l.iter().filter(|t| **t == el).count();
        let answers = run!(*, q, conj!(eq(&q, el.clone()), membero(el.clone(), Term::Seq(l)))).unwrap();
        prop_assert_eq!(answers.len(), occurrences);
    }

    #[test]
    fn prop_pluso_matches_bigint_addition(a in any::<i64>(), b in any::<i64>()) {
        use num_bigint::BigInt;
        let answers = run!(*, q, pluso(a, b, &q)).unwrap();
        prop_assert_eq!(answers, vec![Term::Int(BigInt::from(a) + BigInt::from(b))]);
    }
}

// ============================================================================
// Stream discipline
// ============================================================================

#[test]
fn fair_disjunction_reaches_a_buried_answer() {
    // One clause never produces; the other needs a few suspensions to
    // get to its answer. The interleaved disjunction must still find it.
    fn buried(depth: usize, x: Var) -> impl Goal<State> {
        move |s: State| {
            fn wrap(d: usize, st: Stream<State>) -> Stream<State> {
                if d == 0 {
                    st
                } else {
                    Stream::suspension(move || wrap(d - 1, st))
                }
            }
            wrap(depth, eq(&x, 1).apply(s))
        }
    }
    let x = Var::new("x");
    let g = disji!(nevero(); buried(7, x.clone()));
    let answers = g.run(1).into_vec().unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].walk(&Term::Var(x)), &Term::from(1));
}

#[test]
fn sequential_conjunction_short_circuits_before_a_diverging_goal() {
    let g = conj!(fail(), nevero());
    assert!(g.run(1).is_empty());
}

#[test]
fn interleaving_is_strict_round_robin_over_productive_clauses() {
    let x = Var::new("x");
    let g = disji!(
        eq(&x, 1);
        eq(&x, 2);
        eq(&x, 3)
    );
    let values: Vec<_> = g
        .run(9)
        .into_vec()
        .unwrap()
        .iter()
        .map(|s| s.reify(&Term::Var(x.clone())))
        .collect();
    assert_eq!(values, vec![Term::from(1), Term::from(2), Term::from(3)]);
}

#[test]
fn listo_enumerates_lists_of_every_length() {
    let answers = run!(5, q, listo(&q)).unwrap();
    for (n, answer) in answers.iter().enumerate() {
        match answer {
            Term::Seq(items) => assert_eq!(items.len(), n),
            other => panic!("expected a list, got {:?}", other),
        }
    }
}

#[test]
fn fresh_introductions_survive_into_every_answer() {
    let answers = fresh!((x, y), eq(x.clone(), 1), eq(y.clone(), 2))
        .run(9)
        .into_vec()
        .unwrap();
    assert_eq!(answers.len(), 1);
    let s = &answers[0];
    assert_eq!(s.walk(&Term::Var(Var::new("x"))), &Term::from(1));
    assert_eq!(s.walk(&Term::Var(Var::new("y"))), &Term::from(2));
}
