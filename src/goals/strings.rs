//! Relations between strings, numbers and their character lists.

use crate::core::error::Error;
use crate::core::goal::Goal;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::{unit, State};
use num_bigint::BigInt;

enum Joined {
    Text(String),
    Undecidable,
    NotChars,
}

fn join_chars(chars: &Term) -> Joined {
    match chars {
        Term::Seq(items) => {
            let mut text = String::new();
            for item in items {
                match item {
                    Term::Str(c) if c.chars().count() == 1 => text.push_str(c),
                    Term::Var(_) => return Joined::Undecidable,
                    _ => return Joined::NotChars,
                }
            }
            Joined::Text(text)
        }
        Term::Var(_) => Joined::Undecidable,
        _ => Joined::NotChars,
    }
}

fn explode(text: &str) -> Term {
    Term::Seq(text.chars().map(Term::from).collect())
}

/// Creates a goal relating a string to the list of its single-character
/// strings. At least one side must be ground.
pub fn string_charso(text: impl Into<Term>, chars: impl Into<Term>) -> impl Goal<State> {
    let text = text.into();
    let chars = chars.into();
    move |s: State| {
        match s.walk(&text).clone() {
            Term::Str(t) => return unit(s.unify(&chars, &explode(&t))),
            Term::Var(_) => {}
            _ => return Stream::empty(),
        }
        match join_chars(&s.walk_star(&chars)) {
            Joined::Text(t) => unit(s.unify(&text, &Term::Str(t))),
            Joined::Undecidable => Stream::raise(Error::instantiation("string_charso")),
            Joined::NotChars => Stream::empty(),
        }
    }
}

/// Creates a goal relating a number to its decimal character list. At
/// least one side must be ground; a character list that does not spell
/// an integer fails.
pub fn number_charso(number: impl Into<Term>, chars: impl Into<Term>) -> impl Goal<State> {
    let number = number.into();
    let chars = chars.into();
    move |s: State| {
        match s.walk(&number).clone() {
            Term::Int(n) => return unit(s.unify(&chars, &explode(&n.to_string()))),
            Term::Var(_) => {}
            _ => return Stream::empty(),
        }
        match join_chars(&s.walk_star(&chars)) {
            Joined::Text(t) => match BigInt::parse_bytes(t.as_bytes(), 10) {
                Some(n) => unit(s.unify(&number, &Term::Int(n))),
                None => Stream::empty(),
            },
            Joined::Undecidable => Stream::raise(Error::instantiation("number_charso")),
            Joined::NotChars => Stream::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic_variable::Var;
    use crate::testing::{fails, has_unique_solution, succeeds};

    #[test]
    fn string_charso_explodes_a_ground_string() {
        has_unique_solution(run!(q, string_charso("abc", &q)), seq!['a', 'b', 'c']);
        has_unique_solution(run!(q, string_charso("", &q)), Term::nil());
    }

    #[test]
    fn string_charso_joins_a_ground_char_list() {
        has_unique_solution(run!(q, string_charso(&q, seq!['a', 'b'])), "ab".into());
    }

    #[test]
    fn string_charso_checks_both_ground_sides() {
        succeeds(string_charso("ab", seq!['a', 'b']));
        fails(string_charso("ab", seq!['a']));
    }

    #[test]
    fn string_charso_rejects_non_character_elements() {
        fails(fresh!((q), string_charso(q, seq!["ab"])));
        fails(fresh!((q), string_charso(q, seq![1, 2])));
    }

    #[test]
    fn string_charso_needs_one_ground_side() {
        let answers = run!(*, (t, cs), string_charso(&t, &cs));
        assert_eq!(answers, Err(Error::instantiation("string_charso")));
        let answers = run!(*, (t, c), string_charso(&t, seq!['a', &c]));
        assert_eq!(answers, Err(Error::instantiation("string_charso")));
    }

    #[test]
    fn number_charso_spells_out_a_number() {
        has_unique_solution(run!(q, number_charso(120, &q)), seq!['1', '2', '0']);
        has_unique_solution(run!(q, number_charso(-12, &q)), seq!['-', '1', '2']);
    }

    #[test]
    fn number_charso_parses_a_ground_char_list() {
        has_unique_solution(run!(q, number_charso(&q, seq!['4', '2'])), 42.into());
    }

    #[test]
    fn number_charso_fails_on_malformed_digits() {
        fails(fresh!((q), number_charso(q, seq!['4', 'x'])));
        fails(fresh!((q), number_charso(q, Term::nil())));
    }

    #[test]
    fn number_charso_needs_one_ground_side() {
        let x = Var::new("x");
        let answers = run!(*, q, number_charso(&q, &x));
        assert_eq!(answers, Err(Error::instantiation("number_charso")));
    }
}
