//! Macros for embedding the engine as a DSL in Rust.

/// Constructs a sequence term from any mix of convertible values.
#[macro_export]
macro_rules! seq {
    ($($x:expr),* $(,)?) => {
        $crate::prelude::Term::Seq(vec![$($crate::prelude::Term::from($x)),*])
    };
}

/// Creates a goal that succeeds if any of its subgoals succeeds.
/// Subgoals are tried in order; each is exhausted before the next.
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj2($g0, $crate::disj!($($g);*)) };
}

/// Creates a goal that succeeds if all of its subgoals succeed.
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::conj2($g0, $crate::conj!($($g),*)) };
}

/// Creates a goal that succeeds if any of its subgoals succeeds,
/// drawing answers from the subgoals in strict rotation.
#[macro_export]
macro_rules! disji {
    () => { $crate::prelude::fail() };
    ($($g:expr);+ $(;)?) => {
        $crate::prelude::disji(vec![$($crate::prelude::share($g)),+])
    };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (separated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),*;)* ) => {
        $crate::disj!($($crate::conj!($($g),*));*)
    };
}

/// As [`conde!`], but lines take strict turns contributing answers, so
/// a line with an answer is heard even next to an endless one.
#[macro_export]
macro_rules! condi {
    ( $($($g:expr),*;)* ) => {
        $crate::disji!($($crate::conj!($($g),*));*)
    };
}

/// As [`conde!`], but each pull draws from a uniformly random
/// non-exhausted line. No ordering guarantees; keep it out of
/// deterministic tests.
#[macro_export]
macro_rules! condr {
    () => { $crate::prelude::fail() };
    ( $($($g:expr),+;)+ ) => {
        $crate::prelude::condr(vec![$($crate::prelude::share($crate::conj!($($g),+))),+])
    };
}

/// Soft cut: commit to the first line whose head goal succeeds. The
/// committed line contributes one answer per answer of its head; every
/// later line is discarded. A line is `head, goal, goal, …`.
#[macro_export]
macro_rules! conda {
    () => { $crate::prelude::fail() };
    ($g0:expr $(, $g:expr)* $(;)?) => {
        $crate::prelude::ifte($g0, $crate::conj!($($g),*), $crate::prelude::fail())
    };
    ($g0:expr $(, $g:expr)*; $($rest:tt)+) => {
        $crate::prelude::ifte($g0, $crate::conj!($($g),*), $crate::conda!($($rest)+))
    };
}

/// Committed choice: as [`conda!`], but only the first answer of the
/// committing head is used.
#[macro_export]
macro_rules! condu {
    () => { $crate::prelude::fail() };
    ($g0:expr $(, $g:expr)* $(;)?) => {
        $crate::prelude::ifte(
            $crate::prelude::once($g0),
            $crate::conj!($($g),*),
            $crate::prelude::fail(),
        )
    };
    ($g0:expr $(, $g:expr)*; $($rest:tt)+) => {
        $crate::prelude::ifte(
            $crate::prelude::once($g0),
            $crate::conj!($($g),*),
            $crate::condu!($($rest)+),
        )
    };
}

/// Bind fresh variables with scope inside the body of `fresh!`. Each
/// variable is introduced with [`call_fresh`](crate::prelude::call_fresh),
/// so applying the goal records it in the substitution.
#[macro_export]
macro_rules! fresh {
    ((), $($g:expr),* $(,)?) => { $crate::conj!($($g),*) };
    (($x:ident $(, $rest:ident)*), $($g:expr),* $(,)?) => {
        $crate::prelude::call_fresh(stringify!($x), move |$x| {
            $crate::fresh!(($($rest),*), $($g),*)
        })
    };
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// The generated function delays construction of its body until the
/// goal is applied, which is what allows relations to call themselves.
/// The `trace` variants additionally log every application of the
/// relation at trace level.
#[macro_export]
macro_rules! defrel {
    ($(#[$outer:meta])* pub $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal<$crate::prelude::State> {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal<$crate::prelude::State> {
            $crate::defrel!(@body: $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* pub trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        pub fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal<$crate::prelude::State> {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        fn $name($($args: impl Into<$crate::prelude::Term>),*) -> impl $crate::prelude::Goal<$crate::prelude::State> {
            $crate::defrel!(@tracebody: $name, $($args),* { $($g),* })
        }
    };

    // alternate syntax: separate goals with ;
    (pub $name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{pub $name($($args),*) { $($g),* }}
    };

    ($name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{$name($($args),*) { $($g),* }}
    };

    (@body: $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::RawGoal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};

    (@tracebody: $name:ident, $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args = $args.into();
        )*
        move |s: $crate::prelude::State| {
            $crate::_log::trace!(
                "{}({})",
                stringify!($name),
                [$(format!("{:?}", s.reify(&$args))),*].join(", ")
            );
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::RawGoal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};
}

/// Run one or more goals against the empty state and reify the query
/// variable in every answer.
///
/// `run!(n, q, goals…)` collects at most `n` answers and
/// `run!(*, q, goals…)` all of them (diverging if there are infinitely
/// many); both return `Result<Vec<Term>, Error>`. `run!(q, goals…)`
/// returns a lazy iterator of `Result<Term, Error>` instead. In every
/// form the query may also be a tuple of variables, which projects each
/// answer as a sequence of their values.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ all, ($($x),*), $($body)*)
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ all, $q, $($g),*)
    };

    ($n:expr, ($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ take $n, ($($x),*), $($body)*)
    };

    ($n:expr, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ take $n, $q, $($g),*)
    };

    (($($x:ident),*), $($body:tt)*) => {
        $crate::run!(@ iter, ($($x),*), $($body)*)
    };

    ($q:ident, $($g:expr),* $(,)?) => {
        $crate::run!(@ iter, $q, $($g),*)
    };

    (@ all, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ all, q, {
            $crate::fresh!(
                ($($x),*),
                $crate::prelude::eq(
                    $crate::prelude::Term::Seq(vec![$($crate::prelude::Term::Var($x.clone())),*]),
                    q.clone()
                ),
                $($g),*
            )
        })
    };

    (@ take $n:expr, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ take $n, q, {
            $crate::fresh!(
                ($($x),*),
                $crate::prelude::eq(
                    $crate::prelude::Term::Seq(vec![$($crate::prelude::Term::Var($x.clone())),*]),
                    q.clone()
                ),
                $($g),*
            )
        })
    };

    (@ iter, ($($x:ident),*), $($g:expr),* $(,)?) => {
        $crate::run!(@ iter, q, {
            $crate::fresh!(
                ($($x),*),
                $crate::prelude::eq(
                    $crate::prelude::Term::Seq(vec![$($crate::prelude::Term::Var($x.clone())),*]),
                    q.clone()
                ),
                $($g),*
            )
        })
    };

    (@ all, $q:ident, $($g:expr),* $(,)?) => {{
        let $q = $crate::prelude::Var::new(stringify!($q));
        let var = $crate::prelude::Term::Var($q.clone());
        let s0 = $crate::prelude::Substitution::empty().extend($q.clone(), var.clone());
        $crate::prelude::RawGoal::apply(&$crate::conj!($($g),*), s0)
            .take_inf_all()
            .map(move |s| s.reify(&var))
            .into_vec()
    }};

    (@ take $n:expr, $q:ident, $($g:expr),* $(,)?) => {{
        let $q = $crate::prelude::Var::new(stringify!($q));
        let var = $crate::prelude::Term::Var($q.clone());
        let s0 = $crate::prelude::Substitution::empty().extend($q.clone(), var.clone());
        $crate::prelude::RawGoal::apply(&$crate::conj!($($g),*), s0)
            .take_inf($n)
            .map(move |s| s.reify(&var))
            .into_vec()
    }};

    (@ iter, $q:ident, $($g:expr),* $(,)?) => {{
        let $q = $crate::prelude::Var::new(stringify!($q));
        let var = $crate::prelude::Term::Var($q.clone());
        let s0 = $crate::prelude::Substitution::empty().extend($q.clone(), var.clone());
        $crate::prelude::RawGoal::apply(&$crate::conj!($($g),*), s0)
            .into_iter()
            .map(move |r| r.map(|s| s.reify(&var)))
    }};
}
