//! A minimalist relational logic programming engine.
//!
//! Goals map substitutions to lazy streams of substitutions. Programs
//! are built from unification ([`prelude::eq`]), the combinator algebra
//! (`conj!`, `disj!`, `disji!`, `conde!`, `conda!`, `condu!`, …) and a
//! library of relational list, arithmetic and string goals, then run
//! with the `run!` macro:
//!
//! ```
//! use kanren::prelude::*;
//!
//! let answers = run!(*, q, membero(&q, seq![1, 2, 3])).unwrap();
//! assert_eq!(answers, vec![Term::from(1), Term::from(2), Term::from(3)]);
//! ```

#[macro_use]
pub mod macros;
pub mod core;
pub mod goals;
pub mod prelude;
pub mod testing;

#[doc(hidden)]
pub use log as _log;
