pub use crate::{
    core::{
        error::{Error, Result},
        goal::{share, Goal, RawGoal},
        logic_variable::Var,
        stream::Stream,
        substitution::Substitution,
        term::Term,
    },
    goals::{combinators::*, list::*, numbers::*, primitive::*, strings::*, State},
};

pub use crate::{conda, conde, condi, condr, condu, conj, defrel, disj, disji, fresh, run, seq};
