use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static VAR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Named logic variable.
///
/// A variable's identity is its id string: two variables with the same
/// id are the same variable. Scratch variables created with [`Var::fresh`]
/// draw their id from a global counter and are distinct from all
/// explicitly named variables.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Var {
    id: Rc<str>,
}

impl Var {
    /// Create a logic variable with an explicit id.
    pub fn new(id: impl Into<Rc<str>>) -> Self {
        Var { id: id.into() }
    }

    /// Create an anonymous variable with a globally unique id.
    pub fn fresh() -> Self {
        let n = VAR_COUNTER.fetch_add(1, Ordering::Relaxed);
        Var {
            id: format!("${}", n).into(),
        }
    }

    /// Placeholder variable standing for the n-th unresolved variable
    /// of a reified answer.
    pub(crate) fn reified(n: usize) -> Self {
        Var {
            id: format!("_{}", n).into(),
        }
    }

    /// Return the variable's id.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl From<&str> for Var {
    fn from(id: &str) -> Self {
        Var::new(id)
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
