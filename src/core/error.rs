//! Error kinds surfaced to consumers.
//!
//! Logical failure is not an error: it only prunes the answer stream.
//! An instantiation error means a relation was asked to decide something
//! its arguments do not determine; it is raised at the pull that hits it
//! and terminates the stream.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{predicate}: arguments insufficiently instantiated")]
    Instantiation { predicate: &'static str },
}

impl Error {
    pub fn instantiation(predicate: &'static str) -> Self {
        Error::Instantiation { predicate }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
