//! The kernel's closed error surface.
//!
//! Most of these never escape the pipeline: conjugation and lookup failures are
//! swallowed and turned into empty results per the propagation policy described
//! on [`crate::pipeline`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KernelError {
    /// A particular predicate class cannot produce the requested conjugation.
    ///
    /// Always filtered internally by the deconjugation search; never surfaces
    /// through [`crate::conjugate::deconjugate`].
    #[error("{class:?} has no {conjugation:?} conjugation")]
    UnknownConjugation {
        class: crate::conjugate::PredicateClass,
        conjugation: crate::conjugate::Conjugation,
    },

    /// A terminal-only auxiliary appeared somewhere other than the last
    /// position of a chain. This is a programming error: the pipeline only ever
    /// assembles chains the engine has already validated, so this surfaces
    /// solely on direct, incorrect use of [`crate::conjugate::forward`].
    #[error("{auxiliary:?} is terminal-only and cannot appear at chain position {position}")]
    InvalidAuxiliaryChain {
        auxiliary: crate::conjugate::Auxiliary,
        position: usize,
    },

    /// The headword was not present in any index. Not an error in the ordinary
    /// sense: callers turn this into an empty `meaning` field.
    #[error("no entry for {headword:?}")]
    LookupMiss { headword: String },

    /// Neither a local copy nor an auto-download of the dictionary succeeded.
    /// The service continues in degraded mode: every token gets an empty
    /// meaning, but segmentation, grouping and conjugation are unaffected.
    #[error("dictionary unavailable: {reason}")]
    DictionaryUnavailable { reason: String },

    /// The input was empty, or the segmenter refused it outright.
    #[error("bad input: {reason}")]
    BadInput { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T, E = KernelError> = std::result::Result<T, E>;
