use thiserror::Error;

pub type Result<T> = std::result::Result<T, LineageError>;

/// Errors raised during ancestry resolution.
///
/// Absence of a relation is never an error: "no common ancestor" and "not an
/// ancestor" are ordinary negative results. These variants signal caller
/// misuse or a broken resolver and always propagate to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineageError {
    /// The subject has no defined ancestry relation at all.
    #[error("Subject is unclassifiable: it has no ancestry relation")]
    UnclassifiableSubject,

    /// The parent resolver revisited a node instead of terminating.
    #[error("Cyclic ancestry detected after {0} steps")]
    CyclicAncestry(usize),
}
