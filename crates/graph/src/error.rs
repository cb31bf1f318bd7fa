use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Construction-time misuse of a [`crate::LineageGraph`].
///
/// Kept separate from `lineage-core`'s resolution errors: these fire while a
/// host assembles its lineage, before any chain is ever walked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Node already has a parent: {0}")]
    DuplicateParent(String),

    #[error("Node cannot be its own parent: {0}")]
    SelfParent(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),
}
