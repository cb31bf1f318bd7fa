use std::hash::Hash;

use crate::types::Subject;

/// Capability that maps a node to its immediate ancestor.
///
/// This is the single external collaborator of the crate. Implementations
/// must be deterministic, side-effect-free queries over a single-valued
/// parent relation; the walker guards against cyclic chains but cannot
/// repair them.
pub trait ParentResolver {
    /// Node identity within one lineage. Equality is identity: two nodes
    /// compare equal exactly when they name the same ancestor record.
    type Node: Clone + Eq + Hash;

    /// Immediate parent of `node`, or `None` when the chain terminates.
    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node>;
}

/// Host-configurable gate classifying a raw input before resolution runs.
///
/// Different hosts define "no value" and "no ancestor" differently; the gate
/// pins both notions down once, at the boundary, so the resolution
/// algorithms only ever see an explicit [`Subject`].
pub trait SubjectGate<Raw: ?Sized> {
    type Node;

    fn classify(&self, raw: &Raw) -> Subject<Self::Node>;
}
