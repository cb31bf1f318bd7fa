use std::collections::HashSet;

use crate::error::{LineageError, Result};
use crate::resolver::ParentResolver;
use crate::types::{Chain, Subject};

/// Materializes the full ordered ancestor chain of one subject.
///
/// Purely a query over the injected [`ParentResolver`]; holds no state
/// between calls and is trivially reentrant.
pub struct ChainWalker<'a, P: ParentResolver> {
    resolver: &'a P,
}

impl<'a, P: ParentResolver> ChainWalker<'a, P> {
    pub fn new(resolver: &'a P) -> Self {
        Self { resolver }
    }

    /// Walk the ancestor chain of `subject`, nearest parent first.
    ///
    /// A [`Subject::Terminal`] subject yields the empty chain. Fails with
    /// [`LineageError::UnclassifiableSubject`] for an unclassifiable subject
    /// and with [`LineageError::CyclicAncestry`] if the resolver revisits a
    /// node instead of terminating.
    pub fn chain_of(&self, subject: &Subject<P::Node>) -> Result<Chain<P::Node>> {
        let start = match subject {
            Subject::Unclassifiable => return Err(LineageError::UnclassifiableSubject),
            Subject::Terminal => return Ok(Chain::empty()),
            Subject::Valued(node) => node,
        };

        let mut nodes = Vec::new();
        let mut visited: HashSet<P::Node> = HashSet::new();

        // The subject counts as seen, so a resolver that loops straight back
        // to it fails on the first step.
        visited.insert(start.clone());

        let mut current = start.clone();
        while let Some(parent) = self.resolver.parent_of(&current) {
            if !visited.insert(parent.clone()) {
                log::warn!("Cyclic ancestry chain after {} steps", nodes.len());
                return Err(LineageError::CyclicAncestry(nodes.len()));
            }
            nodes.push(parent.clone());
            current = parent;
        }

        Ok(Chain::new(nodes))
    }
}
