use std::collections::HashMap;

use lineage_core::{ParentResolver, Subject, SubjectGate};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::{GraphError, Result};

/// Named single-parent lineage store.
///
/// Edges point child → parent, so each node has at most one outgoing edge;
/// [`LineageGraph::link_parent`] enforces that at construction time. A name
/// index gives hosts fast lookup without touching indices.
pub struct LineageGraph {
    /// Directed graph (child -> parent)
    graph: DiGraph<String, ()>,

    /// Node name -> NodeIndex mapping for fast lookup
    name_index: HashMap<String, NodeIndex>,
}

impl LineageGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
        }
    }

    /// Register a node under `name`.
    pub fn add_node(&mut self, name: &str) -> Result<NodeIndex> {
        if self.name_index.contains_key(name) {
            return Err(GraphError::DuplicateNode(name.to_string()));
        }

        let idx = self.graph.add_node(name.to_string());
        self.name_index.insert(name.to_string(), idx);

        log::debug!("Registered lineage node: {name}");
        Ok(idx)
    }

    /// Link `child` to its immediate parent.
    ///
    /// The parent relation is single-valued: a child with an existing parent
    /// cannot be relinked, and a node cannot parent itself.
    pub fn link_parent(&mut self, child: NodeIndex, parent: NodeIndex) -> Result<()> {
        let child_name = self.require(child)?.to_string();
        self.require(parent)?;

        if child == parent {
            return Err(GraphError::SelfParent(child_name));
        }
        if self.graph.edges(child).next().is_some() {
            return Err(GraphError::DuplicateParent(child_name));
        }

        self.graph.add_edge(child, parent, ());
        log::debug!(
            "Linked {child_name} -> {}",
            self.graph[parent]
        );
        Ok(())
    }

    /// Find node by name
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.name_index.get(name).copied()
    }

    /// Name registered for a node index
    pub fn name_of(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn require(&self, idx: NodeIndex) -> Result<&str> {
        self.name_of(idx)
            .ok_or_else(|| GraphError::NodeNotFound(format!("{idx:?}")))
    }
}

impl Default for LineageGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentResolver for LineageGraph {
    type Node = NodeIndex;

    fn parent_of(&self, node: &NodeIndex) -> Option<NodeIndex> {
        // At most one outgoing edge exists per node.
        self.graph.neighbors(*node).next()
    }
}

/// `None` is this host's terminal marker; a name that was never registered
/// has no ancestry relation at all.
impl<'s> SubjectGate<Option<&'s str>> for LineageGraph {
    type Node = NodeIndex;

    fn classify(&self, raw: &Option<&'s str>) -> Subject<NodeIndex> {
        match raw {
            None => Subject::Terminal,
            Some(name) => match self.find(name) {
                Some(idx) => Subject::Valued(idx),
                None => Subject::Unclassifiable,
            },
        }
    }
}
