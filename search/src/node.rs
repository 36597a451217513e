//! Search nodes and the parent-pointer arena used for path reconstruction.

use crate::contract::Cost;

/// An immutable search node.
///
/// Nodes are created once, when a transition is generated, and never
/// mutated. The action path to a node is recovered by walking `parent_id`
/// back-references through the [`NodeArena`].
#[derive(Debug, Clone)]
pub struct SearchNodeV1<S, A> {
    /// Dense identifier; equals the node's index in its arena.
    pub node_id: u64,
    /// Parent node ID (`None` for root).
    pub parent_id: Option<u64>,
    /// The state this node denotes.
    pub state: S,
    /// The action that produced this node from its parent.
    pub producing_action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost from the root.
    pub g_cost: Cost,
}

/// Append-only arena of search nodes.
///
/// Frontier entries carry node ids rather than whole paths: entries that
/// share a prefix share the arena nodes for it.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNodeV1<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create the root node. Returns its id.
    pub fn push_root(&mut self, state: S) -> u64 {
        self.push_node(None, state, None, 0, 0)
    }

    /// Create a child of `parent_id` reached by `action` at `step_cost`.
    ///
    /// # Panics
    ///
    /// Panics if `parent_id` does not name a node in this arena.
    pub fn push_child(&mut self, parent_id: u64, state: S, action: A, step_cost: Cost) -> u64 {
        let parent = self.get(parent_id);
        let depth = parent.depth + 1;
        let g_cost = parent.g_cost.saturating_add(step_cost);
        self.push_node(Some(parent_id), state, Some(action), depth, g_cost)
    }

    fn push_node(
        &mut self,
        parent_id: Option<u64>,
        state: S,
        producing_action: Option<A>,
        depth: u32,
        g_cost: Cost,
    ) -> u64 {
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNodeV1 {
            node_id,
            parent_id,
            state,
            producing_action,
            depth,
            g_cost,
        });
        node_id
    }

    /// Look up a node by id.
    ///
    /// # Panics
    ///
    /// Panics if `node_id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, node_id: u64) -> &SearchNodeV1<S, A> {
        usize::try_from(node_id)
            .ok()
            .and_then(|i| self.nodes.get(i))
            .unwrap_or_else(|| panic!("node {node_id} not in arena of {}", self.nodes.len()))
    }

    /// Number of nodes created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root to `node_id`, inclusive.
    #[must_use]
    pub fn reconstruct_path(&self, node_id: u64) -> Vec<u64> {
        let mut path = Vec::new();
        let mut current = Some(node_id);
        while let Some(id) = current {
            path.push(id);
            current = self.get(id).parent_id;
        }
        path.reverse();
        path
    }
}

impl<S, A: Clone> NodeArena<S, A> {
    /// The actions leading from the root to `node_id`, in execution order.
    #[must_use]
    pub fn reconstruct_actions(&self, node_id: u64) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.get(node_id).depth as usize);
        let mut current = self.get(node_id);
        while let Some(parent_id) = current.parent_id {
            if let Some(action) = &current.producing_action {
                actions.push(action.clone());
            }
            current = self.get(parent_id);
        }
        actions.reverse();
        actions
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
