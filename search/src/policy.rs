//! Search policy types.

use crate::error::SearchError;

/// Search budget and goal-test configuration.
///
/// The default policy is unbounded and goal-tests on expansion, which is the
/// behavior every strategy's optimality guarantee is stated against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// Depth cutoff: children deeper than this are never generated.
    ///
    /// A state reached again at a strictly shallower depth is re-expanded,
    /// so every goal within the cutoff stays reachable.
    pub max_depth: Option<u32>,
    /// When a state is tested against the goal.
    pub goal_test: GoalTestV1,
    /// Retain one `ExpandEventV1` per expansion in the result graph.
    pub record_graph: bool,
}

impl SearchPolicyV1 {
    /// Validate this policy for the given strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero, and
    /// [`SearchError::UnsupportedPolicyMode`] if [`GoalTestV1::OnGeneration`]
    /// is selected for a cost-ordered strategy.
    pub fn validate(&self, strategy: StrategyV1) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must allow at least one expansion".into(),
            });
        }
        if self.goal_test == GoalTestV1::OnGeneration && strategy.is_cost_ordered() {
            return Err(SearchError::UnsupportedPolicyMode {
                detail: format!(
                    "GoalTestV1::OnGeneration would forfeit cost-optimality of {}",
                    strategy.as_str()
                ),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: None,
            max_depth: None,
            goal_test: GoalTestV1::OnExpansion,
            record_graph: true,
        }
    }
}

/// When the goal predicate is applied to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTestV1 {
    /// When the state is popped, before its successors are generated.
    /// Default.
    OnExpansion,
    /// When the state is first generated as a successor. Saves one frontier
    /// layer for BFS; only valid for strategies that ignore cost.
    OnGeneration,
}

/// The traversal strategy a search ran under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyV1 {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    /// Best-first on `g + h`.
    AStar,
}

impl StrategyV1 {
    /// Whether the frontier is ordered by accumulated cost.
    #[must_use]
    pub fn is_cost_ordered(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }

    /// Stable identifier used in serialized graphs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::UniformCost => "uniform_cost",
            Self::AStar => "astar",
        }
    }
}
