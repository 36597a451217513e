//! `SearchGraphV1`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of `ExpandEventV1`
//! entries; the metadata block aggregates counters and the termination
//! reason. Both are serialized through the canonical JSON writer so that a
//! digest of the graph pins down the exact traversal.

use crate::contract::Cost;
use crate::policy::{GoalTestV1, StrategyV1};
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH};

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraphV1 {
    /// Ordered expansion events. Empty when the policy disables recording.
    pub expansions: Vec<ExpandEventV1>,
    /// Aggregate counters and outcome.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop that led to successor generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEventV1 {
    /// Total order of expansions.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub depth: u32,
    pub g_cost: Cost,
    /// The frontier priority the node was pushed with.
    pub priority: Cost,
    /// Successors pushed onto the frontier.
    pub children_pushed: u64,
    /// Successors dropped because their state was already expanded.
    pub duplicates_suppressed: u64,
}

/// Aggregate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    pub strategy: StrategyV1,
    pub goal_test: GoalTestV1,

    // Counters
    pub total_expansions: u64,
    pub total_nodes_generated: u64,
    pub total_duplicates_suppressed: u64,
    /// Pops discarded because their state had already been expanded.
    pub total_stale_pops: u64,
    /// Expansions of an already-expanded state reached at a shallower depth.
    /// Always zero without `max_depth`.
    pub total_reexpansions: u64,
    /// Successors not generated because they exceeded `max_depth`.
    pub total_depth_skips: u64,
    pub frontier_high_water: u64,

    pub termination_reason: TerminationReasonV1,
    /// Number of actions in the solution, if one was found.
    pub solution_length: Option<u64>,
    /// Accumulated cost of the solution, if one was found.
    pub solution_cost: Option<Cost>,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// Search found a goal state.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// Frontier emptied, but only because `max_depth` cut off successors.
    DepthBudgetExceeded,
}

impl TerminationReasonV1 {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::DepthBudgetExceeded => "depth_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraphV1 {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_GRAPH, &bytes))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "children_pushed": e.children_pushed,
        "depth": e.depth,
        "duplicates_suppressed": e.duplicates_suppressed,
        "expansion_order": e.expansion_order,
        "g_cost": e.g_cost,
        "node_id": e.node_id,
        "parent_id": e.parent_id,
        "priority": e.priority,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "goal_test": goal_test_str(m.goal_test),
        "solution_cost": m.solution_cost,
        "solution_length": m.solution_length,
        "strategy": m.strategy.as_str(),
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_depth_skips": m.total_depth_skips,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_nodes_generated": m.total_nodes_generated,
        "total_reexpansions": m.total_reexpansions,
        "total_stale_pops": m.total_stale_pops,
    })
}

fn goal_test_str(g: GoalTestV1) -> &'static str {
    match g {
        GoalTestV1::OnExpansion => "on_expansion",
        GoalTestV1::OnGeneration => "on_generation",
    }
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        _ => serde_json::json!({"type": r.as_str()}),
    }
}
