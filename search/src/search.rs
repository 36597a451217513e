//! Search entry points and the shared expansion loop.
//!
//! All four strategies run the same graph-search skeleton and differ only
//! in the frontier they hand it and the priority each node is pushed with:
//!
//! | Strategy | Frontier | Priority |
//! |---|---|---|
//! | breadth-first | [`Queue`] | none |
//! | depth-first | [`Stack`] | none |
//! | uniform-cost | [`PriorityQueue`] | `g` |
//! | A* | [`PriorityQueue`] | `g + h` |
//!
//! A state is expanded at most once per call. The frontier may hold several
//! entries for the same state; only the first pop expands it and later pops
//! are discarded (lazy deletion).
//!
//! Under a `max_depth` cutoff a state is expanded again when it is popped at
//! a strictly shallower depth than before, since its deeper expansion may
//! have had children cut off. Each such expansion is counted in
//! `total_reexpansions`.

use std::collections::HashMap;

use crate::contract::{Cost, SearchProblemV1};
use crate::error::SearchError;
use crate::frontier::{Frontier, PriorityQueue, Queue, Stack};
use crate::graph::{ExpandEventV1, SearchGraphMetadata, SearchGraphV1, TerminationReasonV1};
use crate::node::NodeArena;
use crate::policy::{GoalTestV1, SearchPolicyV1, StrategyV1};

/// What the search loop stores in its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Arena id of the node awaiting expansion.
    pub node_id: u64,
    /// The priority the entry was pushed with.
    pub priority: Cost,
}

/// Result of a search execution.
///
/// Always contains a complete `SearchGraphV1` audit trail regardless of how
/// the search terminated. `actions == None` means no solution was found;
/// `Some(vec![])` means the start state is itself a goal.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Actions from the start state to the goal, in execution order.
    pub actions: Option<Vec<A>>,
    /// Accumulated step cost of `actions`.
    pub cost: Option<Cost>,
    /// The search audit trail.
    pub graph: SearchGraphV1,
}

impl<A> SearchResult<A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReasonV1::GoalReached { .. }
        )
    }

    #[must_use]
    pub fn termination_reason(&self) -> TerminationReasonV1 {
        self.graph.metadata.termination_reason
    }

}

/// Search the shallowest nodes first.
///
/// Returns a path with the fewest actions when step costs are uniform.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails pre-flight validation.
pub fn breadth_first_search<P: SearchProblemV1>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<P::Action>, SearchError> {
    graph_search(
        problem,
        Queue::new(),
        StrategyV1::BreadthFirst,
        |_, _| 0,
        policy,
    )
}

/// Search the deepest nodes first. No optimality guarantee.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails pre-flight validation.
pub fn depth_first_search<P: SearchProblemV1>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<P::Action>, SearchError> {
    graph_search(
        problem,
        Stack::new(),
        StrategyV1::DepthFirst,
        |_, _| 0,
        policy,
    )
}

/// Search the node of least accumulated cost first.
///
/// Returns a cheapest path.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails pre-flight validation.
pub fn uniform_cost_search<P: SearchProblemV1>(
    problem: &P,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<P::Action>, SearchError> {
    graph_search(
        problem,
        PriorityQueue::new(),
        StrategyV1::UniformCost,
        |_, g_cost| g_cost,
        policy,
    )
}

/// Search the node with the lowest `g + heuristic(state)` first.
///
/// Returns a cheapest path provided `heuristic` never overestimates the
/// remaining cost. With [`crate::contract::null_heuristic`] this is exactly
/// [`uniform_cost_search`].
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails pre-flight validation.
pub fn astar_search<P, H>(
    problem: &P,
    heuristic: H,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<P::Action>, SearchError>
where
    P: SearchProblemV1,
    H: Fn(&P::State, &P) -> Cost,
{
    graph_search(
        problem,
        PriorityQueue::new(),
        StrategyV1::AStar,
        |state, g_cost| g_cost.saturating_add(heuristic(state, problem)),
        policy,
    )
}

/// Counters accumulated over one search call.
#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    nodes_generated: u64,
    duplicates_suppressed: u64,
    stale_pops: u64,
    reexpansions: u64,
    depth_skips: u64,
    frontier_high_water: u64,
}

/// Run the shared graph-search loop.
///
/// `priority` maps a freshly generated node's `(state, g_cost)` to the key
/// it is pushed with; frontiers that ignore priority may pass a constant.
///
/// Terminates with `GoalReached`, `FrontierExhausted`, `DepthBudgetExceeded`
/// or `ExpansionBudgetExceeded`. Termination on an unbounded state space is
/// only guaranteed when a budget is set or a goal is reachable.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight policy validation failures.
/// No `SearchGraphV1` is produced in that case because no search steps
/// were taken.
pub fn graph_search<P, F, K>(
    problem: &P,
    mut frontier: F,
    strategy: StrategyV1,
    priority: K,
    policy: &SearchPolicyV1,
) -> Result<SearchResult<P::Action>, SearchError>
where
    P: SearchProblemV1,
    F: Frontier<FrontierEntry>,
    K: Fn(&P::State, Cost) -> Cost,
{
    policy.validate(strategy)?;

    let mut arena: NodeArena<P::State, P::Action> = NodeArena::new();
    // State -> shallowest depth it was expanded at.
    let mut expanded: HashMap<P::State, u32> = HashMap::new();
    let depth_limited = policy.max_depth.is_some();
    let settled = |expanded: &HashMap<P::State, u32>, state: &P::State, depth: u32| {
        expanded
            .get(state)
            .is_some_and(|&at| !depth_limited || at <= depth)
    };
    let mut expansions: Vec<ExpandEventV1> = Vec::new();
    let mut counters = Counters::default();

    let root_state = problem.start_state();
    let root_priority = priority(&root_state, 0);
    let root_id = arena.push_root(root_state);
    counters.nodes_generated += 1;
    frontier.push(
        FrontierEntry {
            node_id: root_id,
            priority: root_priority,
        },
        root_priority,
    );
    counters.frontier_high_water = 1;

    log::debug!(
        "search start: strategy={} goal_test={:?} max_expansions={:?} max_depth={:?}",
        strategy.as_str(),
        policy.goal_test,
        policy.max_expansions,
        policy.max_depth
    );

    let termination_reason = loop {
        if frontier.is_empty() {
            break if counters.depth_skips > 0 {
                TerminationReasonV1::DepthBudgetExceeded
            } else {
                TerminationReasonV1::FrontierExhausted
            };
        }

        let entry = frontier.pop();
        let current = arena.get(entry.node_id);

        // Lazy deletion: a later, possibly costlier, route to an expanded state.
        if settled(&expanded, &current.state, current.depth) {
            counters.stale_pops += 1;
            continue;
        }
        let reexpansion = expanded.contains_key(&current.state);

        // The root is never "generated", so it is always tested here.
        let test_now =
            policy.goal_test == GoalTestV1::OnExpansion || current.parent_id.is_none();
        if test_now && problem.is_goal(&current.state) {
            break TerminationReasonV1::GoalReached {
                node_id: entry.node_id,
            };
        }

        if policy
            .max_expansions
            .is_some_and(|cap| counters.expansions >= cap)
        {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }

        let state = current.state.clone();
        let (parent_id, depth, g_cost) = (current.parent_id, current.depth, current.g_cost);
        expanded.insert(state.clone(), depth);
        if reexpansion {
            counters.reexpansions += 1;
        }

        let mut children_pushed = 0u64;
        let mut duplicates_suppressed = 0u64;
        let mut goal_child = None;

        for successor in problem.successors(&state) {
            if settled(&expanded, &successor.state, depth + 1) {
                duplicates_suppressed += 1;
                continue;
            }
            if policy.max_depth.is_some_and(|max| depth + 1 > max) {
                counters.depth_skips += 1;
                continue;
            }

            let child_id =
                arena.push_child(entry.node_id, successor.state, successor.action, successor.cost);
            counters.nodes_generated += 1;
            let child = arena.get(child_id);

            if policy.goal_test == GoalTestV1::OnGeneration && problem.is_goal(&child.state) {
                goal_child = Some(child_id);
                break;
            }

            let child_priority = priority(&child.state, child.g_cost);
            frontier.push(
                FrontierEntry {
                    node_id: child_id,
                    priority: child_priority,
                },
                child_priority,
            );
            children_pushed += 1;
        }

        counters.duplicates_suppressed += duplicates_suppressed;
        counters.frontier_high_water = counters.frontier_high_water.max(frontier.len() as u64);

        log::trace!(
            "expand #{}: node={} depth={} g={} priority={} pushed={} dup={}",
            counters.expansions,
            entry.node_id,
            depth,
            g_cost,
            entry.priority,
            children_pushed,
            duplicates_suppressed
        );

        if policy.record_graph {
            expansions.push(ExpandEventV1 {
                expansion_order: counters.expansions,
                node_id: entry.node_id,
                parent_id,
                depth,
                g_cost,
                priority: entry.priority,
                children_pushed,
                duplicates_suppressed,
            });
        }
        counters.expansions += 1;

        if let Some(node_id) = goal_child {
            break TerminationReasonV1::GoalReached { node_id };
        }
    };

    let (actions, cost) = match termination_reason {
        TerminationReasonV1::GoalReached { node_id } => (
            Some(arena.reconstruct_actions(node_id)),
            Some(arena.get(node_id).g_cost),
        ),
        _ => (None, None),
    };

    log::debug!(
        "search done: strategy={} termination={} expansions={} generated={} stale_pops={} reexpansions={} cost={:?}",
        strategy.as_str(),
        termination_reason.as_str(),
        counters.expansions,
        counters.nodes_generated,
        counters.stale_pops,
        counters.reexpansions,
        cost
    );

    let metadata = SearchGraphMetadata {
        strategy,
        goal_test: policy.goal_test,
        total_expansions: counters.expansions,
        total_nodes_generated: counters.nodes_generated,
        total_duplicates_suppressed: counters.duplicates_suppressed,
        total_stale_pops: counters.stale_pops,
        total_reexpansions: counters.reexpansions,
        total_depth_skips: counters.depth_skips,
        frontier_high_water: counters.frontier_high_water,
        termination_reason,
        solution_length: actions.as_ref().map(|a| a.len() as u64),
        solution_cost: cost,
    };

    Ok(SearchResult {
        actions,
        cost,
        graph: SearchGraphV1 {
            expansions,
            metadata,
        },
    })
}
