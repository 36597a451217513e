//! Search properties: behaviour every strategy must exhibit on any problem.
//!
//! Checks run against seeded random graphs with brute-force reference
//! answers, plus a problem with a single dead-end state:
//!
//! - a start state that is already a goal yields an empty plan
//! - breadth-first finds the fewest actions
//! - uniform-cost finds the cheapest cost, and the reported cost agrees
//!   with `cost_of_actions`
//! - A* with the null heuristic behaves exactly like uniform-cost
//! - no state is ever expanded twice in one call
//! - exhausting the frontier is reported as failure, not an empty plan

use lock_tests::fixtures::{Counting, Isolated, RandomGraph};
use pathway_search::contract::{null_heuristic, replay, SearchProblemV1};
use pathway_search::error::SearchError;
use pathway_search::graph::TerminationReasonV1;
use pathway_search::policy::SearchPolicyV1;
use pathway_search::search::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search, SearchResult,
};

const SEEDS: [u64; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

fn graph(seed: u64) -> RandomGraph {
    RandomGraph::generate(seed, 40, 3, 9)
}

type Strategy<P> = fn(
    &P,
    &SearchPolicyV1,
) -> Result<SearchResult<<P as SearchProblemV1>::Action>, SearchError>;

/// The four strategies by name, each runnable on its own.
fn strategies<P: SearchProblemV1>() -> [(&'static str, Strategy<P>); 4] {
    [
        ("bfs", breadth_first_search::<P>),
        ("dfs", depth_first_search::<P>),
        ("ucs", uniform_cost_search::<P>),
        ("astar", |problem, policy| {
            astar_search(problem, null_heuristic, policy)
        }),
    ]
}

/// Run all four strategies with the default policy.
fn run_all<P: SearchProblemV1>(problem: &P) -> Vec<(&'static str, SearchResult<P::Action>)> {
    let policy = SearchPolicyV1::default();
    strategies::<P>()
        .into_iter()
        .map(|(name, run)| (name, run(problem, &policy).unwrap()))
        .collect()
}

// ---------------------------------------------------------------------------
// Start state is a goal
// ---------------------------------------------------------------------------

/// Every vertex is a goal, so the start is too.
struct AlreadyThere(RandomGraph);

impl SearchProblemV1 for AlreadyThere {
    type State = usize;
    type Action = usize;

    fn start_state(&self) -> usize {
        self.0.start_state()
    }

    fn is_goal(&self, _state: &usize) -> bool {
        true
    }

    fn successors(&self, state: &usize) -> Vec<pathway_search::contract::Successor<usize, usize>> {
        self.0.successors(state)
    }
}

#[test]
fn start_goal_yields_empty_plan_for_every_strategy() {
    let problem = AlreadyThere(graph(1));
    for (name, result) in run_all(&problem) {
        assert_eq!(result.actions, Some(vec![]), "{name}");
        assert_eq!(result.cost, Some(0), "{name}");
        assert_eq!(result.graph.metadata.total_expansions, 0, "{name}");
        assert_eq!(
            result.termination_reason(),
            TerminationReasonV1::GoalReached { node_id: 0 },
            "{name}"
        );
    }
}

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn bfs_finds_fewest_actions() {
    let policy = SearchPolicyV1::default();
    for seed in SEEDS {
        let problem = graph(seed);
        let result = breadth_first_search(&problem, &policy).unwrap();
        let hops = result.actions.as_ref().map(|a| a.len() as u64);
        assert_eq!(hops, problem.reference_min_hops(), "seed {seed}");
    }
}

#[test]
fn ucs_finds_cheapest_cost() {
    let policy = SearchPolicyV1::default();
    for seed in SEEDS {
        let problem = graph(seed);
        let result = uniform_cost_search(&problem, &policy).unwrap();
        assert_eq!(result.cost, problem.reference_min_cost(), "seed {seed}");
        if let Some(actions) = &result.actions {
            assert_eq!(problem.cost_of_actions(actions), result.cost, "seed {seed}");
        }
    }
}

#[test]
fn astar_with_null_heuristic_matches_ucs() {
    let policy = SearchPolicyV1::default();
    for seed in SEEDS {
        let problem = graph(seed);
        let ucs = uniform_cost_search(&problem, &policy).unwrap();
        let astar = astar_search(&problem, null_heuristic, &policy).unwrap();
        assert_eq!(ucs.actions, astar.actions, "seed {seed}");
        assert_eq!(ucs.cost, astar.cost, "seed {seed}");
        assert_eq!(ucs.graph.expansions, astar.graph.expansions, "seed {seed}");
    }
}

#[test]
fn every_returned_plan_replays_to_a_goal() {
    for seed in SEEDS {
        let problem = graph(seed);
        let reachable = problem.reference_min_hops().is_some();
        for (name, result) in run_all(&problem) {
            assert_eq!(result.actions.is_some(), reachable, "{name} seed {seed}");
            let Some(actions) = result.actions else {
                continue;
            };
            let states = replay(&problem, &actions)
                .unwrap_or_else(|| panic!("{name} seed {seed}: plan does not replay"));
            assert!(problem.is_goal(states.last().unwrap()), "{name} seed {seed}");
            assert_eq!(
                problem.cost_of_actions(&actions),
                result.cost,
                "{name} seed {seed}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// No re-expansion
// ---------------------------------------------------------------------------

#[test]
fn no_state_expanded_twice() {
    let policy = SearchPolicyV1::default();
    for seed in SEEDS {
        let problem = Counting::new(graph(seed));
        for (name, run) in strategies::<Counting<RandomGraph>>() {
            problem.reset();
            let result = run(&problem, &policy).unwrap();
            assert!(
                problem.max_expansions_per_state() <= 1,
                "{name} seed {seed}: a state was expanded more than once"
            );
            assert_eq!(
                problem.total_expansions(),
                result.graph.metadata.total_expansions,
                "{name} seed {seed}"
            );
            assert!(problem.distinct_expanded() <= 40, "{name} seed {seed}");
        }
    }
}

// ---------------------------------------------------------------------------
// Failure
// ---------------------------------------------------------------------------

#[test]
fn isolated_start_exhausts_frontier() {
    for (name, result) in run_all(&Isolated) {
        assert_eq!(result.actions, None, "{name}");
        assert_eq!(result.cost, None, "{name}");
        assert_eq!(
            result.termination_reason(),
            TerminationReasonV1::FrontierExhausted,
            "{name}"
        );
        assert_eq!(result.graph.metadata.total_expansions, 1, "{name}");
        assert_eq!(result.graph.metadata.solution_length, None, "{name}");
    }
}

#[test]
fn unreachable_goal_is_reported_as_failure() {
    // Out-degree zero: only the start is ever reachable.
    let problem = RandomGraph::generate(7, 10, 0, 1);
    assert_eq!(problem.reference_min_hops(), None);
    for (name, result) in run_all(&problem) {
        assert_eq!(result.actions, None, "{name}");
        assert!(!result.is_goal_reached(), "{name}");
    }
}
