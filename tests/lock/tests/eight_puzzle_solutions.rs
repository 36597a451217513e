//! Eight-puzzle solutions: the stock puzzles solved by every strategy.
//!
//! Optimal move counts for `EIGHT_PUZZLE_DATA` were established by
//! exhaustive breadth-first search and are locked here.

use pathway_problems::eight_puzzle::{
    load_eight_puzzle, manhattan_distance, misplaced_tiles, scramble, EightPuzzleSearchProblem,
    EightPuzzleState, Move, EIGHT_PUZZLE_DATA,
};
use pathway_search::contract::{null_heuristic, replay, SearchProblemV1};
use pathway_search::graph::TerminationReasonV1;
use pathway_search::policy::{GoalTestV1, SearchPolicyV1};
use pathway_search::search::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const OPTIMAL_LENGTHS: [usize; 6] = [1, 24, 10, 14, 14, 12];

/// Reachable configurations from any solvable eight-puzzle (9! / 2).
const REACHABLE_STATES: u64 = 181_440;

fn stock(index: usize) -> EightPuzzleSearchProblem {
    EightPuzzleSearchProblem::new(load_eight_puzzle(index).unwrap())
}

fn assert_solves(problem: &EightPuzzleSearchProblem, actions: &[Move]) {
    let states = replay(problem, actions).expect("plan replays");
    assert!(states.last().unwrap().is_goal());
}

// ---------------------------------------------------------------------------
// One move from the goal
// ---------------------------------------------------------------------------

#[test]
fn bfs_slides_blank_left_once() {
    let puzzle = EightPuzzleState::new(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let problem = EightPuzzleSearchProblem::new(puzzle);
    let result = breadth_first_search(&problem, &SearchPolicyV1::default()).unwrap();

    assert_eq!(result.actions, Some(vec![Move::Left]));
    assert_eq!(result.cost, Some(1));
    let names: Vec<&str> = result.actions.unwrap().iter().map(|m| m.as_str()).collect();
    assert_eq!(names, ["left"]);
}

#[test]
fn solved_puzzle_needs_no_moves() {
    let problem = EightPuzzleSearchProblem::new(EightPuzzleState::goal());
    let result = astar_search(&problem, manhattan_distance, &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.actions, Some(vec![]));
    assert_eq!(result.cost, Some(0));
}

// ---------------------------------------------------------------------------
// Stock puzzles
// ---------------------------------------------------------------------------

#[test]
fn astar_manhattan_is_optimal_on_stock_puzzles() {
    let policy = SearchPolicyV1::default();
    for (index, &expected) in OPTIMAL_LENGTHS.iter().enumerate() {
        let problem = stock(index);
        let result = astar_search(&problem, manhattan_distance, &policy).unwrap();
        let actions = result.actions.as_ref().unwrap();
        assert_eq!(actions.len(), expected, "puzzle {index}");
        assert_eq!(result.cost, Some(expected as u64), "puzzle {index}");
        assert_eq!(problem.cost_of_actions(actions), result.cost, "puzzle {index}");
        assert_solves(&problem, actions);
    }
}

#[test]
fn astar_misplaced_is_optimal_on_stock_puzzles() {
    let policy = SearchPolicyV1::default();
    for (index, &expected) in OPTIMAL_LENGTHS.iter().enumerate() {
        let problem = stock(index);
        let result = astar_search(&problem, misplaced_tiles, &policy).unwrap();
        assert_eq!(result.cost, Some(expected as u64), "puzzle {index}");
        assert_solves(&problem, result.actions.as_ref().unwrap());
    }
}

#[test]
fn bfs_and_ucs_agree_with_astar_on_shorter_puzzles() {
    let policy = SearchPolicyV1::default();
    for index in [0, 2, 5] {
        let problem = stock(index);
        let bfs = breadth_first_search(&problem, &policy).unwrap();
        let ucs = uniform_cost_search(&problem, &policy).unwrap();
        let expected = OPTIMAL_LENGTHS[index];
        assert_eq!(bfs.actions.as_ref().unwrap().len(), expected, "bfs {index}");
        assert_eq!(ucs.cost, Some(expected as u64), "ucs {index}");
        assert_solves(&problem, bfs.actions.as_ref().unwrap());
        assert_solves(&problem, ucs.actions.as_ref().unwrap());
    }
}

#[test]
fn bfs_goal_test_on_generation_stays_optimal() {
    let policy = SearchPolicyV1 {
        goal_test: GoalTestV1::OnGeneration,
        ..SearchPolicyV1::default()
    };
    let problem = stock(2);
    let on_generation = breadth_first_search(&problem, &policy).unwrap();
    let on_expansion = breadth_first_search(&problem, &SearchPolicyV1::default()).unwrap();

    assert_eq!(on_generation.actions.as_ref().unwrap().len(), OPTIMAL_LENGTHS[2]);
    assert!(
        on_generation.graph.metadata.total_expansions
            <= on_expansion.graph.metadata.total_expansions
    );
}

#[test]
fn dfs_finds_a_valid_plan() {
    let policy = SearchPolicyV1::default();
    for index in [0, 2] {
        let problem = stock(index);
        let result = depth_first_search(&problem, &policy).unwrap();
        let actions = result.actions.as_ref().expect("dfs finds a plan");
        assert!(actions.len() >= OPTIMAL_LENGTHS[index], "puzzle {index}");
        assert_eq!(problem.cost_of_actions(actions), result.cost);
        assert_solves(&problem, actions);
    }
}

#[test]
fn manhattan_expands_fewer_nodes_than_ucs() {
    let policy = SearchPolicyV1::default();
    let problem = stock(3);
    let ucs = astar_search(&problem, null_heuristic, &policy).unwrap();
    let informed = astar_search(&problem, manhattan_distance, &policy).unwrap();
    assert_eq!(ucs.cost, informed.cost);
    assert!(
        informed.graph.metadata.total_expansions < ucs.graph.metadata.total_expansions,
        "manhattan {} vs null {}",
        informed.graph.metadata.total_expansions,
        ucs.graph.metadata.total_expansions
    );
}

#[test]
fn stock_puzzles_are_all_solvable() {
    for index in 0..EIGHT_PUZZLE_DATA.len() {
        assert!(load_eight_puzzle(index).unwrap().is_solvable(), "{index}");
    }
}

// ---------------------------------------------------------------------------
// Scrambles
// ---------------------------------------------------------------------------

#[test]
fn scrambled_puzzles_solve_within_scramble_length() {
    let policy = SearchPolicyV1::default();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        let puzzle = scramble(18, &mut rng);
        assert!(puzzle.is_solvable());
        let problem = EightPuzzleSearchProblem::new(puzzle);
        let bfs = breadth_first_search(&problem, &policy).unwrap();
        let astar = astar_search(&problem, manhattan_distance, &policy).unwrap();
        let shortest = bfs.actions.as_ref().unwrap().len();
        assert!(shortest <= 18);
        assert_eq!(astar.cost, Some(shortest as u64));
    }
}

// ---------------------------------------------------------------------------
// Unsolvable
// ---------------------------------------------------------------------------

#[test]
fn unsolvable_puzzle_exhausts_reachable_half() {
    // Swapping two tiles flips inversion parity.
    let puzzle = EightPuzzleState::new(&[0, 2, 1, 3, 4, 5, 6, 7, 8]).unwrap();
    assert!(!puzzle.is_solvable());

    let policy = SearchPolicyV1 {
        record_graph: false,
        ..SearchPolicyV1::default()
    };
    let problem = EightPuzzleSearchProblem::new(puzzle);
    let result = breadth_first_search(&problem, &policy).unwrap();

    assert_eq!(result.actions, None);
    assert_eq!(
        result.termination_reason(),
        TerminationReasonV1::FrontierExhausted
    );
    assert_eq!(result.graph.metadata.total_expansions, REACHABLE_STATES);
    assert!(result.graph.expansions.is_empty());
}

#[test]
fn expansion_budget_stops_a_long_search() {
    let policy = SearchPolicyV1 {
        max_expansions: Some(50),
        ..SearchPolicyV1::default()
    };
    let problem = stock(1);
    let result = breadth_first_search(&problem, &policy).unwrap();
    assert_eq!(result.actions, None);
    assert_eq!(
        result.termination_reason(),
        TerminationReasonV1::ExpansionBudgetExceeded
    );
    assert_eq!(result.graph.metadata.total_expansions, 50);
}

#[test]
fn depth_budget_below_optimum_fails() {
    let policy = SearchPolicyV1 {
        max_depth: Some(9),
        ..SearchPolicyV1::default()
    };
    let problem = stock(2);
    let result = breadth_first_search(&problem, &policy).unwrap();
    assert_eq!(result.actions, None);
    assert_eq!(
        result.termination_reason(),
        TerminationReasonV1::DepthBudgetExceeded
    );

    let policy = SearchPolicyV1 {
        max_depth: Some(10),
        ..SearchPolicyV1::default()
    };
    let result = breadth_first_search(&problem, &policy).unwrap();
    assert_eq!(result.actions.unwrap().len(), 10);
}

#[test]
fn dfs_within_depth_limit_finds_optimal_plan() {
    let policy = SearchPolicyV1 {
        max_depth: Some(10),
        ..SearchPolicyV1::default()
    };
    let problem = stock(2);
    let result = depth_first_search(&problem, &policy).unwrap();
    let actions = result.actions.as_ref().expect("plan within the cutoff");
    assert_eq!(actions.len(), OPTIMAL_LENGTHS[2]);
    assert_solves(&problem, actions);
}
