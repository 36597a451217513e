//! Search problem contract trait.

use std::fmt::Debug;
use std::hash::Hash;

/// Non-negative step or path cost.
///
/// Costs are integers so that frontier ordering is total and
/// bit-reproducible across platforms.
pub type Cost = u64;

/// One legal transition out of a state, as enumerated by a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    /// The state reached by taking `action`.
    pub state: S,
    /// Problem-defined label for the transition. The engine never inspects it.
    pub action: A,
    /// Cost of this single transition.
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    #[must_use]
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

/// Trait for problems that support search.
///
/// # Contract
///
/// - Two states that denote the same point in the search space must compare
///   equal and hash identically, however they were reached.
/// - `successors` must be deterministic: same state → same successors in the
///   same order. Every returned state is a fresh value; the engine never
///   mutates a state in place.
/// - The problem is only queried through `&self`. Implementations must not
///   rely on interior mutability shared between independent search calls.
pub trait SearchProblemV1 {
    /// A point in the search space.
    type State: Clone + Eq + Hash + Debug;
    /// A label describing a transition between two states.
    type Action: Clone + PartialEq + Debug;

    /// The state the search begins from.
    fn start_state(&self) -> Self::State;

    /// Test whether the given state satisfies the problem's goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate all legal transitions from the given state.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` from the start state.
    ///
    /// Returns `None` if some action is not legal where it is applied.
    /// The default implementation replays the sequence through
    /// [`SearchProblemV1::successors`] and sums the step costs.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Cost> {
        let mut state = self.start_state();
        let mut total: Cost = 0;
        for action in actions {
            let step = self
                .successors(&state)
                .into_iter()
                .find(|s| &s.action == action)?;
            total = total.saturating_add(step.cost);
            state = step.state;
        }
        Some(total)
    }
}

/// The zero heuristic. Best-first search with it is exactly uniform-cost search.
#[must_use]
pub fn null_heuristic<P: SearchProblemV1>(_state: &P::State, _problem: &P) -> Cost {
    0
}

/// Replay `actions` from the start state, returning every visited state.
///
/// The first element is the start state; the result has `actions.len() + 1`
/// entries. Returns `None` if an action is not among the successors of the
/// state it is applied to.
#[must_use]
pub fn replay<P: SearchProblemV1>(problem: &P, actions: &[P::Action]) -> Option<Vec<P::State>> {
    let mut states = Vec::with_capacity(actions.len() + 1);
    states.push(problem.start_state());
    for action in actions {
        let current = states.last()?;
        let next = problem
            .successors(current)
            .into_iter()
            .find(|s| &s.action == action)?;
        states.push(next.state);
    }
    Some(states)
}
