//! Pathway Search: problem-agnostic state-space search with an auditable graph artifact.
//!
//! This crate is the search engine. It knows nothing about concrete puzzles;
//! adapters in `pathway_problems` implement [`SearchProblemV1`] and are
//! consumed through that contract alone.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathway_search  ←  pathway_problems  ←  lock-tests / benchmarks
//! (frontier, algos)   (eight-puzzle, maze)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblemV1`]: the capability contract every search problem satisfies
//! - [`Frontier`]: exploration order: [`Stack`], [`Queue`], [`PriorityQueue`]
//! - [`NodeArena`]: parent-pointer arena used for path reconstruction
//! - [`SearchPolicyV1`]: budgets and goal-test timing
//! - [`SearchGraphV1`]: expansion-event audit log with a canonical digest
//! - [`SearchResult`]: the action path, or an explicit "no solution"
//!
//! [`SearchProblemV1`]: contract::SearchProblemV1
//! [`Frontier`]: frontier::Frontier
//! [`Stack`]: frontier::Stack
//! [`Queue`]: frontier::Queue
//! [`PriorityQueue`]: frontier::PriorityQueue
//! [`NodeArena`]: node::NodeArena
//! [`SearchPolicyV1`]: policy::SearchPolicyV1
//! [`SearchGraphV1`]: graph::SearchGraphV1
//! [`SearchResult`]: search::SearchResult

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod proof;
pub mod search;
