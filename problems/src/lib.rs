//! Pathway Problems: concrete search problems for the search engine.
//!
//! Each problem owns its state representation and move rules and is
//! consumed by `pathway_search` only through `SearchProblemV1`.
//! Nothing here renders or prompts; `Display` impls exist for callers
//! that want to show a state.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eight_puzzle;
pub mod error;
pub mod grid;
pub mod layout;
pub mod maze;
