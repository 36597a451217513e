//! Shared test problems for the lock tests.

#![forbid(unsafe_code)]
