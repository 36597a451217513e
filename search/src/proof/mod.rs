//! Canonical serialization and content hashing for search artifacts.

pub mod canon;
pub mod hash;
