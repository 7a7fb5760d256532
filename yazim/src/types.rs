//! Numeric aliases shared across the crate.

/// A language-model probability. Never negative by collaborator contract.
pub type Probability = f64;

/// Accumulated edit cost of a trie frontier branch.
pub type Penalty = f64;
