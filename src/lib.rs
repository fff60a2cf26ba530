//! ei-balance - Mean-field E/I balance landscape explorer
//!
//! This library computes the net synaptic input imbalance of a two-population
//! (excitatory/inhibitory) mean-field network over a grid of candidate firing
//! rates, and locates the rate pair that minimizes total imbalance - the
//! self-consistent fixed point of the balance condition.
//!
//! The crate has two components: [`Parameters`] holds the scalar model
//! configuration (population sizes, synaptic weights, external drive, search
//! domain), and [`LandscapeEngine`] evaluates the imbalance landscape for a
//! parameter snapshot. A driver (the `ei-balance` binary, or any UI layer)
//! mutates the parameters one field at a time and re-evaluates; rendering of
//! the returned surfaces is left entirely to the caller.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod config;
pub mod landscape;
pub mod params;

// Re-export the core types for easier access
pub use landscape::{Landscape, LandscapeEngine};
pub use params::{BalanceRatios, Parameters, CONNECTION_PROB, DEFAULTS};

/// Errors raised at the configuration/driver boundary.
///
/// Numeric trouble inside the landscape computation never surfaces here:
/// invalid domain inputs (zero denominators, negative connection counts)
/// propagate as NaN/infinity through the arrays by design.
#[derive(Debug)]
pub enum BalanceError {
    /// Parameter file could not be read
    Io(String),
    /// Parameter file could not be parsed
    Config(String),
}

impl std::fmt::Display for BalanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BalanceError::Io(msg) => write!(f, "I/O error: {}", msg),
            BalanceError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BalanceError {}
