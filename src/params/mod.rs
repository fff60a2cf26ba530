// params/mod.rs

// Declares and exposes the model configuration submodules: the mutable
// parameter set with its immutable defaults record, and the derived
// diagnostic ratios used to classify the balance regime.

pub mod parameters;
pub mod ratios;

// Re-export key types for a unified API
pub use parameters::{Parameters, CONNECTION_PROB, DEFAULTS};
pub use ratios::BalanceRatios;
