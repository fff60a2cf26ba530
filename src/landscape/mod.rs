// landscape/mod.rs

// Declares and exposes the landscape evaluation submodules: the discretized
// rate grid and the engine that evaluates the imbalance surfaces over it.

pub mod engine;
pub mod grid;

// Re-export key types for a unified API
pub use engine::{Landscape, LandscapeEngine};
pub use grid::rate_axis;
