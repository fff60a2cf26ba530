// params/parameters.rs

// Holds the scalar configuration of the mean-field E/I model: population
// sizes, synaptic weight scalars, external drive, and the search domain for
// the landscape evaluation. Connection counts are derived queries, never
// stored, so they can never drift out of sync with the population sizes.

use serde::{Deserialize, Serialize};

/// Connection probability shared by all projections; connection counts are
/// always this fixed multiple of the population sizes.
pub const CONNECTION_PROB: f64 = 0.04;

/// Scalar configuration of the mean-field model.
///
/// Every field is public: the driver edits one field at a time in response to
/// user input and passes a snapshot to the engine. No validation happens at
/// this layer - the landscape evaluation tolerates nonsensical values (e.g. a
/// zero population) by propagating NaN/infinity instead of panicking.
///
/// The inhibitory weights `j_ei` and `j_ii` are stored as magnitudes and
/// negated via `abs()` where they enter the input equations, so a sign edit
/// here has no effect on the landscape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Excitatory population size
    pub ne: u32,
    /// Inhibitory population size
    pub ni: u32,
    /// External population size
    pub nx: u32,
    /// E-to-E synaptic weight
    pub j_ee: f64,
    /// I-to-E synaptic weight (magnitude)
    pub j_ei: f64,
    /// E-to-I synaptic weight
    pub j_ie: f64,
    /// I-to-I synaptic weight (magnitude)
    pub j_ii: f64,
    /// X-to-E synaptic weight
    pub j_ex: f64,
    /// X-to-I synaptic weight
    pub j_ix: f64,
    /// External drive rate
    pub r_x: f64,
    /// Closed rate interval searched for the fixed point
    pub r_range: (f64, f64),
    /// Grid side length of the landscape evaluation
    pub resolution: usize,
}

/// Immutable defaults record. `reset` copies every field from here; it is
/// never mutated, so the defaults survive any amount of live editing.
pub const DEFAULTS: Parameters = Parameters {
    ne: 20000,
    ni: 5000,
    nx: 5000,
    j_ee: 0.04,
    j_ei: 0.11,
    j_ie: 0.02,
    j_ii: 0.05,
    j_ex: 0.06,
    j_ix: 0.02,
    r_x: 0.1,
    r_range: (0.0, 1.0),
    resolution: 500,
};

impl Default for Parameters {
    fn default() -> Self {
        DEFAULTS
    }
}

impl Parameters {
    /// Creates a parameter set with the default values.
    pub fn new() -> Self {
        DEFAULTS
    }

    /// Expected excitatory in-degree, `ne * CONNECTION_PROB`.
    pub fn k_e(&self) -> f64 {
        f64::from(self.ne) * CONNECTION_PROB
    }

    /// Expected inhibitory in-degree, `ni * CONNECTION_PROB`.
    pub fn k_i(&self) -> f64 {
        f64::from(self.ni) * CONNECTION_PROB
    }

    /// Expected external in-degree, `nx * CONNECTION_PROB`.
    pub fn k_x(&self) -> f64 {
        f64::from(self.nx) * CONNECTION_PROB
    }

    /// Restores every field to its [`DEFAULTS`] value. Idempotent.
    pub fn reset(&mut self) {
        *self = DEFAULTS;
    }
}
