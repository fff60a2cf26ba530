// landscape/engine.rs

// Evaluates the mean-field input imbalance of both populations over the rate
// grid and locates the grid point closest to the self-consistent fixed point.
// The engine is a pure function of the parameter snapshot passed into each
// call; the only thing it keeps between calls is the cached rate axis, which
// is rebuilt whenever the snapshot's search domain changes.

use log::debug;
use ndarray::{Array1, Array2, Zip};

use super::grid::rate_axis;
use crate::params::Parameters;

/// Result bundle of one landscape evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Landscape {
    /// Combined imbalance surface, `|eq_e| + |eq_i|`
    pub eq: Array2<f64>,
    /// Net input imbalance to the excitatory population
    pub eq_e: Array2<f64>,
    /// Net input imbalance to the inhibitory population
    pub eq_i: Array2<f64>,
    /// Excitatory imbalance at the minimizing grid point
    pub eq_e_min: f64,
    /// Inhibitory imbalance at the minimizing grid point
    pub eq_i_min: f64,
    /// Excitatory rate at the minimizing grid point
    pub r_e_min: f64,
    /// Inhibitory rate at the minimizing grid point
    pub r_i_min: f64,
    /// Minimizing (row, column) grid index, for marker placement
    pub min_idx: (usize, usize),
}

/// Landscape evaluator. Stateless across calls apart from the rate-axis
/// cache keyed by the resolution and range it was built for.
pub struct LandscapeEngine {
    axis: Array1<f64>,
    resolution: usize,
    r_range: (f64, f64),
}

impl LandscapeEngine {
    /// Creates an engine with an empty axis cache; the axis is built on the
    /// first evaluation.
    pub fn new() -> Self {
        LandscapeEngine {
            axis: Array1::zeros(0),
            resolution: 0,
            r_range: (0.0, 0.0),
        }
    }

    /// Evaluates the imbalance landscape for the given parameter snapshot.
    ///
    /// Both surfaces are the linear mean-field input to one population at
    /// every candidate rate pair `(rE, rI)`:
    ///
    /// ```text
    /// eq_e = JEE*rE - gamma_i*|JEI|*rI + gamma_x*JEX*rX
    /// eq_i = JIE*rE - gamma_i*|JII|*rI + gamma_x*JIX*rX
    /// ```
    ///
    /// where `gamma_i = sqrt(KI)/sqrt(KE)` and `gamma_x = sqrt(KX)/sqrt(KE)`.
    /// Self-consistency requires both to vanish simultaneously, so the
    /// reported minimum of `|eq_e| + |eq_i|` approximates the fixed point.
    ///
    /// Non-finite parameter combinations (zero or negative connection
    /// counts, for instance) propagate NaN/infinity through the surfaces
    /// rather than failing. `resolution` must be at least 1; a zero
    /// resolution is a caller bug, not a recoverable condition.
    pub fn landscapes(&mut self, p: &Parameters) -> Landscape {
        if p.resolution != self.resolution || p.r_range != self.r_range {
            debug!(
                "rebuilding rate axis: {} points over [{}, {}]",
                p.resolution, p.r_range.0, p.r_range.1
            );
            self.axis = rate_axis(p.resolution, p.r_range);
            self.resolution = p.resolution;
            self.r_range = p.r_range;
        }

        let gamma_i = p.k_i().sqrt() / p.k_e().sqrt();
        let gamma_x = p.k_x().sqrt() / p.k_e().sqrt();
        let drive_e = gamma_x * p.j_ex * p.r_x;
        let drive_i = gamma_x * p.j_ix * p.r_x;
        let inhib_e = gamma_i * p.j_ei.abs();
        let inhib_i = gamma_i * p.j_ii.abs();

        // Meshgrid convention: row index i selects rI, column index j
        // selects rE.
        let axis = &self.axis;
        let n = p.resolution;
        let eq_e =
            Array2::from_shape_fn((n, n), |(i, j)| p.j_ee * axis[j] - inhib_e * axis[i] + drive_e);
        let eq_i =
            Array2::from_shape_fn((n, n), |(i, j)| p.j_ie * axis[j] - inhib_i * axis[i] + drive_i);

        let mut eq = Array2::<f64>::zeros((n, n));
        Zip::from(&mut eq)
            .and(&eq_e)
            .and(&eq_i)
            .for_each(|total, &e, &i| *total = e.abs() + i.abs());

        let min_idx = argmin(&eq);
        let (i, j) = min_idx;

        Landscape {
            eq_e_min: eq_e[[i, j]],
            eq_i_min: eq_i[[i, j]],
            r_e_min: axis[j],
            r_i_min: axis[i],
            min_idx,
            eq,
            eq_e,
            eq_i,
        }
    }
}

impl Default for LandscapeEngine {
    fn default() -> Self {
        LandscapeEngine::new()
    }
}

/// Index of the smallest element, scanning in row-major order and keeping
/// the FIRST occurrence on ties. The tie-break is part of the contract: a
/// constant surface resolves to `(0, 0)`.
///
/// Known limitation: the strict `<` comparison never accepts NaN, so a
/// surface containing NaN resolves to the first finite strict improvement,
/// or `(0, 0)` when no element compares below infinity.
fn argmin(surface: &Array2<f64>) -> (usize, usize) {
    let mut best = f64::INFINITY;
    let mut best_idx = (0, 0);
    for ((i, j), &value) in surface.indexed_iter() {
        if value < best {
            best = value;
            best_idx = (i, j);
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn argmin_scans_row_major() {
        let surface = array![[3.0, 1.0], [1.0, 0.5]];
        assert_eq!(argmin(&surface), (1, 1));
    }

    #[test]
    fn argmin_keeps_first_occurrence_on_ties() {
        let surface = array![[2.0, 1.0], [1.0, 2.0]];
        assert_eq!(argmin(&surface), (0, 1));
    }

    #[test]
    fn argmin_of_constant_surface_is_origin() {
        let surface = Array2::from_elem((4, 4), 7.5);
        assert_eq!(argmin(&surface), (0, 0));
    }

    #[test]
    fn argmin_skips_nan_entries() {
        let surface = array![[f64::NAN, 2.0], [1.0, f64::NAN]];
        assert_eq!(argmin(&surface), (1, 0));
    }
}
