// landscape/grid.rs

// Discretization of the candidate-rate search domain. The 2-D grid follows
// meshgrid convention: for axis index (i, j), the excitatory rate is
// `axis[j]` (column) and the inhibitory rate is `axis[i]` (row), so every
// (rE, rI) pair of the Cartesian product appears exactly once.

use ndarray::Array1;

/// Builds the 1-D candidate-rate axis: `resolution` evenly spaced points
/// spanning `r_range`, inclusive of both endpoints.
pub fn rate_axis(resolution: usize, r_range: (f64, f64)) -> Array1<f64> {
    Array1::linspace(r_range.0, r_range.1, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_includes_both_endpoints() {
        let axis = rate_axis(3, (0.0, 1.0));
        assert_eq!(axis.as_slice().unwrap(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn axis_spans_shifted_range() {
        let axis = rate_axis(5, (0.5, 2.5));
        assert_eq!(axis.len(), 5);
        assert_eq!(axis[0], 0.5);
        assert_eq!(axis[4], 2.5);
    }
}
