// tests/params_tests.rs
// Covers the parameter set: defaults, reset semantics, derived connection
// counts, and the diagnostic ratios.

use ei_balance::{Parameters, CONNECTION_PROB, DEFAULTS};
use rstest::rstest;

const TOL: f64 = 1e-12;

#[test]
fn new_matches_defaults_record() {
    let params = Parameters::new();
    assert_eq!(params, DEFAULTS);
    assert_eq!(params.ne, 20000);
    assert_eq!(params.ni, 5000);
    assert_eq!(params.nx, 5000);
    assert_eq!(params.j_ee, 0.04);
    assert_eq!(params.j_ei, 0.11);
    assert_eq!(params.j_ie, 0.02);
    assert_eq!(params.j_ii, 0.05);
    assert_eq!(params.j_ex, 0.06);
    assert_eq!(params.j_ix, 0.02);
    assert_eq!(params.r_x, 0.1);
    assert_eq!(params.r_range, (0.0, 1.0));
    assert_eq!(params.resolution, 500);
}

#[test]
fn reset_restores_every_field() {
    let mut params = Parameters::new();
    params.ne = 1;
    params.j_ei = -3.0;
    params.r_x = 42.0;
    params.r_range = (-1.0, 1.0);
    params.resolution = 7;

    params.reset();
    assert_eq!(params, DEFAULTS);
}

#[test]
fn reset_is_idempotent() {
    let mut params = Parameters::new();
    params.j_ee = 9.0;
    params.reset();
    let after_one = params;
    params.reset();
    assert_eq!(params, after_one);
}

#[rstest]
#[case(20000, 800.0)]
#[case(5000, 200.0)]
#[case(0, 0.0)]
fn connection_counts_track_population_size(#[case] ne: u32, #[case] expected: f64) {
    let mut params = Parameters::new();
    params.ne = ne;
    assert_eq!(params.k_e(), expected);
    assert_eq!(params.k_e(), f64::from(ne) * CONNECTION_PROB);
}

#[test]
fn default_ratios_match_literal_values() {
    let ratios = Parameters::new().ratios();
    // 0.04/0.02, 0.06/0.02 and sqrt(200/800) are exact in f64; the other
    // two carry one ulp of rounding.
    assert_eq!(ratios.jee_jie, 2.0);
    assert!((ratios.jei_jii - 2.2).abs() < TOL);
    assert_eq!(ratios.jex_jix, 3.0);
    assert!((ratios.jie_jii - 0.4).abs() < TOL);
    assert_eq!(ratios.gamma_i, 0.5);
}

#[test]
fn ratios_are_a_pure_query() {
    let params = Parameters::new();
    let first = params.ratios();
    let second = params.ratios();
    assert_eq!(first, second);
    assert_eq!(params, DEFAULTS);
}

#[test]
fn zero_weight_denominator_propagates_non_finite() {
    let mut params = Parameters::new();
    params.j_ie = 0.0;
    let ratios = params.ratios();
    assert!(ratios.jee_jie.is_infinite());

    params.j_ee = 0.0;
    assert!(params.ratios().jee_jie.is_nan());
}

#[test]
fn zero_excitatory_population_makes_gamma_non_finite() {
    let mut params = Parameters::new();
    params.ne = 0;
    // KI/KE divides by zero; the sqrt of the resulting infinity stays
    // infinite rather than raising.
    assert!(params.ratios().gamma_i.is_infinite());
}
