// src/main.rs
// Driver for the balance-landscape explorer: loads a parameter set, runs one
// landscape evaluation, and logs the fixed-point estimate and diagnostic
// ratios. An interactive front end plays the same role - edit one parameter,
// re-evaluate, render - but rendering stays outside this crate.

use std::error::Error;

use ei_balance::{config, LandscapeEngine, Parameters};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Optional YAML parameter file as the first argument; partial files
    // fall back to the defaults field by field.
    let params = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading parameters from {}", path);
            config::load_parameters(&path)?
        }
        None => Parameters::new(),
    };

    let mut engine = LandscapeEngine::new();
    let landscape = engine.landscapes(&params);

    info!(
        "Fixed-point estimate: rE = {:.4}, rI = {:.4} (grid index {:?})",
        landscape.r_e_min, landscape.r_i_min, landscape.min_idx
    );
    info!(
        "Imbalance at minimum: eqE = {:+.6}, eqI = {:+.6}",
        landscape.eq_e_min, landscape.eq_i_min
    );

    let ratios = params.ratios();
    info!(
        "Balance ratios: JEE/JIE = {:.3}, JEI/JII = {:.3}, JEX/JIX = {:.3}, \
         JIE/JII = {:.3}, sqrt(KI/KE) = {:.3}",
        ratios.jee_jie, ratios.jei_jii, ratios.jex_jix, ratios.jie_jii, ratios.gamma_i
    );

    Ok(())
}
