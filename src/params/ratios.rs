// params/ratios.rs

// Dimensionless diagnostic ratios of the parameter set. Balanced-network
// theory classifies the stability regime of the E/I network from these
// weight ratios and the in-degree ratio, so the driver displays them next to
// the landscape.

use super::parameters::Parameters;

/// The five diagnostic ratios, in the conventional order.
///
/// A zero denominator yields NaN or infinity in the corresponding field;
/// callers that allow zero weights must guard before dividing further.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceRatios {
    /// JEE / JIE
    pub jee_jie: f64,
    /// JEI / JII
    pub jei_jii: f64,
    /// JEX / JIX
    pub jex_jix: f64,
    /// JIE / JII
    pub jie_jii: f64,
    /// sqrt(KI / KE), the inhibitory-to-excitatory in-degree ratio
    pub gamma_i: f64,
}

impl Parameters {
    /// Computes the diagnostic ratios for the current parameter values.
    /// Pure query, no side effects.
    pub fn ratios(&self) -> BalanceRatios {
        BalanceRatios {
            jee_jie: self.j_ee / self.j_ie,
            jei_jii: self.j_ei / self.j_ii,
            jex_jix: self.j_ex / self.j_ix,
            jie_jii: self.j_ie / self.j_ii,
            gamma_i: (self.k_i() / self.k_e()).sqrt(),
        }
    }
}
