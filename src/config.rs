// config.rs

// Loads a parameter set from a YAML file. Files may be partial: any field
// left out falls back to the corresponding default, so a config that only
// pins `r_x: 0.3` is valid.

use std::fs;
use std::path::Path;

use crate::params::Parameters;
use crate::BalanceError;

/// Reads and deserializes a parameter file.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Parameters, BalanceError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| BalanceError::Io(format!("{}: {}", path.display(), e)))?;
    serde_yaml::from_str(&raw)
        .map_err(|e| BalanceError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DEFAULTS;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let params: Parameters = serde_yaml::from_str("r_x: 0.3\nresolution: 100").unwrap();
        assert_eq!(params.r_x, 0.3);
        assert_eq!(params.resolution, 100);
        assert_eq!(params.j_ee, DEFAULTS.j_ee);
        assert_eq!(params.r_range, DEFAULTS.r_range);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = load_parameters("no/such/params.yaml").unwrap_err();
        assert!(matches!(err, BalanceError::Io(_)));
    }
}
