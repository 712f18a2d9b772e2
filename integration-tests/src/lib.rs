//! Shared fixtures for the cross-crate tests.

use std::path::{Path, PathBuf};

use carnot_cycle::CycleInputs;

/// Returns the path of a file in the `data` directory.
#[must_use]
pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// Reads a config file from the `data` directory, choosing the format by extension.
///
/// # Panics
///
/// Panics if the file is missing, has an unknown extension, or does not parse.
#[must_use]
pub fn load_data(name: &str) -> CycleInputs {
    let path = data_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&content).unwrap(),
        Some("toml") => toml::from_str(&content).unwrap(),
        Some("yaml" | "yml") => serde_yaml::from_str(&content).unwrap(),
        _ => panic!("unsupported extension: {}", path.display()),
    }
}

/// A grid of valid inputs spanning several gases, reservoir pairs, and sizes.
///
/// Heat is chosen relative to `m·R·T_H` so every case expands by a moderate
/// ratio and none overflow.
#[must_use]
pub fn sweep() -> Vec<CycleInputs> {
    const TEMPERATURES: [(f64, f64); 6] = [
        (600.0, 300.0),
        (1000.0, 290.0),
        (373.15, 273.15),
        (2000.0, 1999.0),
        (301.0, 300.0),
        (5000.0, 50.0),
    ];
    const MASSES: [f64; 3] = [0.001, 1.0, 50.0];
    const GAS_CONSTANTS: [f64; 3] = [287.0, 2077.0, 188.9];
    const VOLUMES: [f64; 2] = [0.001, 1.0];
    const EXPANSIONS: [f64; 3] = [0.01, 0.5, 3.0];
    const GAMMAS: [f64; 3] = [1.1, 1.4, 1.667];

    let mut cases = Vec::new();
    for (t_h, t_l) in TEMPERATURES {
        for m in MASSES {
            for r in GAS_CONSTANTS {
                for v in VOLUMES {
                    for expansion in EXPANSIONS {
                        for gamma in GAMMAS {
                            let q_h = expansion * m * r * t_h;
                            cases.push(CycleInputs::from_si(t_h, t_l, m, r, v, q_h, gamma));
                        }
                    }
                }
            }
        }
    }
    cases
}
