mod cosmic;
mod mission_design;
mod orbit_determination;
mod propagation;

use std::path::PathBuf;

/// Path to a YAML configuration of the test data
pub fn test_config(name: &str) -> PathBuf {
    let manifest_dir =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or(".".to_string()));

    manifest_dir.join("data").join("tests").join("config").join(name)
}
