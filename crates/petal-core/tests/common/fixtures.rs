//! Test fixture loading utilities

use std::path::PathBuf;

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Path to the iris fixture as a string, the form the loader takes
pub fn iris_path() -> String {
    fixture_path("iris.csv").to_string_lossy().into_owned()
}
