//! Version information baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `trivia <version> (<date>, <commit>)`
pub fn version_line() -> String {
    format!(
        "trivia {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
