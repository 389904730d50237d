//! Compile-time build information, generated by build.rs.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string for `--version`.
pub fn version_line() -> String {
    format!("lane-runner {} ({})", BUILD_DATE, BUILD_COMMIT)
}
