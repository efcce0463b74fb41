//! Toolchain/build metadata baked in by the build script.

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// Version of the rustc that compiled this binary.
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Host triple of the build toolchain.
pub const RUSTC_HOST_TRIPLE: &str = env!("VERGEN_RUSTC_HOST_TRIPLE");

/// The runtime version line of the diagnostic report.
///
/// Example: `rustc 1.84.0 (stable, 2025-01-07) [x86_64-unknown-linux-gnu]`
pub const RUNTIME_VERSION: &str = concat!(
    "rustc ",
    env!("VERGEN_RUSTC_SEMVER"),
    " (",
    env!("VERGEN_RUSTC_CHANNEL"),
    ", ",
    env!("VERGEN_RUSTC_COMMIT_DATE"),
    ") [",
    env!("VERGEN_RUSTC_HOST_TRIPLE"),
    "]"
);
