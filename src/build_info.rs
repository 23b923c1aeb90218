//! Build-time metadata emitted by `build.rs`.

const fn or_unknown(value: Option<&'static str>) -> &'static str {
    match value {
        Some(v) => v,
        None => "unknown",
    }
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_SHA: &str = or_unknown(option_env!("VERGEN_GIT_SHA"));
pub const BUILD_DATE: &str = or_unknown(option_env!("VERGEN_BUILD_TIMESTAMP"));
pub const RUSTC_SEMVER: &str = or_unknown(option_env!("VERGEN_RUSTC_SEMVER"));
pub const RUSTC_CHANNEL: &str = or_unknown(option_env!("VERGEN_RUSTC_CHANNEL"));
pub const TARGET_TRIPLE: &str = or_unknown(option_env!("VERGEN_CARGO_TARGET_TRIPLE"));
