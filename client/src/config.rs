//! Backend address baked into the bundle.
//!
//! The WASM bundle has no process environment at run time, so the override is
//! captured from `BACKEND_URL` when the crate is compiled, one value per
//! deployment build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wire::BackendConfig;

/// Compile-time `BACKEND_URL`, if the build set one.
const BUILD_BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Backend configuration for this build.
#[must_use]
pub fn backend_config() -> BackendConfig {
    BackendConfig::resolve(BUILD_BACKEND_URL)
}
