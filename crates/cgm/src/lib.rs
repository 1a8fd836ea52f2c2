//! Compile-time sized linear algebra for graphics code.
//!
//! This crate re-exports everything from [`cgm_linalg`] (vectors, matrices, layouts) and adds the
//! pieces that sit on top of it, like the [`projection`] matrix builder.
//!
//! # Conventions
//!
//! Matrices are stored row-major. Whether points are transformed as column vectors (`M * v`) or
//! as row vectors (`v * M`) is chosen per call site through the vector's orientation; helpers that
//! produce transforms take the [`Orientation`] they should be built for.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the log filter installed by [`init_logger!`] (see [`env_logger`]).

use log::LevelFilter;

pub use cgm_linalg::*;

pub mod projection;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and `cgm` will log at *trace* level.
/// Otherwise, they will log at *debug* level. `RUST_LOG` can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
