//! Dots interpreter front end.
//!
//! Ties the crates together: [`check_program`] loads a program, links its
//! warps and sweeps its operators, returning everything a scheduler needs
//! or every diagnostic found on the way.

pub mod commands;
mod pipeline;

pub use pipeline::{check_program, localize, Checked};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=dots_eval=debug` or
/// `RUST_LOG=dots_load=trace`; nothing is installed when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
