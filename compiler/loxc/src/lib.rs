//! Lox command-line driver.
//!
//! Reads a script or an interactive line, scans it once, prints the tokens,
//! and renders lexical errors. All lexical logic lives in `lox_lexer`; this
//! crate only wires input, output and exit codes.

pub mod commands;
pub mod config;

pub use config::{CliConfig, Command, UsageError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber once per process.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging cost.
/// Output is a hierarchical span tree on stderr, e.g.
/// `RUST_LOG=lox_lexer=debug lox script.lox`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        }
    });
}
