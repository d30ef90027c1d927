//! Tracing initialization for binaries and test harnesses.

use tracing_subscriber::EnvFilter;

/// Initialize a compact console subscriber with `RUST_LOG` filtering.
///
/// Defaults to `info` for this crate's modules when `RUST_LOG` is unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,opshub_core=info,opshub_models=info",
            env!("CARGO_CRATE_NAME")
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();
}
