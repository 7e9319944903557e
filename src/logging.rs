use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize tracing output on stderr.
///
/// Default level is WARN; `-v` raises it to INFO, `-vv` to DEBUG and
/// `-vvv` to TRACE. `RUST_LOG` directives are honored on top.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}
