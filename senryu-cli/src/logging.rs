//! Logger setup

/// Initialize `env_logger` from the verbosity count.
///
/// `RUST_LOG` still takes precedence. Library crates log through
/// `tracing`, whose `log` feature forwards their events here.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when running under tests
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
