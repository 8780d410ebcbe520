//! Logger initialization

/// Map a `-v` count to a default log filter
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` still takes precedence over the verbosity default. Repeated
/// initialization (e.g. from tests) is ignored.
pub fn init(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level_for(verbose)),
    )
    .try_init();
}
