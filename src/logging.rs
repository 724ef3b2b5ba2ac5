//! Logging setup. Logs go to stderr so stdout stays machine-readable.

use crate::cli::LogArgs;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Builds the log filter from command line arguments.
///
/// Precedence:
/// 1. If `--quiet` is set, only errors are shown
/// 2. Otherwise `RUST_LOG` if set, else a level from the `-v` count
/// 3. Directives from `--log.filter` are added last
pub fn build_filter(args: &LogArgs) -> EnvFilter {
    if args.quiet {
        return EnvFilter::new("error");
    }

    let base_level = match args.verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(base_level));

    if let Some(custom_filter) = &args.filter {
        for directive in custom_filter.split(',') {
            if let Ok(d) = directive.parse() {
                filter = filter.add_directive(d);
            }
        }
    }

    filter
}

/// Installs the global subscriber
pub fn init_logging(args: &LogArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(args))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_quiet_filter() {
        let args = LogArgs {
            quiet: true,
            verbosity: 3,
            filter: Some("addr_guard=trace".to_string()),
        };
        assert_eq!(build_filter(&args).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_custom_directives_added() {
        let args = LogArgs {
            quiet: false,
            verbosity: 0,
            filter: Some("addr_guard=trace,".to_string()),
        };
        assert!(build_filter(&args).to_string().contains("addr_guard=trace"));
    }
}
