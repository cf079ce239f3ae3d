//! Command-line options for the `gem-duel` binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Two players race to collect gems on a 6x6 board.
#[derive(Parser, Debug)]
#[command(name = "gem-duel")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Seed for the board layout. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Install the global tracing subscriber, logging to stderr.
    ///
    /// `RUST_LOG` takes precedence over `--log-level`.
    pub fn init_tracing(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gem-duel"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_seed_and_level() {
        let cli = Cli::try_parse_from(["gem-duel", "--seed", "42", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["gem-duel", "--seed", "abc"]).is_err());
    }
}
