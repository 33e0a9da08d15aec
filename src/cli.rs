//! Command-line interface for lockpick.

use crate::constants::DEFAULT_LOG_FILTER;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Lockpick - crack the 5-digit code in 6 attempts
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "lockpick")]
#[command(about = "Crack a 5-digit code of distinct digits in 6 attempts", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Seed for code generation (same seed, same sequence of codes)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the secret code in a debug panel
    #[arg(long)]
    pub reveal: bool,

    /// Line-oriented mode: read one guess per line from stdin
    #[arg(long)]
    pub plain: bool,

    /// Emit attempts and the final snapshot as JSON lines (plain mode only)
    #[arg(long, requires = "plain")]
    pub json: bool,

    /// Log filter, e.g. "debug" or "lockpick=trace". RUST_LOG takes precedence.
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,

    /// Write logs to this file (TUI mode discards logs without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show version information
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    /// Randomness source for the session: seeded when asked, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::generate_code;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lockpick"]).unwrap();
        assert_eq!(cli.seed, None);
        assert!(!cli.reveal);
        assert!(!cli.plain);
        assert_eq!(cli.log_level, DEFAULT_LOG_FILTER);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "lockpick",
            "--seed",
            "9",
            "--reveal",
            "--plain",
            "--json",
            "--log-level",
            "debug",
            "--log-file",
            "lockpick.log",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        assert!(cli.reveal && cli.plain && cli.json);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.log_file, Some(PathBuf::from("lockpick.log")));
    }

    #[test]
    fn test_json_requires_plain() {
        assert!(Cli::try_parse_from(["lockpick", "--json"]).is_err());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let cli = Cli::try_parse_from(["lockpick", "--seed", "1234"]).unwrap();
        let a = generate_code(&mut cli.rng());
        let b = generate_code(&mut cli.rng());
        assert_eq!(a, b);
    }
}
