//! Command-line configuration
//!
//! ```text
//! algostep [--algo NAME] [--seed N] [--len N] [--interval-ms MS]
//!          [--bst-op insert|search|delete] [--bst-value N]
//!          [--log FILE] [--list]
//! ```
//!
//! Parsing, range checks and usage output are handled by `clap`.

use crate::catalog::{AlgorithmKind, BuildParams};
use crate::model::array::{ArraySource, DEFAULT_LEN, DEFAULT_MAX, DEFAULT_MIN};
use crate::tree::BstOperation;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INTERVAL_MS: u64 = 300;
pub const MAX_ARRAY_LEN: u16 = 1000;

/// Step-by-step algorithm visualizer for the terminal
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "algostep", version, about)]
pub struct Config {
    /// Open NAME directly instead of the menu (see --list)
    #[arg(long = "algo", value_name = "NAME", value_enum, ignore_case = true)]
    pub algorithm: Option<AlgorithmKind>,

    /// Seed for random arrays; without one every reset draws new values
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Array length for the sorts
    #[arg(
        long = "len",
        value_name = "N",
        default_value_t = DEFAULT_LEN as u16,
        value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_ARRAY_LEN))
    )]
    pub array_len: u16,

    /// Delay between steps while running, in milliseconds
    #[arg(
        long = "interval-ms",
        value_name = "MS",
        default_value_t = DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Binary-search-tree operation
    #[arg(
        long = "bst-op",
        value_name = "OP",
        value_enum,
        ignore_case = true,
        default_value_t = BstOperation::Search
    )]
    pub bst_operation: BstOperation,

    /// Value for the BST operation; skips the input screen
    #[arg(long = "bst-value", value_name = "N", allow_negative_numbers = true)]
    pub bst_value: Option<i64>,

    /// Write logs to FILE (filter with ALGOSTEP_LOG)
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Print algorithm names and exit
    #[arg(long)]
    pub list: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: None,
            seed: None,
            array_len: DEFAULT_LEN as u16,
            interval_ms: DEFAULT_INTERVAL_MS,
            bst_operation: BstOperation::Search,
            bst_value: None,
            log_file: None,
            list: false,
        }
    }
}

impl Config {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn array_source(&self) -> ArraySource {
        ArraySource::Random {
            len: usize::from(self.array_len),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: self.seed,
        }
    }

    /// Inputs for building an automaton; `bst_value` overrides the configured one
    pub fn build_params(&self, bst_value: Option<i64>) -> BuildParams {
        let defaults = BuildParams::default();
        BuildParams {
            array: self.array_source(),
            bst_operation: self.bst_operation,
            bst_value: bst_value.or(self.bst_value).unwrap_or(defaults.bst_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("algostep").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.step_interval(), Duration::from_millis(300));
        assert_eq!(config.array_len, 100);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "--algo",
            "quick",
            "--seed=42",
            "--len",
            "64",
            "--interval-ms",
            "20",
            "--bst-op",
            "delete",
            "--bst-value",
            "-3",
            "--log",
            "run.log",
        ])
        .unwrap();

        assert_eq!(config.algorithm, Some(AlgorithmKind::QuickSort));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.array_len, 64);
        assert_eq!(config.step_interval(), Duration::from_millis(20));
        assert_eq!(config.bst_operation, BstOperation::Delete);
        assert_eq!(config.bst_value, Some(-3));
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_names_ignore_case_and_accept_short_operations() {
        let config = parse(&["--algo", "Bellman-Ford", "--bst-op", "I"]).unwrap();
        assert_eq!(config.algorithm, Some(AlgorithmKind::BellmanFord));
        assert_eq!(config.bst_operation, BstOperation::Insert);
    }

    #[test]
    fn test_errors() {
        let kind = |args: &[&str]| parse(args).map(|_| ()).map_err(|e| e.kind());

        assert_eq!(kind(&["--speed"]), Err(ErrorKind::UnknownArgument));
        assert!(kind(&["--seed"]).is_err());
        assert_eq!(kind(&["--algo", "bogo"]), Err(ErrorKind::InvalidValue));
        assert_eq!(kind(&["--bst-op", "remove"]), Err(ErrorKind::InvalidValue));
        assert_eq!(kind(&["--len", "0"]), Err(ErrorKind::ValueValidation));
        assert_eq!(kind(&["--len", "1001"]), Err(ErrorKind::ValueValidation));
        assert_eq!(kind(&["--interval-ms", "0"]), Err(ErrorKind::ValueValidation));
        assert_eq!(kind(&["--help"]), Err(ErrorKind::DisplayHelp));
    }

    #[test]
    fn test_build_params_prefers_entered_value() {
        let config = Config {
            bst_value: Some(10),
            ..Config::default()
        };
        assert_eq!(config.build_params(Some(99)).bst_value, 99);
        assert_eq!(config.build_params(None).bst_value, 10);
        assert_eq!(Config::default().build_params(None).bst_value, 45);
    }
}
