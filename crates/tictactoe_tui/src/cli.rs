//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config (defaults are used if omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write logs to (the terminal is taken by the UI)
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.log_file, PathBuf::from("tictactoe_tui.log"));
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::parse_from(["tictactoe", "-c", "display.toml", "--log-file", "/tmp/t.log"]);
        assert_eq!(cli.config, Some(PathBuf::from("display.toml")));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/t.log"));
    }
}
