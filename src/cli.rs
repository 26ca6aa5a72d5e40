//! Command-line interface for strictly_reversi_console.

use clap::{Parser, Subcommand};
use strictly_reversi::EndPolicy;

/// Strictly Reversi - two-player Reversi on the console
#[derive(Parser, Debug)]
#[command(name = "strictly_reversi")]
#[command(about = "Two-player Reversi on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game on stdin/stdout
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// What happens when the player to move is blocked
        /// (pass-turn or stop-on-first-blocked)
        #[arg(long)]
        end_policy: Option<EndPolicy>,

        /// Print row and column indices around the board
        #[arg(long)]
        coordinates: bool,

        /// List the legal moves under each prompt
        #[arg(long)]
        hints: bool,
    },

    /// Print the starting board and exit
    Show {
        /// Print row and column indices around the board
        #[arg(long)]
        coordinates: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "strictly_reversi",
            "play",
            "--end-policy",
            "stop-on-first-blocked",
            "--hints",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                config,
                end_policy,
                coordinates,
                hints,
            } => {
                assert!(config.is_none());
                assert_eq!(end_policy, Some(EndPolicy::StopOnFirstBlocked));
                assert!(!coordinates);
                assert!(hints);
            }
            Command::Show { .. } => panic!("Expected play"),
        }
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let parsed = Cli::try_parse_from(["strictly_reversi", "play", "--end-policy", "never"]);
        assert!(parsed.is_err());
    }
}
