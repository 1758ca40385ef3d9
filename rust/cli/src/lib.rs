//! # Parlor CLI Library
//!
//! Command-line interface for the parlor card-game engine. It exposes
//! subcommands for playing a Blackjack round, running a Lamarckian Poker
//! game to completion, and inspecting deck shuffles.
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments, resolves the seed (flag, then `PARLOR_SEED`,
//! then the config file), and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["parlor", "blackjack", "--seed", "42"];
//! let code = parlor_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::{Parser, Subcommand};
use std::io::Write;

mod commands;
mod config;
mod error;

use commands::{handle_blackjack_command, handle_deal_command, handle_poker_command};
use config::resolve_seed;
pub use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "parlor", about = "Seeded Blackjack and Lamarckian Poker games")]
struct ParlorCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Play one Blackjack round: deal, player turn, dealer turn, outcome
    Blackjack {
        /// RNG seed for a reproducible round
        #[arg(long)]
        seed: Option<u64>,
        /// Emit the round as a single JSON object
        #[arg(long)]
        json: bool,
    },
    /// Run a Lamarckian Poker game until both hands are full
    Poker {
        /// RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many turns even if the game is not over
        #[arg(long, default_value_t = 500)]
        max_turns: u32,
        /// Emit a single JSON summary instead of the per-turn log
        #[arg(long)]
        json: bool,
    },
    /// Shuffle a fresh deck and list its top cards
    Deal {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// How many cards to list
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
}

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match ParlorCli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // help and version requests are successes, not usage errors
            return if e.use_stderr() {
                let _ = write!(err, "{}", e);
                2
            } else {
                let _ = write!(out, "{}", e);
                0
            };
        }
    };

    let result = match cli.command {
        Commands::Blackjack { seed, json } => {
            resolve_seed(seed).and_then(|seed| handle_blackjack_command(seed, json, out))
        }
        Commands::Poker {
            seed,
            max_turns,
            json,
        } => resolve_seed(seed).and_then(|seed| handle_poker_command(seed, max_turns, json, out)),
        Commands::Deal { seed, count } => {
            resolve_seed(seed).and_then(|seed| handle_deal_command(seed, count, out))
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            2
        }
    }
}
