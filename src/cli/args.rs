//! CLI argument definitions using clap

use clap::{ArgAction, Parser};

/// Print the proposed directory layout of the Personal Budget Tracker project
#[derive(Parser, Debug)]
#[command(name = "budget-layout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Diagnostic logging on stderr, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}
