//! CLI module for H.E.R.M.E.S
//!
//! Provides command-line interface parsing for the hermes-router binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};

/// H.E.R.M.E.S - Hierarchical Engine for Routing Messages to Embedded Sub-agents
///
/// A routing assistant that drives a bounded reasoning loop over a set of
/// tools and specialist sub-agents.
#[derive(Parser, Debug)]
#[command(
    name = "hermes-router",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "H.E.R.M.E.S - Hierarchical Engine for Routing Messages to Embedded Sub-agents",
    long_about = "A routing assistant that drives a bounded reasoning loop over a set of\n\
                  tools and specialist sub-agents, backed by an OpenAI or Ollama model.\n\n\
                  Run without arguments for an interactive session, or use 'ask' for a\n\
                  single question.",
    after_help = "EXAMPLES:\n    \
                  hermes-router                                # Start an interactive session\n    \
                  hermes-router ask \"weather in Paris?\"        # Answer one question and exit\n    \
                  hermes-router --verbose                      # Interactive session with debug logs"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question and exit
    Ask {
        /// The question to answer
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
