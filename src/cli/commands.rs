// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API
    Serve,

    /// Generate a password from text
    Generate {
        /// Text to derive the password from
        #[arg(required = true)]
        text: String,

        /// Do not insert digits
        #[arg(long)]
        no_numbers: bool,

        /// Do not insert symbols
        #[arg(long)]
        no_symbols: bool,

        /// Minimum length target (defaults to DEFAULT_MIN_LENGTH)
        #[arg(long, allow_negative_numbers = true)]
        min_length: Option<i64>,
    },

    /// Score the strength of a password
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },
}
