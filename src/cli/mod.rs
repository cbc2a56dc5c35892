// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (defaults to serving the API)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port
    #[arg(long, global = true)]
    pub api_port: Option<u16>,

    /// Address the API server binds to
    #[arg(long, global = true)]
    pub api_address: Option<String>,

    /// Append the timestamp suffix twice
    #[arg(long, global = true)]
    pub duplicate_suffix: Option<bool>,
}

impl Args {
    /// Fold command-line overrides into a loaded configuration.
    pub fn apply_to(&self, config: &mut crate::core::config::Config) {
        if let Some(port) = self.api_port {
            config.web_port = port;
        }
        if let Some(address) = &self.api_address {
            config.web_address = address.clone();
        }
        if let Some(duplicate) = self.duplicate_suffix {
            config.duplicate_suffix = duplicate;
        }
    }
}
