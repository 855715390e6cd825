use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bigip-http-profile")]
#[command(about = "Manage LTM HTTP profiles on a BIG-IP device")]
pub struct Cli {
    /// Device host, e.g. https://192.168.1.1 (falls back to BIGIP_HOST)
    #[arg(long)]
    pub host: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a profile from a TOML declaration
    Create {
        #[arg(long)]
        declaration: PathBuf,
    },
    /// Fetch a profile by name and print the refreshed view
    Read {
        #[arg(long)]
        name: String,
    },
    /// Push the declared configuration onto an existing profile
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        declaration: PathBuf,
    },
    /// Delete a profile by name
    Delete {
        #[arg(long)]
        name: String,
    },
    /// Adopt an existing device profile into a local state view
    Import {
        #[arg(long)]
        name: String,
    },
}
