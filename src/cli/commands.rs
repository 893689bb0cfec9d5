//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flatconf")]
#[command(about = "Flat key=value configuration file tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value stored under a key
    Get {
        /// Configuration file to read
        file: PathBuf,

        /// Key to look up (matched verbatim, no trimming)
        key: String,
    },

    /// Set a key and write the file back
    Set {
        /// Configuration file to modify (created if missing)
        file: PathBuf,

        /// Key to set
        key: String,

        /// Value to store
        value: String,
    },

    /// List all entries in ascending key order
    List {
        /// Configuration file to read
        file: PathBuf,
    },
}
