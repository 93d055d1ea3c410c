use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cachesweep",
    about = "Prune expired entries from a file-based cache tree",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan the cache tree and report what would be removed (dry-run, no deletion)
    Scan {
        /// Root of the cache tree
        directory: String,

        /// Print a diagnostic line for every entry visited
        #[arg(long)]
        verbose: bool,
    },

    /// Delete expired cache files and prune empty shard directories
    Clean {
        /// Root of the cache tree
        directory: String,

        /// Actually delete files. Without this flag, behaves like scan.
        #[arg(long)]
        confirm: bool,

        /// Print a diagnostic line for every entry visited
        #[arg(long)]
        verbose: bool,
    },
}
