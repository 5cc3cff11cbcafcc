//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Bucket - Declare expectations about directory trees and check them
#[derive(Parser, Debug)]
#[command(name = "bucket")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize a new bucket repository
    ///
    /// Creates directory NAME with a top-level .buckets directory holding
    /// the repository configuration.
    ///
    /// Examples:
    ///   bucket init garden
    Init {
        /// Name of the repository directory to create
        name: String,
    },

    /// Create a new bucket for content
    ///
    /// Must be run inside a bucket repository.
    Create {
        /// Name of the bucket
        name: String,
    },

    /// Rename an existing bucket
    ///
    /// Examples:
    ///   bucket rename Flower Tulip
    Rename {
        /// Current bucket name
        old: String,
        /// New bucket name
        new: String,
    },

    /// Show information about the enclosing repository
    Info,

    /// Declare an expectation for the enclosing bucket
    ///
    /// Examples:
    ///   bucket expect bucket Flower           # expect a bucket named Flower
    ///   bucket expect bucket Weeds --absent   # expect Weeds NOT to exist
    ///   bucket expect set                     # choose a resource type interactively
    #[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
    Expect {
        /// Interactive alternatives to positional arguments
        #[command(subcommand)]
        action: Option<ExpectAction>,

        /// Kind of resource (e.g. "bucket")
        #[arg(required = true)]
        kind: Option<String>,

        /// Name of the resource, relative to the bucket root
        #[arg(required = true)]
        name: Option<String>,

        /// Expect the resource to be absent instead of present
        #[arg(long)]
        absent: bool,
    },

    /// Check all expectations of the enclosing bucket
    Check {
        /// Output the report as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Subcommands of `expect`
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ExpectAction {
    /// Select the resource type from a menu, then enter its name
    Set {
        /// Expect the resource to be absent instead of present
        #[arg(long)]
        absent: bool,
    },
}
