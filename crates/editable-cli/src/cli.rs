//! CLI argument parsing using clap derive

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Manage your editable namespace packages - your easy-install.pth file
#[derive(Parser, Debug)]
#[command(name = "reorder-editable")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Python interpreter asked for its site-packages directories
    #[arg(long, global = true, env = "REORDER_EDITABLE_PYTHON", value_name = "PROGRAM")]
    pub python: Option<OsString>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads the manifest
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationArgs {
    /// Manually provide path to easy-install.pth
    #[arg(
        short = 'e',
        long = "easy-install-location",
        env = "REORDER_EDITABLE_PTH",
        value_name = "PATH"
    )]
    pub easy_install_location: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print easy-install.pth contents
    Cat {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Print the path of the easy-install.pth in use
    Locate {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Check easy-install.pth order
    ///
    /// Exits with a non-zero code if the directories given as arguments
    /// do not appear in easy-install.pth in that order, or if one of them
    /// does not exist or is not in the file.
    ///
    /// Example:
    ///   reorder-editable check ./path/to/repo /another/path/to/repo
    ///
    /// Here ./path/to/repo must be above /another/path/to/repo.
    Check {
        #[command(flatten)]
        location: LocationArgs,

        /// Directories, in the order they should appear
        #[arg(required = true, value_name = "DIRECTORY")]
        directories: Vec<String>,
    },

    /// Reorder easy-install.pth
    ///
    /// Moves the given directories to the end of easy-install.pth, in the
    /// order given. Include every directory whose order you care about.
    /// Fails if a directory does not exist or is not already in the file.
    ///
    /// Example:
    ///   reorder-editable reorder ./path/to/repo /another/path/to/repo
    Reorder {
        #[command(flatten)]
        location: LocationArgs,

        /// Show the change without writing it
        #[arg(long)]
        dry_run: bool,

        /// Directories, in the order they should appear
        #[arg(required = true, value_name = "DIRECTORY")]
        directories: Vec<String>,
    },
}
