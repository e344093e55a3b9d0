//! Command-line surface: one subcommand per file operation.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::snapshot::SortOrder;

#[derive(Parser)]
#[command(
    name = "fk",
    version,
    about = "Elementary file operations and sorted directory listings"
)]
pub struct Cli {
    /// Log more detail (repeat for debug output).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an empty file, leaving an existing one untouched
    Create { path: PathBuf },
    /// Print a file's contents
    Cat { path: PathBuf },
    /// Append text to an existing file
    Append { path: PathBuf, text: String },
    /// Delete a file
    Rm { path: PathBuf },
    /// Remove an empty directory
    Rmdir { path: PathBuf },
    /// Change a file's permission bits
    Chmod {
        /// Octal mode, e.g. 644
        mode: String,
        path: PathBuf,
    },
    /// List directory entries in enumeration order
    Ls {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Show size, modification time and permissions for a path
    Stat { path: PathBuf },
    /// Rename a file within its directory
    Rename { path: PathBuf, new_name: String },
    /// Move a file to a new path or into a directory
    Mv { src: PathBuf, dst: PathBuf },
    /// Copy a file byte-for-byte
    Cp { src: PathBuf, dst: PathBuf },
    /// Print a directory's regular files sorted by the chosen key
    Sort {
        #[arg(default_value = ".")]
        dir: PathBuf,
        /// Sort key
        #[arg(long, value_enum, default_value_t = SortBy::Size)]
        by: SortBy,
    },
    /// Run the demonstration sequence of every operation
    Demo {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// CLI-facing names for the snapshot ordering policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortBy {
    /// Smallest file first
    Size,
    /// Most recently modified file first
    Modified,
}

impl From<SortBy> for SortOrder {
    fn from(by: SortBy) -> Self {
        match by {
            SortBy::Size => SortOrder::SizeAscending,
            SortBy::Modified => SortOrder::ModifiedDescending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_size_order() {
        let cli = Cli::try_parse_from(["fk", "sort", "/tmp"]).unwrap();
        match cli.command {
            Command::Sort { by, .. } => assert_eq!(SortOrder::from(by), SortOrder::SizeAscending),
            _ => panic!("expected sort subcommand"),
        }
    }

    #[test]
    fn sort_by_modified_maps_to_descending_policy() {
        let cli = Cli::try_parse_from(["fk", "sort", "/tmp", "--by", "modified"]).unwrap();
        match cli.command {
            Command::Sort { by, .. } => {
                assert_eq!(SortOrder::from(by), SortOrder::ModifiedDescending)
            }
            _ => panic!("expected sort subcommand"),
        }
    }

    #[test]
    fn chmod_takes_mode_then_path() {
        let cli = Cli::try_parse_from(["fk", "chmod", "644", "f.txt"]).unwrap();
        match cli.command {
            Command::Chmod { mode, path } => {
                assert_eq!(mode, "644");
                assert_eq!(path, PathBuf::from("f.txt"));
            }
            _ => panic!("expected chmod subcommand"),
        }
    }
}
