//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::NodePath;

/// Query and convert binary trees given in preorder string form
#[derive(Parser, Debug)]
#[command(name = "bintree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print node count, depths and the maximum path sum
    Stats {
        /// Encoded tree, or '-' to read stdin
        tree: String,
    },

    /// Print the smallest value greater than BOUND
    #[command(name = "next-larger")]
    NextLarger {
        /// Encoded tree, or '-' to read stdin
        tree: String,
        #[arg(allow_negative_numbers = true)]
        bound: i64,
    },

    /// Tell whether two nodes are cousins
    Cousins {
        /// Encoded tree, or '-' to read stdin
        tree: String,
        /// Path of the first node, e.g. 'LR' ('.' is the root)
        a: NodePath,
        /// Path of the second node
        b: NodePath,
    },

    /// Find the lowest common ancestor of two nodes
    Lca {
        /// Encoded tree, or '-' to read stdin
        tree: String,
        /// Path of the first node, e.g. 'LR' ('.' is the root)
        a: NodePath,
        /// Path of the second node
        b: NodePath,
    },

    /// Draw the tree
    Show {
        /// Encoded tree, or '-' to read stdin
        tree: String,
    },

    /// Decode and re-encode a tree
    Normalize {
        /// Encoded tree, or '-' to read stdin
        tree: String,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
