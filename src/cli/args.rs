//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::application::TreeRequest;
use crate::config::OutputFormat;
use crate::domain::Order;

/// Generate small binary trees, draw them and list their traversals
#[derive(Parser, Debug)]
#[command(name = "treeviz")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Tree shape as typed by the user.
#[derive(Args, Debug, Clone, Copy)]
pub struct ShapeArgs {
    /// Number of levels (1-5)
    pub levels: u32,
    /// Number of nodes (1-32, at least LEVELS, at most 2^LEVELS - 1)
    pub nodes: usize,
}

impl From<ShapeArgs> for TreeRequest {
    fn from(shape: ShapeArgs) -> Self {
        TreeRequest::new(shape.levels, shape.nodes)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a tree and print it
    Build {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Output format (default from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print preorder, inorder and postorder of a generated tree
    Traverse {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Orders to print, comma separated (default from config)
        #[arg(short, long, value_delimiter = ',')]
        order: Vec<Order>,
    },

    /// Print the tree followed by its traversals
    Show {
        #[command(flatten)]
        shape: ShapeArgs,
    },

    /// Export nodes with levels and edges as JSON for a graph viewer
    Graph {
        #[command(flatten)]
        shape: ShapeArgs,
        /// Write to file instead of stdout
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show config file location
    Path,
    /// Print a commented config template
    Template,
}
