use std::io::{self, Read};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{BinaryTree, NodeId, NodePath, TreeRender};

/// Summary printed by `bintree stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub min_depth: usize,
    pub max_depth: usize,
    pub max_sum: i64,
}

impl TreeStats {
    pub fn of(tree: &BinaryTree) -> Self {
        Self {
            nodes: tree.len(),
            min_depth: tree.min_depth(),
            max_depth: tree.max_depth(),
            max_sum: tree.max_sum(),
        }
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    match &cli.command {
        Some(Commands::Stats { tree }) => stats(&settings, tree),
        Some(Commands::NextLarger { tree, bound }) => next_larger(&settings, tree, *bound),
        Some(Commands::Cousins { tree, a, b }) => cousins(&settings, tree, a, b),
        Some(Commands::Lca { tree, a, b }) => lca(&settings, tree, a, b),
        Some(Commands::Show { tree }) => show(&settings, tree),
        Some(Commands::Normalize { tree }) => normalize(&settings, tree),
        Some(Commands::Config) => show_config(&settings),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => Ok(()),
    }
}

/// Decodes the tree argument; `-` reads it from stdin.
#[instrument(level = "debug", skip(settings))]
pub fn read_tree(settings: &Settings, arg: &str) -> CliResult<BinaryTree> {
    let input = if arg == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        arg.to_string()
    };
    let tree = settings.codec()?.deserialize(input.trim())?;
    debug!(nodes = tree.len(), "tree argument decoded");
    Ok(tree)
}

/// Looks up a node path, warning when it leads nowhere.
fn lookup(tree: &BinaryTree, path: &NodePath) -> Option<NodeId> {
    let node = tree.node_at(path);
    if node.is_none() {
        output::warning(&format!("no node at path {path}"));
    }
    node
}

fn stats(settings: &Settings, tree: &str) -> CliResult<()> {
    let tree = read_tree(settings, tree)?;
    let stats = TreeStats::of(&tree);
    output::field("nodes", &stats.nodes);
    output::field("min depth", &stats.min_depth);
    output::field("max depth", &stats.max_depth);
    output::field("max sum", &stats.max_sum);
    Ok(())
}

fn next_larger(settings: &Settings, tree: &str, bound: i64) -> CliResult<()> {
    let tree = read_tree(settings, tree)?;
    match tree.next_larger(bound) {
        Some(value) => output::info(&value),
        None => output::warning(&format!("no value greater than {bound}")),
    }
    Ok(())
}

fn cousins(settings: &Settings, tree: &str, a: &NodePath, b: &NodePath) -> CliResult<()> {
    let tree = read_tree(settings, tree)?;
    let answer = match (lookup(&tree, a), lookup(&tree, b)) {
        (Some(a), Some(b)) => tree.are_cousins(a, b),
        _ => false,
    };
    output::info(&answer);
    Ok(())
}

fn lca(settings: &Settings, tree: &str, a: &NodePath, b: &NodePath) -> CliResult<()> {
    let tree = read_tree(settings, tree)?;
    let ancestor = match (lookup(&tree, a), lookup(&tree, b)) {
        (Some(a), Some(b)) => tree.lowest_common_ancestor(a, b),
        _ => None,
    };
    let found = ancestor.and_then(|node| Some((tree.path_of(node)?, tree.value(node)?)));
    match found {
        Some((path, value)) => {
            output::field("path", &path);
            output::field("value", &value);
        }
        None => output::warning("no common ancestor"),
    }
    Ok(())
}

fn show(settings: &Settings, tree: &str) -> CliResult<()> {
    output::info(&render_tree(settings, tree)?);
    Ok(())
}

fn render_tree(settings: &Settings, tree: &str) -> CliResult<String> {
    let codec = settings.codec()?;
    let tree = read_tree(settings, tree)?;
    Ok(tree.to_tree_string_with(codec.sentinel()).to_string())
}

fn normalize(settings: &Settings, tree: &str) -> CliResult<()> {
    let codec = settings.codec()?;
    let tree = read_tree(settings, tree)?;
    output::info(&codec.serialize(&tree));
    Ok(())
}

fn show_config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
