//! Command-line interface for pyscope
//! Inspect the block structure of an indentation-delimited source file.
//!
//! Usage:
//!   pyscope blocks `<path>` [--format text|json|yaml]  - Flat block list in closing order
//!   pyscope tree `<path>` [--format text|json|yaml]    - Containment tree outline
//!   pyscope at `<path>` `<line>`                       - Enclosing blocks of a line, innermost first

use clap::{Arg, Command};
use pyscope::blocks::{parse_text, Block, BlockTree, NodeId};
use serde::Serialize;
use std::fmt;
use std::fs;

/// Errors surfaced by the CLI; the core itself never fails
#[derive(Debug)]
enum CliError {
    Io(String, std::io::Error),
    UnknownFormat(String),
    BadLine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(path, e) => write!(f, "cannot read {}: {}", path, e),
            CliError::UnknownFormat(name) => {
                write!(f, "unknown format: {} (expected text, json, or yaml)", name)
            }
            CliError::BadLine(value) => write!(f, "invalid line number: {}", value),
        }
    }
}

impl std::error::Error for CliError {}

/// Output format for the blocks and tree subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    fn from_name(name: &str) -> Result<Self, CliError> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

fn main() {
    let matches = Command::new("pyscope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect block structure of indentation-delimited source files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("blocks")
                .about("Print the flat block list in closing order")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (text, json, yaml)")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the containment tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (text, json, yaml)")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("at")
                .about("Print the enclosing blocks of a line, innermost first")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("line")
                        .help("Zero-based line number")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("blocks", sub)) => handle_blocks_command(
            sub.get_one::<String>("path").map(String::as_str).unwrap_or(""),
            sub.get_one::<String>("format").map(String::as_str).unwrap_or("text"),
        ),
        Some(("tree", sub)) => handle_tree_command(
            sub.get_one::<String>("path").map(String::as_str).unwrap_or(""),
            sub.get_one::<String>("format").map(String::as_str).unwrap_or("text"),
        ),
        Some(("at", sub)) => handle_at_command(
            sub.get_one::<String>("path").map(String::as_str).unwrap_or(""),
            sub.get_one::<String>("line").map(String::as_str).unwrap_or(""),
        ),
        _ => unreachable!("subcommand_required is set"),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn handle_blocks_command(path: &str, format_name: &str) -> Result<(), CliError> {
    let format = OutputFormat::from_name(format_name)?;
    let blocks = scan_file(path)?;

    match format {
        OutputFormat::Text => {
            for block in &blocks {
                println!("{}", render_block(block));
            }
        }
        OutputFormat::Json => println!("{}", to_json(&blocks)),
        OutputFormat::Yaml => print!("{}", to_yaml(&blocks)),
    }
    Ok(())
}

fn handle_tree_command(path: &str, format_name: &str) -> Result<(), CliError> {
    let format = OutputFormat::from_name(format_name)?;
    let blocks = scan_file(path)?;
    let tree = BlockTree::build(&blocks);

    match format {
        OutputFormat::Text => print!("{}", render_outline(&tree)),
        OutputFormat::Json => println!("{}", to_json(&outline_nodes(&tree, tree.root()))),
        OutputFormat::Yaml => print!("{}", to_yaml(&outline_nodes(&tree, tree.root()))),
    }
    Ok(())
}

fn handle_at_command(path: &str, line_value: &str) -> Result<(), CliError> {
    let line: usize = line_value
        .parse()
        .map_err(|_| CliError::BadLine(line_value.to_string()))?;

    let blocks = scan_file(path)?;
    let tree = BlockTree::build(&blocks);

    match tree.find_node_at_line(line) {
        Some(id) => {
            let chain = std::iter::once(id).chain(tree.ancestors(id));
            for node in chain {
                if let Some(block) = tree.block(node) {
                    println!("{}", render_block(block));
                }
            }
        }
        None => println!("no block at line {}", line),
    }
    Ok(())
}

fn scan_file(path: &str) -> Result<Vec<Block>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::Io(path.to_string(), e))?;
    Ok(parse_text(&text))
}

fn render_block(block: &Block) -> String {
    format!("{} header_end={}", block, block.header_end_line)
}

/// Indented text outline of the tree, depth-first
fn render_outline(tree: &BlockTree) -> String {
    let mut out = String::new();
    render_outline_level(tree, tree.root(), 0, &mut out);
    out
}

fn render_outline_level(tree: &BlockTree, id: NodeId, depth: usize, out: &mut String) {
    if let Some(block) = tree.block(id) {
        out.push_str(&"  ".repeat(depth.saturating_sub(1)));
        out.push_str(&render_block(block));
        out.push('\n');
    }
    for &child in tree.children(id) {
        render_outline_level(tree, child, depth + 1, out);
    }
}

/// Serializable nested view of the tree for structured output
#[derive(Debug, Serialize)]
struct OutlineNode {
    open_line: usize,
    close_line: usize,
    header_end_line: usize,
    children: Vec<OutlineNode>,
}

fn outline_nodes(tree: &BlockTree, id: NodeId) -> Vec<OutlineNode> {
    tree.children(id)
        .iter()
        .filter_map(|&child| {
            let block = tree.block(child)?;
            Some(OutlineNode {
                open_line: block.open.line,
                close_line: block.close.line,
                header_end_line: block.header_end_line,
                children: outline_nodes(tree, child),
            })
        })
        .collect()
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("serialization failed: {}", e))
}

fn to_yaml<T: Serialize>(value: &T) -> String {
    serde_yaml::to_string(value).unwrap_or_else(|e| format!("serialization failed: {}", e))
}
