#![warn(clippy::pedantic)]

//! # VSL Front End CLI
//!
//! Command line interface for the tree-rewriting stage.
//!
//! Reads a raw syntax tree from a JSON file, simplifies it and prints the
//! result as an indented tree dump. With `--raw` the unsimplified tree is
//! printed first. With `--verbose` every elision, flattening and fold is
//! logged to stderr.
//!
//! ## Exit codes
//! * 0 – success.
//! * 1 – IO / decode / simplification failure.
//!
//! ## Example
//! ```bash
//! vslc tests/test_data/json/fold_binary.json --raw
//! ```

mod parser;
use anyhow::Context;
use clap::Parser;
use parser::Cli;
use std::{fs, process};
use vslc::{dump, load_tree, simplify_with_stats};

/// Entry point for the CLI executable.
///
/// On any failure a diagnostic is printed to stderr and the process exits with code `1`.
fn main() {
    let args = Cli::parse();
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(false)
            .init();
    }
    if !args.path.exists() {
        eprintln!("Error: path not found");
        process::exit(1);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.path)
        .with_context(|| format!("failed to read {}", args.path.display()))?;
    let root = load_tree(&source)?;
    tracing::info!(path = %args.path.display(), nodes = root.node_count(), "loaded raw tree");

    if args.raw {
        println!("Raw tree:");
        print!("{}", dump(&root, args.indent));
    }

    let (root, stats) = simplify_with_stats(root)?;
    tracing::info!(
        elided = stats.elided,
        flattened = stats.flattened,
        folded = stats.folded,
        "simplified"
    );
    if args.raw {
        println!("Simplified tree:");
    }
    print!("{}", dump(&root, args.indent));
    Ok(())
}
