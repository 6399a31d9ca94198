//! Command line argument parsing for the VSL front end.
//!
//! This module defines the CLI interface using `clap`. The `Cli` struct captures
//! all command line flags and arguments passed to the `vslc` binary.

use clap::Parser;

/// Command line interface definition for `vslc`.
///
/// `vslc` reads a raw syntax tree in JSON form, simplifies it and prints the
/// resulting tree.
///
/// ## Examples
///
/// Simplify and dump:
/// ```bash
/// vslc program.json
/// ```
///
/// Show the tree before and after simplification, two spaces per level:
/// ```bash
/// vslc program.json --raw --indent 2
/// ```
#[derive(Parser)]
#[command(
    name = "vslc",
    author,
    version,
    about = "VSL front end: simplify a raw syntax tree",
    long_about = "The 'vslc' command reads a raw syntax tree (JSON), removes syntactic wrapper nodes, \
flattens nested lists, folds constant arithmetic and prints the simplified tree."
)]
pub(crate) struct Cli {
    /// Path to the raw syntax tree (JSON).
    pub(crate) path: std::path::PathBuf,

    /// Also print the tree as read, before simplification.
    #[clap(long = "raw", action = clap::ArgAction::SetTrue)]
    pub(crate) raw: bool,

    /// Spaces per nesting level in tree dumps.
    #[clap(long = "indent", default_value_t = 1)]
    pub(crate) indent: usize,

    /// Log each rewrite to stderr.
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::SetTrue)]
    pub(crate) verbose: bool,
}
