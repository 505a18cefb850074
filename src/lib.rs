//! xi18nt - Java source internationalization rewriter
//!
//! xi18nt is a CLI tool and library that scans Java source trees for
//! string literals containing CJK text, rewrites them into
//! resource-bundle lookup expressions, and emits the matching
//! `.properties` key/value files.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `diagnostics`: Diagnostic type definitions
//! - `driver`: Per-file pipeline and run-wide aggregation
//! - `emit`: Resource bundle (.properties) emission
//! - `engine`: The rewrite engine (key assignment, classification, traversal)
//! - `parser`: Java parsing and lowering into the syntax tree
//! - `reporter`: Cargo-style diagnostic printing
//! - `scanner`: Source tree scanning
//! - `tree`: Arena syntax tree with replacement support
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod emit;
pub mod engine;
pub mod parser;
pub mod reporter;
pub mod scanner;
pub mod tree;
pub mod utils;
