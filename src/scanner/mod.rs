//! Public-API symbol scanner
//!
//! This module turns a stream of C header or source lines into symbol names:
//! - [`pattern`]: the declaration regex and unused-marker prefixes
//! - [`extract`]: the single forward pass with one line of lookback
//!
//! # Heuristic, not a parser
//!
//! Each line is matched on its own. There is no preprocessor, no comment
//! stripping, and no joining of multi-line signatures; a declaration is
//! recognised only if its name and opening parenthesis share a line.

pub mod extract;
pub mod pattern;

pub use extract::{Extractor, ScanSummary, Suppressed};
