//! # Introduction
//!
//! lds-gen reads C declarations and writes a linker version script that
//! exports the library's public API and hides everything else.  Public
//! functions are recognised by a fixed name prefix (`serdes_` by default);
//! a declaration directly below an unused marker (`SERDES_UNUSED` or
//! `__attribute__((unused))`) is left out.
//!
//! ## Pipeline
//!
//! ```text
//! Lines → Extractor → ScanSummary → VersionScript → Output
//! ```
//!
//! 1. [`scanner`]: matches each line against the declaration pattern and
//!    applies the one-line lookback for unused markers.
//! 2. [`script`]: sorts the accepted names and renders the `global`/`local`
//!    blocks.  With no names at all, the script exports `*` instead.
//! 3. [`config`]: prefix, markers, extra symbols and header name.
//! 4. [`logging`]: `tracing` output on stderr, filtered by `LDS_GEN_LOG`.
//!
//! ## Example
//!
//! ```
//! use lds_gen::{generate, Config};
//!
//! let input = "SERDES_UNUSED\nstatic int serdes_bar(void) {\nint serdes_foo(void) {\n";
//! let mut out = Vec::new();
//! generate(&Config::default(), input.as_bytes(), &mut out).unwrap();
//!
//! let script = String::from_utf8(out).unwrap();
//! assert!(script.contains("    serdes_foo;\n"));
//! assert!(!script.contains("serdes_bar"));
//! ```

use std::io::{BufRead, Write};

pub mod config;
pub mod errors;
pub mod logging;
pub mod scanner;
pub mod script;

pub use config::Config;
pub use errors::{Error, Result};
pub use scanner::{Extractor, ScanSummary};
pub use script::VersionScript;

/// Scan `input` to end of stream and write the version script to `output`.
///
/// The script is rendered in full before anything is written, so a read
/// failure leaves `output` untouched.
pub fn generate<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: &mut W,
) -> Result<ScanSummary> {
    let extractor = Extractor::new(config)?;
    let summary = extractor.scan(input)?;
    VersionScript::from_summary(&summary, config).write_to(output)?;
    Ok(summary)
}
