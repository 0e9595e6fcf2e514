// lds-gen: linker version script generator for a library's public API

use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use lds_gen::config::{Config, DEFAULT_GENERATOR, DEFAULT_PREFIX, DEFAULT_UNUSED_MARKERS};
use lds_gen::logging::init_tracing;

/// Generate a linker version script exposing only the public API.
///
/// Declarations are read from stdin, the script is written to stdout.
///
/// Example: cat src/*.h src/*.c | lds-gen > libserdes.lds
#[derive(Debug, Parser)]
#[command(name = "lds-gen", version, about, long_about = None)]
struct Args {
    /// Name prefix of public API functions
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Line prefix that hides the declaration below it (replaces the defaults)
    #[arg(long = "unused-marker", value_name = "MARKER")]
    unused_markers: Vec<String>,

    /// Symbol to export even though no declaration names it
    #[arg(long = "extra-symbol", value_name = "NAME")]
    extra_symbols: Vec<String>,

    /// Tool name written in the generated header comment
    #[arg(long, default_value = DEFAULT_GENERATOR)]
    generator: String,

    /// Drop repeated symbol names (prototype plus definition)
    #[arg(long)]
    dedup: bool,

    /// Log each accepted and suppressed symbol to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let unused_markers = if self.unused_markers.is_empty() {
            DEFAULT_UNUSED_MARKERS.iter().map(|m| m.to_string()).collect()
        } else {
            self.unused_markers
        };

        Config {
            prefix: self.prefix,
            unused_markers,
            extra_symbols: self.extra_symbols,
            generator: self.generator,
            dedup: self.dedup,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.into_config();
    config.validate().context("invalid configuration")?;

    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());

    let summary = lds_gen::generate(&config, stdin.lock(), &mut stdout)
        .context("failed to generate version script")?;

    if summary.symbols.is_empty() && config.extra_symbols.is_empty() {
        warn!(
            prefix = %config.prefix,
            "no public symbols found; exporting everything"
        );
    }

    Ok(())
}
