// Linker version script emission

use std::fmt;
use std::io::Write;

use crate::config::Config;
use crate::errors::Result;
use crate::scanner::ScanSummary;

/// A single-version `global`/`local` linker script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionScript {
    pub generator: String,
    /// Exported names, sorted by byte order
    pub symbols: Vec<String>,
}

impl VersionScript {
    pub fn new(generator: impl Into<String>, mut symbols: Vec<String>) -> Self {
        symbols.sort();
        VersionScript {
            generator: generator.into(),
            symbols,
        }
    }

    /// Combine scanned symbols with the configured extras.
    pub fn from_summary(summary: &ScanSummary, config: &Config) -> Self {
        let symbols = summary
            .symbols
            .iter()
            .chain(&config.extra_symbols)
            .cloned()
            .collect();
        let mut script = VersionScript::new(config.generator.clone(), symbols);
        if config.dedup {
            script.symbols.dedup();
        }
        script
    }

    /// No symbols found: everything stays exported.
    pub fn is_wildcard(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for VersionScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Automatically generated by {} - DO NOT EDIT", self.generator)?;
        writeln!(f, "{{")?;
        writeln!(f, " global:")?;
        if self.is_wildcard() {
            writeln!(f, "    *;")?;
        } else {
            for sym in &self.symbols {
                writeln!(f, "    {};", sym)?;
            }
            writeln!(f, "local:")?;
            writeln!(f, "    *;")?;
        }
        writeln!(f, "}};")
    }
}
