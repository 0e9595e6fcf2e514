// Configuration for version script generation

use crate::errors::{Error, Result};

/// Prefix identifying a declaration as part of the public API
pub const DEFAULT_PREFIX: &str = "serdes_";

/// Line prefixes marking the following declaration as unused
pub const DEFAULT_UNUSED_MARKERS: [&str; 2] = ["SERDES_UNUSED", "__attribute__((unused))"];

/// Tool name written into the generated header comment
pub const DEFAULT_GENERATOR: &str = "lds-gen";

/// Settings for one scan-and-emit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prefix: String,
    pub unused_markers: Vec<String>,
    /// Symbols exported unconditionally, whether or not a declaration names them
    pub extra_symbols: Vec<String>,
    pub generator: String,
    /// Collapse repeated names after sorting
    pub dedup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: DEFAULT_PREFIX.to_string(),
            unused_markers: DEFAULT_UNUSED_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            extra_symbols: Vec::new(),
            generator: DEFAULT_GENERATOR.to_string(),
            dedup: false,
        }
    }
}

impl Config {
    /// Reject values that would produce a broken pattern or script.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::invalid_config("prefix", "must not be empty"));
        }
        if self
            .prefix
            .chars()
            .any(|c| c.is_whitespace() || c == '(')
        {
            return Err(Error::invalid_config(
                "prefix",
                format!("'{}' contains whitespace or '('", self.prefix),
            ));
        }
        if self.unused_markers.iter().any(|m| m.is_empty()) {
            return Err(Error::invalid_config(
                "unused marker",
                "must not be empty",
            ));
        }
        for sym in &self.extra_symbols {
            if sym.is_empty() || sym.contains(|c: char| c.is_whitespace() || c == ';') {
                return Err(Error::invalid_config(
                    "extra symbol",
                    format!("'{}' is not a valid symbol name", sym),
                ));
            }
        }
        if self.generator.contains('\n') {
            return Err(Error::invalid_config(
                "generator",
                "must fit on a single line",
            ));
        }
        Ok(())
    }
}
