//! Declaration and exclusion-marker matching
//!
//! The declaration matcher is a single regular expression, not a C parser:
//!
//! ```text
//! ^(\S+.*\s+\**)?(<prefix>\S+)\s*\([^)]
//! ```
//!
//! Group 1 swallows the return type and qualifiers (plus any `*` pointer
//! markers glued to the name), group 2 is the symbol. The opening parenthesis
//! must be followed by something other than `)`, so `serdes_f()` does not
//! match while `serdes_f(void)` does. Multi-line signatures, macros and
//! comments produce whatever this heuristic makes of them.

use regex::Regex;

use crate::errors::Result;

/// Compiled matcher for public-API function declarations
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    regex: Regex,
}

impl DeclarationPattern {
    /// Build the matcher for names beginning with `prefix`.
    ///
    /// The prefix is matched literally; regex metacharacters in it are escaped.
    pub fn new(prefix: &str) -> Result<Self> {
        let source = format!(r"^(\S+.*\s+\**)?({}\S+)\s*\([^)]", regex::escape(prefix));
        Ok(DeclarationPattern {
            regex: Regex::new(&source)?,
        })
    }

    /// Returns the declared symbol name if `line` is a candidate declaration.
    ///
    /// `line` should still carry its line terminator: a signature that breaks
    /// right after the `(` matches on the newline.
    pub fn symbol<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
    }
}

/// Line prefixes that suppress the declaration on the following line
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<String>,
}

impl MarkerSet {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MarkerSet {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the marker `line` starts with, if any.
    ///
    /// Markers anchor at column zero; an indented marker does not count.
    pub fn find(&self, line: &str) -> Option<&str> {
        self.markers
            .iter()
            .map(String::as_str)
            .find(|marker| line.starts_with(marker))
    }
}
