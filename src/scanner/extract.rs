//! Single-pass symbol extraction
//!
//! [`Extractor`] walks the input once, keeping a two-slot window: the
//! previous unmatched line and the current one. A declaration is suppressed
//! when the previous line starts with an unused marker. Every match clears the
//! previous slot, so a marker only ever applies to the declaration directly
//! below it.

use std::io::BufRead;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::pattern::{DeclarationPattern, MarkerSet};
use crate::config::Config;
use crate::errors::Result;

/// A declaration dropped because of the marker on the line above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppressed {
    pub name: String,
    /// 1-based line number of the declaration
    pub line: usize,
    pub marker: String,
}

/// Result of one pass over the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Accepted symbols in input order, duplicates included
    pub symbols: Vec<String>,
    pub lines_read: usize,
    /// Lines that matched the declaration pattern, suppressed ones included
    pub matched: usize,
    pub suppressed: Vec<Suppressed>,
    /// Accepted names declared more than once, sorted
    pub duplicates: Vec<String>,
}

/// Extracts public-API symbol names from declaration lines
#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: DeclarationPattern,
    markers: MarkerSet,
}

impl Extractor {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Extractor {
            pattern: DeclarationPattern::new(&config.prefix)?,
            markers: MarkerSet::new(config.unused_markers.iter().cloned()),
        })
    }

    /// Scan a line-oriented reader to end of stream.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn scan<R: BufRead>(&self, mut reader: R) -> Result<ScanSummary> {
        let mut window = Window::new(self);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            window.push(&String::from_utf8_lossy(&buf));
        }

        Ok(window.finish())
    }

    /// Scan text already held in memory.
    pub fn scan_str(&self, text: &str) -> ScanSummary {
        let mut window = Window::new(self);
        for line in text.split_inclusive('\n') {
            window.push(line);
        }
        window.finish()
    }
}

/// Pass state: the lookback slot plus the growing summary
struct Window<'a> {
    extractor: &'a Extractor,
    last_line: String,
    occurrences: FxHashMap<String, usize>,
    summary: ScanSummary,
}

impl<'a> Window<'a> {
    fn new(extractor: &'a Extractor) -> Self {
        Window {
            extractor,
            last_line: String::new(),
            occurrences: FxHashMap::default(),
            summary: ScanSummary::default(),
        }
    }

    fn push(&mut self, raw: &str) {
        self.summary.lines_read += 1;
        let line_no = self.summary.lines_read;
        let extractor = self.extractor;
        let line = normalize_newline(raw);

        let Some(name) = extractor.pattern.symbol(&line).map(str::to_owned) else {
            self.last_line = line.into_owned();
            return;
        };

        self.summary.matched += 1;

        match extractor.markers.find(&self.last_line) {
            Some(marker) => {
                debug!(symbol = %name, line = line_no, marker, "suppressed unused symbol");
                self.summary.suppressed.push(Suppressed {
                    name,
                    line: line_no,
                    marker: marker.to_string(),
                });
            }
            None => {
                debug!(symbol = %name, line = line_no, "accepted symbol");
                *self.occurrences.entry(name.clone()).or_insert(0) += 1;
                self.summary.symbols.push(name);
            }
        }

        self.last_line.clear();
    }

    /// End of stream: any pending lookback line is dropped.
    fn finish(mut self) -> ScanSummary {
        let mut duplicates: Vec<String> = self
            .occurrences
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(name, _)| name)
            .collect();
        duplicates.sort();
        for name in &duplicates {
            debug!(symbol = %name, "symbol declared more than once");
        }
        self.summary.duplicates = duplicates;

        info!(
            lines = self.summary.lines_read,
            matched = self.summary.matched,
            accepted = self.summary.symbols.len(),
            suppressed = self.summary.suppressed.len(),
            duplicates = self.summary.duplicates.len(),
            "scan complete"
        );
        self.summary
    }
}

/// Fold a CRLF terminator into LF so DOS-format headers scan the same way.
fn normalize_newline(line: &str) -> std::borrow::Cow<'_, str> {
    match line.strip_suffix("\r\n") {
        Some(body) => format!("{}\n", body).into(),
        None => line.into(),
    }
}
