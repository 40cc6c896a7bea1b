// src/tagging/patterns.rs
//! Compiled regular expressions for tags and links.
//!
//! Both patterns accept start-of-text or a whitespace char as the left
//! boundary and put the token itself in capture group 1.

use crate::config::DelimiterSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns for the default delimiter set, compiled once per process.
pub(crate) static DEFAULT_PATTERNS: Lazy<TagPatterns> = Lazy::new(|| {
    TagPatterns::compile(&DelimiterSet::default())
        .expect("Failed to compile default tag patterns - this is a bug in the code")
});

const LINK_PATTERN: &str = r"(?:^|\s)(https?://\S+)";

#[derive(Debug, Clone)]
pub(crate) struct TagPatterns {
    tag: Regex,
    link: Regex,
}

impl TagPatterns {
    /// Compiles the tag pattern for a delimiter set.
    ///
    /// Every terminator is escaped individually, so any set yields a valid
    /// character class.
    pub(crate) fn compile(delimiters: &DelimiterSet) -> Result<Self, regex::Error> {
        let tag = Regex::new(&tag_pattern(delimiters))?;
        let link = Regex::new(LINK_PATTERN)?;
        Ok(Self { tag, link })
    }

    pub(crate) fn tag(&self) -> &Regex {
        &self.tag
    }

    pub(crate) fn link(&self) -> &Regex {
        &self.link
    }
}

fn tag_pattern(delimiters: &DelimiterSet) -> String {
    let excluded: String = delimiters
        .chars()
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!(r"(?:^|\s)([@#][^\s{}]+)", excluded)
}
