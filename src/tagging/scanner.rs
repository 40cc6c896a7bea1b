// src/tagging/scanner.rs
//! First pass: find every token in the untouched source text.

use super::patterns::TagPatterns;
use crate::types::MatchKind;
use regex::Regex;
use std::ops::Range;

/// A token found in the source text. `range` is a byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenMatch {
    pub kind: MatchKind,
    pub range: Range<usize>,
}

/// Collects tag matches and, when `with_links` is set, link matches.
///
/// The result is sorted by start. Both patterns start after whitespace or
/// at start-of-text and never contain whitespace, so ranges cannot overlap.
pub(crate) fn scan(text: &str, patterns: &TagPatterns, with_links: bool) -> Vec<TokenMatch> {
    let mut matches: Vec<TokenMatch> = captured_ranges(patterns.tag(), text)
        .filter_map(|range| {
            let sigil = text[range.clone()].chars().next()?;
            let kind = MatchKind::from_sigil(sigil)?;
            Some(TokenMatch { kind, range })
        })
        .collect();

    if with_links {
        matches.extend(
            captured_ranges(patterns.link(), text).map(|range| TokenMatch {
                kind: MatchKind::Link,
                range,
            }),
        );
        matches.sort_by_key(|m| m.range.start);
    }

    log::trace!("Found {} tokens in {} bytes", matches.len(), text.len());
    matches
}

fn captured_ranges<'a>(
    regex: &'a Regex,
    text: &'a str,
) -> impl Iterator<Item = Range<usize>> + 'a {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.range())
}
