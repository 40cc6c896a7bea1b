// src/tagging/layout.rs
//! Second pass: build the displayed text and place annotations on it.
//!
//! Matches are visited left to right over the source text. Each gap is
//! copied verbatim and each token is replaced by its display form, so an
//! annotation's offsets are simply the running char count of the output.
//! Nothing already emitted is ever edited.

use super::scanner::TokenMatch;
use crate::config::TaggerConfig;
use crate::constants::{LINK_ELLIPSIS, LINK_PROTOCOLS};
use crate::types::{Annotation, Color, MatchKind};
use std::borrow::Cow;

/// Display and payload settings for one layout pass.
pub(crate) struct LayoutOptions<'a> {
    pub config: &'a TaggerConfig,
    pub color: Color,
    /// Attach payloads to annotations.
    pub with_payloads: bool,
}

/// Builds the displayed text and its annotations.
pub(crate) fn layout(
    text: &str,
    matches: &[TokenMatch],
    options: &LayoutOptions<'_>,
) -> (String, Vec<Annotation>) {
    let mut displayed = String::with_capacity(text.len());
    let mut annotations = Vec::with_capacity(matches.len());
    let mut cursor = 0;
    let mut displayed_chars = 0;

    for token in matches {
        let gap = &text[cursor..token.range.start];
        displayed.push_str(gap);
        displayed_chars += gap.chars().count();

        let source = &text[token.range.clone()];
        let shown = match token.kind {
            MatchKind::Link => link_display(source, options.config),
            MatchKind::Mention | MatchKind::Hashtag => Cow::Borrowed(source),
        };

        let start = displayed_chars;
        displayed.push_str(&shown);
        displayed_chars += shown.chars().count();

        let payload = options
            .with_payloads
            .then(|| payload_for(token.kind, source, options.config));

        annotations.push(Annotation {
            kind: token.kind,
            start,
            end: displayed_chars,
            color: options.color,
            payload,
        });
        cursor = token.range.end;
    }

    displayed.push_str(&text[cursor..]);
    (displayed, annotations)
}

/// The value a callback receives for a token.
fn payload_for(kind: MatchKind, source: &str, config: &TaggerConfig) -> String {
    match kind {
        MatchKind::Link => source.to_string(),
        MatchKind::Mention | MatchKind::Hashtag if config.include_sigil_in_payload => {
            source.to_string()
        }
        MatchKind::Mention | MatchKind::Hashtag => {
            let mut chars = source.chars();
            chars.next();
            chars.as_str().to_string()
        }
    }
}

/// How a link is displayed: optionally without protocol, shortened past
/// `max_link_length` chars.
pub(crate) fn link_display<'s>(link: &'s str, config: &TaggerConfig) -> Cow<'s, str> {
    let visible = if config.strip_protocol_for_display {
        strip_protocol(link)
    } else {
        link
    };

    match visible.char_indices().nth(config.max_link_length) {
        Some((cut, _)) => {
            log::debug!(
                "Shortening link of {} chars to {}",
                visible.chars().count(),
                config.max_link_length
            );
            Cow::Owned(format!("{}{}", &visible[..cut], LINK_ELLIPSIS))
        }
        None => Cow::Borrowed(visible),
    }
}

fn strip_protocol(link: &str) -> &str {
    LINK_PROTOCOLS
        .iter()
        .find_map(|protocol| link.strip_prefix(protocol))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(link)
}
