// src/tagging/mod.rs
//! Finds mentions, hashtags and links in plain text and annotates them.
//!
//! Annotation runs in two passes. The scanner collects every token range
//! over the source text; the layout pass then emits the displayed text
//! left to right, replacing long links by a shortened form and recording
//! each annotation at its position in the output.
//!
//! Four entry points cover the combinations of "links or not" and
//! "clickable or not". The click-aware ones check the listener up front.

mod layout;
mod listener;
mod patterns;
mod scanner;

pub use listener::{ClickCallback, ClickListener, OnTagClickListener};

use crate::config::{DelimiterSet, TaggerConfig};
use crate::error::TaggerError;
use crate::types::{AnnotatedText, Color};
use layout::{layout, LayoutOptions};
use patterns::{TagPatterns, DEFAULT_PATTERNS};

/// Annotator with a fixed configuration and compiled patterns.
///
/// Cheap to share: it holds no mutable state, and every call returns a
/// fresh [`AnnotatedText`].
#[derive(Debug, Clone)]
pub struct Tagger {
    config: TaggerConfig,
    patterns: TagPatterns,
}

impl Tagger {
    /// Validates `config` and compiles its patterns.
    pub fn new(config: TaggerConfig) -> Result<Self, TaggerError> {
        config.validate()?;
        let patterns = if config.delimiters == DelimiterSet::default() {
            DEFAULT_PATTERNS.clone()
        } else {
            TagPatterns::compile(&config.delimiters)?
        };
        Ok(Self { config, patterns })
    }

    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    /// Colors mentions and hashtags.
    pub fn annotate<'a>(&self, text: impl Into<Option<&'a str>>, color: Color) -> AnnotatedText {
        self.run(text.into(), color, false, None)
    }

    /// Colors mentions and hashtags and makes them clickable.
    ///
    /// Fails if `listener` has no tag callback.
    pub fn annotate_clickable<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        color: Color,
        listener: &ClickListener,
    ) -> Result<AnnotatedText, TaggerError> {
        listener.require(false)?;
        Ok(self.run(text.into(), color, false, Some(listener.clone())))
    }

    /// Colors mentions, hashtags and links, shortening long links.
    pub fn annotate_with_links<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        color: Color,
    ) -> AnnotatedText {
        self.run(text.into(), color, true, None)
    }

    /// Colors mentions, hashtags and links and makes them clickable.
    ///
    /// Link callbacks receive the full URL even when the displayed link is
    /// shortened. Fails if `listener` lacks a tag or a link callback.
    pub fn annotate_with_links_clickable<'a>(
        &self,
        text: impl Into<Option<&'a str>>,
        color: Color,
        listener: &ClickListener,
    ) -> Result<AnnotatedText, TaggerError> {
        listener.require(true)?;
        Ok(self.run(text.into(), color, true, Some(listener.clone())))
    }

    fn run(
        &self,
        text: Option<&str>,
        color: Color,
        with_links: bool,
        listener: Option<ClickListener>,
    ) -> AnnotatedText {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return AnnotatedText::new(String::new(), Vec::new(), listener),
        };

        let matches = scanner::scan(text, &self.patterns, with_links);
        let options = LayoutOptions {
            config: &self.config,
            color,
            with_payloads: listener.is_some(),
        };
        let (displayed, annotations) = layout(text, &matches, &options);

        log::debug!(
            "Annotated {} tokens ({} chars displayed)",
            annotations.len(),
            displayed.chars().count()
        );
        AnnotatedText::new(displayed, annotations, listener)
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self {
            config: TaggerConfig::default(),
            patterns: DEFAULT_PATTERNS.clone(),
        }
    }
}
