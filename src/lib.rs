// src/lib.rs
//! tagger — highlights `@mentions`, `#hashtags` and `http(s)` links in plain text.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Annotator** — `Tagger` and the free-function shortcuts below
//! - **Click handling** — `ClickListener`, `OnTagClickListener`
//! - **Output** — `AnnotatedText`, `Annotation`, `MatchKind`, `Color`
//! - **Configuration** — `TaggerConfig`, `DelimiterSet`
//! - **Error handling** — `TaggerError`, `ValidationError`
//! - **Rendering** — `render`, `StyleRenderer` and the bundled renderers
//!
//! ```
//! use tagger::{annotate_with_links, Color, MatchKind};
//!
//! let annotated = annotate_with_links("#rust at https://www.rust-lang.org", Color::BLUE);
//! let kinds: Vec<MatchKind> = annotated.annotations().iter().map(|a| a.kind).collect();
//! assert_eq!(kinds, vec![MatchKind::Hashtag, MatchKind::Link]);
//! ```

mod config;
mod constants;
mod error;
mod formatting;
mod tagging;
mod types;

use once_cell::sync::Lazy;

// --- Error Handling ---
pub use crate::error::{Result, TaggerError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, DelimiterSet, OutputFormat, RunConfig, TaggerConfig};
pub use crate::constants::{DEFAULT_MAX_LINK_LENGTH, LINK_ELLIPSIS};

// --- Annotated Text ---
pub use crate::types::{AnnotatedText, Annotation, Color, MatchKind, Segment};

// --- Annotator ---
pub use crate::tagging::{ClickCallback, ClickListener, OnTagClickListener, Tagger};

// --- Rendering ---
pub use crate::formatting::{
    render, render_with, AnsiRenderer, HtmlRenderer, MarkdownRenderer, StyleRenderer,
};

static DEFAULT_TAGGER: Lazy<Tagger> = Lazy::new(Tagger::default);

/// Colors mentions and hashtags using the default configuration.
pub fn annotate<'a>(text: impl Into<Option<&'a str>>, color: Color) -> AnnotatedText {
    DEFAULT_TAGGER.annotate(text, color)
}

/// Clickable mentions and hashtags using the default configuration.
pub fn annotate_clickable<'a>(
    text: impl Into<Option<&'a str>>,
    color: Color,
    listener: &ClickListener,
) -> Result<AnnotatedText> {
    DEFAULT_TAGGER.annotate_clickable(text, color, listener)
}

/// Colors mentions, hashtags and links using the default configuration.
pub fn annotate_with_links<'a>(text: impl Into<Option<&'a str>>, color: Color) -> AnnotatedText {
    DEFAULT_TAGGER.annotate_with_links(text, color)
}

/// Clickable mentions, hashtags and links using the default configuration.
pub fn annotate_with_links_clickable<'a>(
    text: impl Into<Option<&'a str>>,
    color: Color,
    listener: &ClickListener,
) -> Result<AnnotatedText> {
    DEFAULT_TAGGER.annotate_with_links_clickable(text, color, listener)
}
