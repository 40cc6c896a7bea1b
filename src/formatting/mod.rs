// src/formatting/mod.rs
//! Renders annotated text for terminals, HTML and Markdown.
//!
//! These renderers stand in for a host rendering layer: they decide what a
//! color or a click payload looks like in a given medium. The annotator
//! itself never depends on them.

mod ansi;
mod markup;

pub use ansi::AnsiRenderer;
pub use markup::{HtmlRenderer, MarkdownRenderer};

use crate::config::OutputFormat;
use crate::error::TaggerError;
use crate::types::{AnnotatedText, Annotation};

/// Turns segments of annotated text into output markup.
pub trait StyleRenderer {
    /// Appends unannotated text.
    fn plain(&self, text: &str, out: &mut String);

    /// Appends the displayed text of one annotation.
    fn styled(&self, text: &str, annotation: &Annotation, out: &mut String);
}

/// Renders every segment of `annotated` with `renderer`.
pub fn render_with<R>(renderer: &R, annotated: &AnnotatedText) -> String
where
    R: StyleRenderer + ?Sized,
{
    let mut out = String::with_capacity(annotated.text().len() * 2);
    for segment in annotated.segments() {
        match segment.annotation {
            Some(annotation) => renderer.styled(segment.text, annotation, &mut out),
            None => renderer.plain(segment.text, &mut out),
        }
    }
    out
}

/// Renders annotated text in the requested output format.
pub fn render(annotated: &AnnotatedText, format: OutputFormat) -> Result<String, TaggerError> {
    let rendered = match format {
        OutputFormat::Ansi => render_with(&AnsiRenderer, annotated),
        OutputFormat::Html => render_with(&HtmlRenderer, annotated),
        OutputFormat::Markdown => render_with(&MarkdownRenderer, annotated),
        OutputFormat::Json => serde_json::to_string_pretty(annotated)?,
    };
    log::debug!("Rendered {} bytes as {:?}", rendered.len(), format);
    Ok(rendered)
}
