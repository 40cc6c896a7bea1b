// src/formatting/markup.rs
//! Markdown and HTML renderers.

use super::StyleRenderer;
use crate::types::{Annotation, MatchKind};

/// Renderer for annotations to Markdown.
///
/// Tags become bold; links become inline links to their full URL when a
/// payload is present. Markdown has no color, so it is dropped.
pub struct MarkdownRenderer;

impl StyleRenderer for MarkdownRenderer {
    fn plain(&self, text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn styled(&self, text: &str, annotation: &Annotation, out: &mut String) {
        let rendered = match (annotation.kind, annotation.payload.as_deref()) {
            (MatchKind::Link, Some(url)) => format!("[{}]({})", text, url),
            (MatchKind::Link, None) => format!("<{}>", text),
            (MatchKind::Mention | MatchKind::Hashtag, _) => format!("**{}**", text),
        };
        out.push_str(&rendered);
    }
}

/// Renderer for annotations to HTML.
///
/// Tags become colored `<span>`s carrying their payload in a data
/// attribute; links with a payload become `<a>` elements.
pub struct HtmlRenderer;

impl StyleRenderer for HtmlRenderer {
    fn plain(&self, text: &str, out: &mut String) {
        out.push_str(&html_escape(text));
    }

    fn styled(&self, text: &str, annotation: &Annotation, out: &mut String) {
        let class = annotation.kind.as_str();
        let color = annotation.color.to_hex();
        let content = html_escape(text);

        let rendered = match (annotation.kind, annotation.payload.as_deref()) {
            (MatchKind::Link, Some(url)) => format!(
                "<a class=\"{}\" href=\"{}\" style=\"color: {}\">{}</a>",
                class,
                html_escape(url),
                color,
                content
            ),
            (_, Some(payload)) => format!(
                "<span class=\"{}\" data-payload=\"{}\" style=\"color: {}\">{}</span>",
                class,
                html_escape(payload),
                color,
                content
            ),
            (_, None) => format!(
                "<span class=\"{}\" style=\"color: {}\">{}</span>",
                class, color, content
            ),
        };
        out.push_str(&rendered);
    }
}

/// Basic HTML escaping.
fn html_escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '&' => "&amp;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
