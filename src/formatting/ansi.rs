// src/formatting/ansi.rs
use super::StyleRenderer;
use crate::types::Annotation;

/// Colors annotations with 24-bit ANSI foreground escapes.
pub struct AnsiRenderer;

impl StyleRenderer for AnsiRenderer {
    fn plain(&self, text: &str, out: &mut String) {
        out.push_str(text);
    }

    fn styled(&self, text: &str, annotation: &Annotation, out: &mut String) {
        let color = annotation.color;
        out.push_str(&format!(
            "\x1b[38;2;{};{};{}m{}\x1b[39m",
            color.red(),
            color.green(),
            color.blue(),
            text
        ));
    }
}
