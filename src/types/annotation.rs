// src/types/annotation.rs
//! Annotated text: the displayed string plus the styled ranges laid over it.

use super::Color;
use crate::tagging::ClickListener;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// The token classes the annotator recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// `@handle`
    Mention,
    /// `#topic`
    Hashtag,
    /// `http://` or `https://` link
    Link,
}

impl MatchKind {
    /// Classifies a tag by its leading sigil.
    pub fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '@' => Some(Self::Mention),
            '#' => Some(Self::Hashtag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mention => "mention",
            Self::Hashtag => "hashtag",
            Self::Link => "link",
        }
    }

    /// Mentions and hashtags share delimiting rules and a callback.
    pub fn is_tag(&self) -> bool {
        matches!(self, Self::Mention | Self::Hashtag)
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A colored, optionally clickable range of the displayed text.
///
/// `start` and `end` are char offsets (Unicode scalar values), half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: MatchKind,
    pub start: usize,
    pub end: usize,
    pub color: Color,
    /// Value handed to the click callback. `None` for color-only output.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub payload: Option<String>,
}

impl Annotation {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Output of every annotator entry point.
#[derive(Clone, Serialize)]
pub struct AnnotatedText {
    text: String,
    annotations: Vec<Annotation>,
    #[serde(skip)]
    listener: Option<ClickListener>,
}

impl AnnotatedText {
    /// An empty result with no annotations.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            annotations: Vec::new(),
            listener: None,
        }
    }

    pub(crate) fn new(
        text: String,
        annotations: Vec<Annotation>,
        listener: Option<ClickListener>,
    ) -> Self {
        Self {
            text,
            annotations,
            listener,
        }
    }

    /// The text as it should be displayed (links possibly shortened).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Annotations sorted by start offset, never overlapping.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether activations will reach a callback.
    pub fn is_clickable(&self) -> bool {
        self.listener.is_some()
    }

    /// Finds the annotation covering a char offset of the displayed text.
    pub fn annotation_at(&self, offset: usize) -> Option<&Annotation> {
        let idx = self
            .annotations
            .partition_point(|annotation| annotation.end <= offset);
        self.annotations
            .get(idx)
            .filter(|annotation| annotation.contains(offset))
    }

    /// The displayed substring an annotation covers.
    pub fn slice(&self, annotation: &Annotation) -> &str {
        let mut cursor = ByteCursor::new(&self.text);
        let start = cursor.seek(annotation.start);
        let end = cursor.seek(annotation.end);
        &self.text[start..end]
    }

    /// Reports a user activation at a char offset of the displayed text.
    ///
    /// Invokes the matching callback synchronously, at most once, and
    /// returns the kind of the activated annotation. Returns `None` when
    /// no clickable annotation covers `offset`.
    pub fn activate(&self, offset: usize) -> Option<MatchKind> {
        let listener = self.listener.as_ref()?;
        let annotation = self.annotation_at(offset)?;
        let payload = annotation.payload.as_deref()?;

        if listener.dispatch(annotation.kind, payload) {
            log::debug!("Activated {} '{}'", annotation.kind, payload);
            Some(annotation.kind)
        } else {
            None
        }
    }

    /// Iterates over `(annotation, displayed substring)` pairs.
    pub fn spans(&self) -> impl Iterator<Item = (&Annotation, &str)> {
        self.segments()
            .into_iter()
            .filter_map(|segment| segment.annotation.map(|annotation| (annotation, segment.text)))
    }

    /// Splits the displayed text into consecutive plain and annotated pieces.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::with_capacity(self.annotations.len() * 2 + 1);
        let mut bytes = ByteCursor::new(&self.text);
        let mut cursor = 0;

        for annotation in &self.annotations {
            let start = bytes.seek(annotation.start);
            let end = bytes.seek(annotation.end);
            if cursor < start {
                segments.push(Segment {
                    text: &self.text[cursor..start],
                    annotation: None,
                });
            }
            segments.push(Segment {
                text: &self.text[start..end],
                annotation: Some(annotation),
            });
            cursor = end;
        }

        if cursor < self.text.len() {
            segments.push(Segment {
                text: &self.text[cursor..],
                annotation: None,
            });
        }
        segments
    }
}

/// A piece of displayed text, annotated or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub annotation: Option<&'a Annotation>,
}

impl fmt::Debug for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedText")
            .field("text", &self.text)
            .field("annotations", &self.annotations)
            .field("clickable", &self.listener.is_some())
            .finish()
    }
}

impl PartialEq for AnnotatedText {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.annotations == other.annotations
    }
}

impl fmt::Display for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Maps increasing char offsets to byte offsets in one forward walk.
struct ByteCursor<'a> {
    text: &'a str,
    chars: usize,
    bytes: usize,
}

impl<'a> ByteCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: 0,
            bytes: 0,
        }
    }

    /// Byte index of the `target`-th char, or the text length past the end.
    /// `target` must not be lower than the previous one.
    fn seek(&mut self, target: usize) -> usize {
        let rest = &self.text[self.bytes..];
        let step = rest
            .char_indices()
            .nth(target - self.chars)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        self.bytes += step;
        self.chars = target;
        self.bytes
    }
}
