// src/config.rs
use crate::constants::{
    DEFAULT_MAX_LINK_LENGTH, DEFAULT_TAG_TERMINATORS, HASHTAG_SIGIL, MAX_LINK_LENGTH_LIMIT,
    MENTION_SIGIL,
};
use crate::error::TaggerError;
use crate::types::{Color, ValidationError};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Deserializer, Serialize};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Text to annotate (reads stdin when omitted)
    pub text: Option<String>,

    /// Highlight color: a palette name (e.g. "blue") or "#RRGGBB[AA]"
    #[arg(short, long, default_value = "blue")]
    pub color: String,

    /// Also annotate http(s) links
    #[arg(short, long, default_value_t = false)]
    pub links: bool,

    /// Links longer than this many characters are shortened with "..."
    #[arg(long, default_value_t = DEFAULT_MAX_LINK_LENGTH)]
    pub max_link_length: usize,

    /// Hide the http:// or https:// prefix of displayed links
    #[arg(long, default_value_t = false)]
    pub strip_protocol: bool,

    /// Keep the leading '@' or '#' in tag payloads
    #[arg(long, default_value_t = false)]
    pub include_sigil: bool,

    /// Additional characters that end a tag
    #[arg(long)]
    pub terminators: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ansi)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// How the CLI renders annotated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 24-bit colored terminal output
    Ansi,
    /// HTML fragment
    Html,
    /// Markdown with bold tags and inline links
    Markdown,
    /// Displayed text and annotations as JSON
    Json,
}

/// Characters that terminate a tag body, in addition to whitespace.
///
/// Kept sorted and deduplicated; deserialized lists are normalized too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DelimiterSet(Vec<char>);

impl DelimiterSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: Vec<char> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self(chars)
    }

    /// Adds terminators to the set.
    pub fn with(mut self, extra: impl IntoIterator<Item = char>) -> Self {
        self.0.extend(extra);
        Self::new(self.0)
    }

    /// Removes terminators from the set.
    pub fn without(self, removed: impl IntoIterator<Item = char>) -> Self {
        let removed: Vec<char> = removed.into_iter().collect();
        Self::new(self.0.into_iter().filter(|c| !removed.contains(c)))
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.binary_search(&c).is_ok()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    /// Both sigils must terminate a tag, otherwise `@a@b` would be one token.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for sigil in [MENTION_SIGIL, HASHTAG_SIGIL] {
            if !self.contains(sigil) {
                return Err(ValidationError::MissingSigil(sigil));
            }
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for DelimiterSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<char>::deserialize(deserializer).map(Self::new)
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_TERMINATORS.iter().copied())
    }
}

/// Annotator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Longest link, in chars, displayed without shortening.
    pub max_link_length: usize,
    /// Drop `http://` / `https://` from displayed links. Payloads keep it.
    pub strip_protocol_for_display: bool,
    /// Keep the `@`/`#` in payloads handed to the tag callback.
    pub include_sigil_in_payload: bool,
    pub delimiters: DelimiterSet,
}

impl TaggerConfig {
    pub fn with_max_link_length(mut self, max_link_length: usize) -> Self {
        self.max_link_length = max_link_length;
        self
    }

    pub fn with_protocol_stripped(mut self, strip: bool) -> Self {
        self.strip_protocol_for_display = strip;
        self
    }

    pub fn with_sigil_in_payload(mut self, include: bool) -> Self {
        self.include_sigil_in_payload = include;
        self
    }

    pub fn with_delimiters(mut self, delimiters: DelimiterSet) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Checks every field; called by `Tagger::new`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_link_length == 0 || self.max_link_length > MAX_LINK_LENGTH_LIMIT {
            return Err(ValidationError::OutOfBounds {
                field: "max_link_length",
                value: self.max_link_length,
                min: 1,
                max: MAX_LINK_LENGTH_LIMIT,
            });
        }
        self.delimiters.validate()
    }
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            max_link_length: DEFAULT_MAX_LINK_LENGTH,
            strip_protocol_for_display: false,
            include_sigil_in_payload: false,
            delimiters: DelimiterSet::default(),
        }
    }
}

/// Resolved CLI configuration, validated and ready to run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub tagger: TaggerConfig,
    pub color: Color,
    pub links: bool,
    pub format: OutputFormat,
    pub verbose: bool,
    pub text: Option<String>,
}

impl RunConfig {
    /// Resolves a complete run configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, TaggerError> {
        let color: Color = cli.color.parse()?;

        let mut delimiters = DelimiterSet::default();
        if let Some(extra) = &cli.terminators {
            delimiters = delimiters.with(extra.chars().filter(|c| !c.is_whitespace()));
        }

        let tagger = TaggerConfig::default()
            .with_max_link_length(cli.max_link_length)
            .with_protocol_stripped(cli.strip_protocol)
            .with_sigil_in_payload(cli.include_sigil)
            .with_delimiters(delimiters);
        tagger.validate()?;

        Ok(RunConfig {
            tagger,
            color,
            links: cli.links,
            format: cli.format,
            verbose: cli.verbose,
            text: cli.text,
        })
    }
}
