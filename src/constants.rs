// src/constants.rs
//! Domain constants that define how tokens are delimited and displayed.
//!
//! Each constant is named for the rule it encodes. Reading them should tell
//! you what counts as a tag, where a tag stops, and how long a link may get
//! before it is shortened.

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Sigil that starts a mention.
pub const MENTION_SIGIL: char = '@';

/// Sigil that starts a hashtag.
pub const HASHTAG_SIGIL: char = '#';

/// Characters that end a tag body (whitespace is always a terminator too).
///
/// ASCII punctuation plus the Unicode quotation marks that commonly hug a
/// tag in running text.
pub const DEFAULT_TAG_TERMINATORS: &[char] = &[
    '@', '#', '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '~', '*',
    '+', '-', '/', '\\', '=', '^', '°', '§', '%', '&', '<', '>', '|', '´', '`', '„', '“', '”',
    '‚', '‘', '’', '«', '»', '⹂', '‟',
];

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// Longest link (in chars) displayed without shortening.
pub const DEFAULT_MAX_LINK_LENGTH: usize = 30;

/// Upper bound accepted for a configured maximum link length.
pub const MAX_LINK_LENGTH_LIMIT: usize = 4096;

/// Appended to a shortened link.
pub const LINK_ELLIPSIS: &str = "...";

/// Link prefixes recognized by the scanner, longest first.
pub const LINK_PROTOCOLS: &[&str] = &["https://", "http://"];
