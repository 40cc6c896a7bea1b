use super::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display color packed as `0xRRGGBBAA`.
///
/// The value is opaque to the annotator; it is copied onto every
/// annotation and only interpreted by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0x0f, 0x14, 0x19);
    pub const GRAY: Color = Color::rgb(0x65, 0x77, 0x86);
    pub const RED: Color = Color::rgb(0xe0, 0x24, 0x5e);
    pub const ORANGE: Color = Color::rgb(0xf4, 0x5d, 0x22);
    pub const YELLOW: Color = Color::rgb(0xff, 0xad, 0x1f);
    pub const GREEN: Color = Color::rgb(0x17, 0xbf, 0x63);
    pub const BLUE: Color = Color::rgb(0x1d, 0xa1, 0xf2);
    pub const PURPLE: Color = Color::rgb(0x79, 0x4b, 0xc4);
    pub const PINK: Color = Color::rgb(0xf9, 0x18, 0x80);

    /// Named palette accepted by [`Color::from_str`](std::str::FromStr).
    const NAMED: &'static [(&'static str, Color)] = &[
        ("black", Color::BLACK),
        ("gray", Color::GRAY),
        ("red", Color::RED),
        ("orange", Color::ORANGE),
        ("yellow", Color::YELLOW),
        ("green", Color::GREEN),
        ("blue", Color::BLUE),
        ("purple", Color::PURPLE),
        ("pink", Color::PINK),
    ];

    /// Opaque color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Wraps a packed `0xRRGGBBAA` value.
    pub const fn from_rgba_u32(value: u32) -> Self {
        Self(value)
    }

    /// Converts a platform `0xAARRGGBB` integer (as used by most GUI toolkits).
    pub const fn from_argb_u32(value: u32) -> Self {
        Self(value.rotate_left(8))
    }

    pub const fn to_rgba_u32(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn alpha(self) -> u8 {
        self.0 as u8
    }

    /// Name of the palette entry this color equals, if any.
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, color)| *color == self)
            .map(|(name, _)| *name)
    }

    /// CSS-style hex form; the alpha pair is omitted when fully opaque.
    pub fn to_hex(self) -> String {
        if self.alpha() == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
        } else {
            format!("#{:08x}", self.0)
        }
    }

    fn parse_hex(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self((value << 8) | 0xff)),
            8 => Some(Self(value)),
            _ => None,
        }
    }
}

/// Link blue, also the CLI default.
impl Default for Color {
    fn default() -> Self {
        Color::BLUE
    }
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            return Self::parse_hex(digits)
                .ok_or_else(|| ValidationError::InvalidColor(s.to_string()));
        }

        let lowered = trimmed.to_ascii_lowercase();
        Self::NAMED
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, color)| *color)
            .ok_or_else(|| ValidationError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.to_hex()),
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_hex().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
