use serde::Serialize;
use std::fmt;

/// Output length categories for a derived hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Short,
    Small,
    Medium,
    Big,
    Long,
    Huge,
    Full,
}

impl Size {
    pub const ALL: [Size; 7] = [
        Size::Short,
        Size::Small,
        Size::Medium,
        Size::Big,
        Size::Long,
        Size::Huge,
        Size::Full,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Size::Short => "short",
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Big => "big",
            Size::Long => "long",
            Size::Huge => "huge",
            Size::Full => "full",
        }
    }

    /// Character limit, `None` for no truncation.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Size::Short => Some(16),
            Size::Small => Some(32),
            Size::Medium => Some(64),
            Size::Big => Some(128),
            Size::Long => Some(236),
            Size::Huge => Some(472),
            Size::Full => None,
        }
    }

    pub fn truncate<'a>(&self, hash: &'a str) -> &'a str {
        match self.limit() {
            // base64 output is ASCII, so byte and char offsets agree
            Some(limit) if limit < hash.len() => &hash[..limit],
            _ => hash,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
