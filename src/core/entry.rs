use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between an entry name and its value.
pub const ENTRY_ASSIGN: &str = ":=";

/// Marker after which a verbatim user-text span sits in a document.
pub const USER_TEXT_MARKER: &str = "user_text:=";

/// Opening delimiter of a verbatim user-text value.
pub const VERBATIM_OPEN: char = '[';
/// Closing delimiter of a verbatim user-text value.
pub const VERBATIM_CLOSE: char = ']';

/// Name of one primitive value inside a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKey {
    Size,
    Offset,
    Low,
    High,
    Color,
    Style,
    Width,
    UserText,
    PlainText,
}

/// How an entry value is written and read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Double formatted with the shortest round-tripping decimal form.
    Number,
    /// Integer attribute (style, color, width). Decoded as a double and truncated.
    Integer,
    /// Raw token, no escaping and no whitespace.
    PlainText,
    /// Free-form text wrapped in `[` `]` and kept byte-for-byte.
    UserText,
}

impl EntryKey {
    pub const ALL: [Self; 9] = [
        Self::Size,
        Self::Offset,
        Self::Low,
        Self::High,
        Self::Color,
        Self::Style,
        Self::Width,
        Self::UserText,
        Self::PlainText,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Offset => "offset",
            Self::Low => "low",
            Self::High => "high",
            Self::Color => "color",
            Self::Style => "style",
            Self::Width => "width",
            Self::UserText => "user_text",
            Self::PlainText => "plain_text",
        }
    }

    /// Exact, case-sensitive lookup of an entry name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    #[must_use]
    pub const fn kind(self) -> EntryKind {
        match self {
            Self::Size | Self::Offset | Self::Low | Self::High => EntryKind::Number,
            Self::Color | Self::Style | Self::Width => EntryKind::Integer,
            Self::UserText => EntryKind::UserText,
            Self::PlainText => EntryKind::PlainText,
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryValue {
    Number(f64),
    Integer(i32),
    Text(String),
}

/// One `name:=value` token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: EntryKey,
    pub value: EntryValue,
}

impl Entry {
    #[must_use]
    pub fn new(key: EntryKey, value: EntryValue) -> Self {
        Self { key, value }
    }

    /// Renders the entry as it appears inside a field's entry list.
    ///
    /// User text is the only value wrapped in `[` `]`; that wrapping marks the
    /// span the decoder protects from whitespace compaction.
    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{ENTRY_ASSIGN}", self.key)?;
        match (&self.value, self.key.kind()) {
            (EntryValue::Text(text), EntryKind::UserText) => {
                write!(f, "{VERBATIM_OPEN}{text}{VERBATIM_CLOSE}")
            }
            (EntryValue::Text(text), _) => f.write_str(text),
            (EntryValue::Number(value), _) => write!(f, "{value}"),
            (EntryValue::Integer(value), _) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, EntryKey, EntryKind, EntryValue};

    #[test]
    fn numbers_use_shortest_decimal_form() {
        assert_eq!(
            Entry::new(EntryKey::Low, EntryValue::Number(0.1)).encode(),
            "low:=0.1"
        );
        assert_eq!(
            Entry::new(EntryKey::Size, EntryValue::Number(2.0)).encode(),
            "size:=2"
        );
        assert_eq!(
            Entry::new(EntryKey::Color, EntryValue::Integer(632)).encode(),
            "color:=632"
        );
    }

    #[test]
    fn only_user_text_is_bracketed() {
        let user = Entry::new(EntryKey::UserText, EntryValue::Text("a; b".to_owned()));
        let plain = Entry::new(EntryKey::PlainText, EntryValue::Text("hist".to_owned()));
        assert_eq!(user.encode(), "user_text:=[a; b]");
        assert_eq!(plain.encode(), "plain_text:=hist");
    }

    #[test]
    fn name_lookup_is_exact() {
        assert_eq!(EntryKey::from_name("offset"), Some(EntryKey::Offset));
        assert_eq!(EntryKey::from_name("Offset"), None);
        assert_eq!(EntryKey::from_name("colour"), None);
        assert_eq!(EntryKey::Width.kind(), EntryKind::Integer);
    }

    #[test]
    fn user_text_marker_matches_key_name() {
        assert_eq!(
            super::USER_TEXT_MARKER,
            format!("{}{}", EntryKey::UserText, super::ENTRY_ASSIGN)
        );
    }
}
