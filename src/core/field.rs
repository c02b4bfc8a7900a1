use std::fmt;

use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryKey, EntryValue};
use super::repeated::Repeated;

/// Tag names of every field kind the format knows.
pub mod anchor {
    pub const TITLE_X: &str = "title_x";
    pub const TITLE_Y: &str = "title_y";
    pub const RANGE_X: &str = "range_x";
    pub const RANGE_Y: &str = "range_y";
    pub const LABEL_X: &str = "label_x";
    pub const LABEL_Y: &str = "label_y";
    pub const MARKER: &str = "marker";
    pub const LINE: &str = "line";
    pub const LEGEND_ATTRIBUTES: &str = "legend_attributes";
    pub const OPTION: &str = "option";
    pub const HEADER: &str = "header";
    pub const NAME: &str = "name";
}

/// Attribute bundle made of a fixed, ordered set of entries.
///
/// Implementors declare their entries through [`Field::keys`]; the codec emits
/// them in that order and ignores keys a field does not declare.
pub trait Field: fmt::Debug {
    fn keys(&self) -> &'static [EntryKey];

    fn entry(&self, key: EntryKey) -> Option<EntryValue>;

    /// Stores a decoded value. Returns `false` when the key/value pair does not
    /// belong to this field, in which case nothing changes.
    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool;

    /// Silent fields live in memory only and are never written or read.
    fn is_silent(&self) -> bool {
        false
    }

    fn entries(&self) -> Vec<Entry> {
        self.keys()
            .iter()
            .filter_map(|&key| self.entry(key).map(|value| Entry::new(key, value)))
            .collect()
    }
}

/// Growable list of field instances, seen through the [`Field`] interface.
pub trait FieldList: fmt::Debug {
    fn add_field(&mut self) -> &mut dyn Field;

    fn fields(&self) -> Vec<&dyn Field>;
}

impl<T: Field + Default> FieldList for Repeated<T> {
    fn add_field(&mut self) -> &mut dyn Field {
        self.add()
    }

    fn fields(&self) -> Vec<&dyn Field> {
        self.iter().map(|field| field as &dyn Field).collect()
    }
}

/// Axis interval: margins for a pad, visible range for a frame, NDC box for
/// legends and text boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

impl Field for Range {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::Low, EntryKey::High]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::Low => Some(EntryValue::Number(self.low)),
            EntryKey::High => Some(EntryValue::Number(self.high)),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::Low, EntryValue::Number(v)) => self.low = v,
            (EntryKey::High, EntryValue::Number(v)) => self.high = v,
            _ => return false,
        }
        true
    }
}

/// Axis tick-label attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Label {
    pub size: f64,
    pub offset: f64,
}

impl Field for Label {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::Size, EntryKey::Offset]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::Size => Some(EntryValue::Number(self.size)),
            EntryKey::Offset => Some(EntryValue::Number(self.offset)),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::Size, EntryValue::Number(v)) => self.size = v,
            (EntryKey::Offset, EntryValue::Number(v)) => self.offset = v,
            _ => return false,
        }
        true
    }
}

/// Axis title.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Title {
    pub size: f64,
    pub offset: f64,
    pub text: String,
}

impl Field for Title {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::Size, EntryKey::Offset, EntryKey::UserText]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::Size => Some(EntryValue::Number(self.size)),
            EntryKey::Offset => Some(EntryValue::Number(self.offset)),
            EntryKey::UserText => Some(EntryValue::Text(self.text.clone())),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::Size, EntryValue::Number(v)) => self.size = v,
            (EntryKey::Offset, EntryValue::Number(v)) => self.offset = v,
            (EntryKey::UserText, EntryValue::Text(text)) => self.text = text,
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    pub size: f64,
    pub style: i32,
    pub color: i32,
}

impl Field for Marker {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::Size, EntryKey::Style, EntryKey::Color]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::Size => Some(EntryValue::Number(self.size)),
            EntryKey::Style => Some(EntryValue::Integer(self.style)),
            EntryKey::Color => Some(EntryValue::Integer(self.color)),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::Size, EntryValue::Number(v)) => self.size = v,
            (EntryKey::Style, EntryValue::Integer(v)) => self.style = v,
            (EntryKey::Color, EntryValue::Integer(v)) => self.color = v,
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    pub width: i32,
    pub style: i32,
    pub color: i32,
}

impl Field for Line {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::Width, EntryKey::Style, EntryKey::Color]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::Width => Some(EntryValue::Integer(self.width)),
            EntryKey::Style => Some(EntryValue::Integer(self.style)),
            EntryKey::Color => Some(EntryValue::Integer(self.color)),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::Width, EntryValue::Integer(v)) => self.width = v,
            (EntryKey::Style, EntryValue::Integer(v)) => self.style = v,
            (EntryKey::Color, EntryValue::Integer(v)) => self.color = v,
            _ => return false,
        }
        true
    }
}

/// How a series shows up in the legend: its label and legend draw option.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegendAttributes {
    pub label: String,
    pub option: String,
}

impl Field for LegendAttributes {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::UserText, EntryKey::PlainText]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::UserText => Some(EntryValue::Text(self.label.clone())),
            EntryKey::PlainText => Some(EntryValue::Text(self.option.clone())),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::UserText, EntryValue::Text(text)) => self.label = text,
            (EntryKey::PlainText, EntryValue::Text(text)) => self.option = text,
            _ => return false,
        }
        true
    }
}

/// Draw option string of a series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrawOption {
    pub option: String,
}

impl DrawOption {
    #[must_use]
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
        }
    }
}

impl Field for DrawOption {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::PlainText]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::PlainText => Some(EntryValue::Text(self.option.clone())),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::PlainText, EntryValue::Text(text)) => self.option = text,
            _ => return false,
        }
        true
    }
}

/// Text line with size and color: a legend header or one line of a text box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    pub text: String,
    pub size: f64,
    pub color: i32,
}

impl Header {
    #[must_use]
    pub fn new(text: impl Into<String>, size: f64, color: i32) -> Self {
        Self {
            text: text.into(),
            size,
            color,
        }
    }
}

impl Field for Header {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::UserText, EntryKey::Size, EntryKey::Color]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::UserText => Some(EntryValue::Text(self.text.clone())),
            EntryKey::Size => Some(EntryValue::Number(self.size)),
            EntryKey::Color => Some(EntryValue::Integer(self.color)),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::UserText, EntryValue::Text(text)) => self.text = text,
            (EntryKey::Size, EntryValue::Number(v)) => self.size = v,
            (EntryKey::Color, EntryValue::Integer(v)) => self.color = v,
            _ => return false,
        }
        true
    }
}

/// Identifying name of a series, synchronized only through the rendering
/// objects. Silent: never part of the text document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesName {
    pub name: String,
}

impl Field for SeriesName {
    fn keys(&self) -> &'static [EntryKey] {
        &[EntryKey::PlainText]
    }

    fn entry(&self, key: EntryKey) -> Option<EntryValue> {
        match key {
            EntryKey::PlainText => Some(EntryValue::Text(self.name.clone())),
            _ => None,
        }
    }

    fn set_entry(&mut self, key: EntryKey, value: EntryValue) -> bool {
        match (key, value) {
            (EntryKey::PlainText, EntryValue::Text(text)) => self.name = text,
            _ => return false,
        }
        true
    }

    fn is_silent(&self) -> bool {
        true
    }
}
