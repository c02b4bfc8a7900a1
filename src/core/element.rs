use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::{
    DrawOption, Field, FieldList, Header, Label, LegendAttributes, Line, Marker, Range,
    SeriesName, Title, anchor,
};
use super::repeated::Repeated;

/// Read-only view of one position in an element's field tuple.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Single {
        anchor: &'static str,
        field: &'a dyn Field,
    },
    Multiple {
        anchor: &'static str,
        fields: &'a dyn FieldList,
    },
}

/// Mutable view of one position in an element's field tuple.
#[derive(Debug)]
pub enum FieldSlotMut<'a> {
    Single {
        anchor: &'static str,
        field: &'a mut dyn Field,
    },
    Multiple {
        anchor: &'static str,
        fields: &'a mut dyn FieldList,
    },
}

impl FieldSlot<'_> {
    #[must_use]
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Single { anchor, .. } | Self::Multiple { anchor, .. } => *anchor,
        }
    }
}

/// Tag-wrapped group of fields for one chart section.
///
/// The tuple returned by `fields`/`fields_mut` is fixed per element kind and
/// sets both the encode order and the decode claim order.
pub trait Element: Default + fmt::Debug {
    const ANCHOR: &'static str;

    fn fields(&self) -> Vec<FieldSlot<'_>>;

    fn fields_mut(&mut self) -> Vec<FieldSlotMut<'_>>;
}

/// Canvas margins: x holds (left, right), y holds (bottom, top).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pad {
    pub range_x: Range,
    pub range_y: Range,
}

impl Element for Pad {
    const ANCHOR: &'static str = "pad";

    fn fields(&self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::Single {
                anchor: anchor::RANGE_X,
                field: &self.range_x,
            },
            FieldSlot::Single {
                anchor: anchor::RANGE_Y,
                field: &self.range_y,
            },
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldSlotMut<'_>> {
        vec![
            FieldSlotMut::Single {
                anchor: anchor::RANGE_X,
                field: &mut self.range_x,
            },
            FieldSlotMut::Single {
                anchor: anchor::RANGE_Y,
                field: &mut self.range_y,
            },
        ]
    }
}

/// Axis frame of a one-dimensional plot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub title_x: Title,
    pub range_x: Range,
    pub label_x: Label,
    pub title_y: Title,
    pub range_y: Range,
    pub label_y: Label,
}

impl Element for Frame {
    const ANCHOR: &'static str = "frame1d";

    fn fields(&self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::Single {
                anchor: anchor::TITLE_X,
                field: &self.title_x,
            },
            FieldSlot::Single {
                anchor: anchor::RANGE_X,
                field: &self.range_x,
            },
            FieldSlot::Single {
                anchor: anchor::LABEL_X,
                field: &self.label_x,
            },
            FieldSlot::Single {
                anchor: anchor::TITLE_Y,
                field: &self.title_y,
            },
            FieldSlot::Single {
                anchor: anchor::RANGE_Y,
                field: &self.range_y,
            },
            FieldSlot::Single {
                anchor: anchor::LABEL_Y,
                field: &self.label_y,
            },
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldSlotMut<'_>> {
        vec![
            FieldSlotMut::Single {
                anchor: anchor::TITLE_X,
                field: &mut self.title_x,
            },
            FieldSlotMut::Single {
                anchor: anchor::RANGE_X,
                field: &mut self.range_x,
            },
            FieldSlotMut::Single {
                anchor: anchor::LABEL_X,
                field: &mut self.label_x,
            },
            FieldSlotMut::Single {
                anchor: anchor::TITLE_Y,
                field: &mut self.title_y,
            },
            FieldSlotMut::Single {
                anchor: anchor::RANGE_Y,
                field: &mut self.range_y,
            },
            FieldSlotMut::Single {
                anchor: anchor::LABEL_Y,
                field: &mut self.label_y,
            },
        ]
    }
}

/// Style of one drawn data series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    pub name: SeriesName,
    pub legend: LegendAttributes,
    pub option: DrawOption,
    pub marker: Marker,
    pub line: Line,
}

impl Series {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: SeriesName { name: name.into() },
            ..Self::default()
        }
    }
}

impl Element for Series {
    const ANCHOR: &'static str = "hist1d";

    fn fields(&self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::Single {
                anchor: anchor::NAME,
                field: &self.name,
            },
            FieldSlot::Single {
                anchor: anchor::LEGEND_ATTRIBUTES,
                field: &self.legend,
            },
            FieldSlot::Single {
                anchor: anchor::OPTION,
                field: &self.option,
            },
            FieldSlot::Single {
                anchor: anchor::MARKER,
                field: &self.marker,
            },
            FieldSlot::Single {
                anchor: anchor::LINE,
                field: &self.line,
            },
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldSlotMut<'_>> {
        vec![
            FieldSlotMut::Single {
                anchor: anchor::NAME,
                field: &mut self.name,
            },
            FieldSlotMut::Single {
                anchor: anchor::LEGEND_ATTRIBUTES,
                field: &mut self.legend,
            },
            FieldSlotMut::Single {
                anchor: anchor::OPTION,
                field: &mut self.option,
            },
            FieldSlotMut::Single {
                anchor: anchor::MARKER,
                field: &mut self.marker,
            },
            FieldSlotMut::Single {
                anchor: anchor::LINE,
                field: &mut self.line,
            },
        ]
    }
}

/// Legend box: header text plus its NDC placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legend {
    pub header: Header,
    pub range_x: Range,
    pub range_y: Range,
}

impl Element for Legend {
    const ANCHOR: &'static str = "legend";

    fn fields(&self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::Single {
                anchor: anchor::HEADER,
                field: &self.header,
            },
            FieldSlot::Single {
                anchor: anchor::RANGE_X,
                field: &self.range_x,
            },
            FieldSlot::Single {
                anchor: anchor::RANGE_Y,
                field: &self.range_y,
            },
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldSlotMut<'_>> {
        vec![
            FieldSlotMut::Single {
                anchor: anchor::HEADER,
                field: &mut self.header,
            },
            FieldSlotMut::Single {
                anchor: anchor::RANGE_X,
                field: &mut self.range_x,
            },
            FieldSlotMut::Single {
                anchor: anchor::RANGE_Y,
                field: &mut self.range_y,
            },
        ]
    }
}

/// Free-standing annotation text box with one header per text line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationBox {
    pub headers: Repeated<Header>,
    pub range_x: Range,
    pub range_y: Range,
}

impl Element for AnnotationBox {
    const ANCHOR: &'static str = "pave_text";

    fn fields(&self) -> Vec<FieldSlot<'_>> {
        vec![
            FieldSlot::Multiple {
                anchor: anchor::HEADER,
                fields: &self.headers,
            },
            FieldSlot::Single {
                anchor: anchor::RANGE_X,
                field: &self.range_x,
            },
            FieldSlot::Single {
                anchor: anchor::RANGE_Y,
                field: &self.range_y,
            },
        ]
    }

    fn fields_mut(&mut self) -> Vec<FieldSlotMut<'_>> {
        vec![
            FieldSlotMut::Multiple {
                anchor: anchor::HEADER,
                fields: &mut self.headers,
            },
            FieldSlotMut::Single {
                anchor: anchor::RANGE_X,
                field: &mut self.range_x,
            },
            FieldSlotMut::Single {
                anchor: anchor::RANGE_Y,
                field: &mut self.range_y,
            },
        ]
    }
}
