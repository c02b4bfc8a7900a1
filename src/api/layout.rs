use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use crate::core::{AnnotationBox, Element, Frame, Legend, Pad, Series};
use crate::error::{ChartStyleError, ChartStyleResult};

/// Which optional top-level elements a document or canvas carries.
///
/// Bit numbering: annotation boxes = bit 0, legend = bit 1, series = bit 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PresenceFlags(u8);

impl PresenceFlags {
    pub const EMPTY: Self = Self(0);
    pub const ANNOTATION: Self = Self(1 << 0);
    pub const LEGEND: Self = Self(1 << 1);
    pub const SERIES: Self = Self(1 << 2);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flag raised by a top-level block with this anchor, if any.
    #[must_use]
    pub fn for_anchor(anchor: &str) -> Option<Self> {
        match anchor {
            a if a == Series::ANCHOR => Some(Self::SERIES),
            a if a == Legend::ANCHOR => Some(Self::LEGEND),
            a if a == AnnotationBox::ANCHOR => Some(Self::ANNOTATION),
            _ => None,
        }
    }
}

impl BitOr for PresenceFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PresenceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Display for PresenceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (Self::SERIES, "series"),
            (Self::LEGEND, "legend"),
            (Self::ANNOTATION, "annotation"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();
        write!(f, "{{{}}} (0b{:03b})", names.join(", "), self.0)
    }
}

/// One top-level section of a chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Pad,
    Frame,
    Series,
    Legend,
    AnnotationBox,
}

impl ElementKind {
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Pad => Pad::ANCHOR,
            Self::Frame => Frame::ANCHOR,
            Self::Series => Series::ANCHOR,
            Self::Legend => Legend::ANCHOR,
            Self::AnnotationBox => AnnotationBox::ANCHOR,
        }
    }

    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Series | Self::AnnotationBox)
    }
}

/// Closed set of supported chart layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Series,
    SeriesLegend,
    SeriesAnnotation,
    Full,
}

const SERIES_ELEMENTS: &[ElementKind] =
    &[ElementKind::Pad, ElementKind::Frame, ElementKind::Series];
const SERIES_LEGEND_ELEMENTS: &[ElementKind] = &[
    ElementKind::Pad,
    ElementKind::Frame,
    ElementKind::Series,
    ElementKind::Legend,
];
const SERIES_ANNOTATION_ELEMENTS: &[ElementKind] = &[
    ElementKind::Pad,
    ElementKind::Frame,
    ElementKind::Series,
    ElementKind::AnnotationBox,
];
const FULL_ELEMENTS: &[ElementKind] = &[
    ElementKind::Pad,
    ElementKind::Frame,
    ElementKind::Series,
    ElementKind::Legend,
    ElementKind::AnnotationBox,
];

impl Layout {
    pub const ALL: [Self; 4] = [
        Self::Series,
        Self::SeriesLegend,
        Self::SeriesAnnotation,
        Self::Full,
    ];

    /// Element tuple of the layout, in encode and decode order.
    #[must_use]
    pub const fn elements(self) -> &'static [ElementKind] {
        match self {
            Self::Series => SERIES_ELEMENTS,
            Self::SeriesLegend => SERIES_LEGEND_ELEMENTS,
            Self::SeriesAnnotation => SERIES_ANNOTATION_ELEMENTS,
            Self::Full => FULL_ELEMENTS,
        }
    }

    #[must_use]
    pub fn flags(self) -> PresenceFlags {
        match self {
            Self::Series => PresenceFlags::SERIES,
            Self::SeriesLegend => PresenceFlags::SERIES | PresenceFlags::LEGEND,
            Self::SeriesAnnotation => PresenceFlags::SERIES | PresenceFlags::ANNOTATION,
            Self::Full => {
                PresenceFlags::SERIES | PresenceFlags::LEGEND | PresenceFlags::ANNOTATION
            }
        }
    }

    pub fn from_flags(flags: PresenceFlags) -> ChartStyleResult<Self> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.flags() == flags)
            .ok_or(ChartStyleError::UnsupportedLayout { flags })
    }

    #[must_use]
    pub fn has_legend(self) -> bool {
        self.flags().contains(PresenceFlags::LEGEND)
    }

    #[must_use]
    pub fn has_annotations(self) -> bool {
        self.flags().contains(PresenceFlags::ANNOTATION)
    }
}
