use serde::{Deserialize, Serialize};

/// Title of the histogram that carries the axis frame of a canvas.
pub const FRAME_HISTOGRAM_NAME: &str = "frame";

/// Fractional canvas margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

/// Box in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NdcBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl NdcBox {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    pub title_size: f64,
    pub title_offset: f64,
    pub first: f64,
    pub last: f64,
    pub label_size: f64,
    pub label_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkerAttributes {
    pub size: f64,
    pub style: i32,
    pub color: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineAttributes {
    pub width: i32,
    pub style: i32,
    pub color: i32,
}

/// One drawn histogram with the options it was drawn with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Histogram {
    pub name: String,
    pub title: String,
    pub draw_option: String,
    pub marker: MarkerAttributes,
    pub line: LineAttributes,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Histogram {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Empty frame histogram, named and titled [`FRAME_HISTOGRAM_NAME`].
    #[must_use]
    pub fn frame() -> Self {
        Self {
            name: FRAME_HISTOGRAM_NAME.to_owned(),
            title: FRAME_HISTOGRAM_NAME.to_owned(),
            ..Self::default()
        }
    }

    /// Frames are recognized by title; the name is free.
    #[must_use]
    pub fn is_frame(&self) -> bool {
        self.title == FRAME_HISTOGRAM_NAME
    }
}

/// Legend row pointing at a histogram by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegendEntry {
    pub object_name: Option<String>,
    pub label: String,
    pub option: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendBox {
    pub header: String,
    pub text_size: f64,
    pub text_color: i32,
    pub position: NdcBox,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub size: f64,
    pub color: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaveTextBox {
    pub position: NdcBox,
    pub lines: Vec<TextLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Histogram(Histogram),
    Legend(LegendBox),
    PaveText(PaveTextBox),
}

/// Plain-data stand-in for a drawn canvas: margins plus primitives in draw
/// order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Canvas {
    pub margins: Margins,
    pub primitives: Vec<Primitive>,
}

impl Canvas {
    #[must_use]
    pub fn new(margins: Margins) -> Self {
        Self {
            margins,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn histograms(&self) -> impl Iterator<Item = &Histogram> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Histogram(histogram) => Some(histogram),
            _ => None,
        })
    }

    pub fn histograms_mut(&mut self) -> impl Iterator<Item = &mut Histogram> {
        self.primitives.iter_mut().filter_map(|primitive| match primitive {
            Primitive::Histogram(histogram) => Some(histogram),
            _ => None,
        })
    }

    /// Histograms that are data series, in draw order: everything except the
    /// frame histogram.
    pub fn series_histograms(&self) -> impl Iterator<Item = &Histogram> {
        self.histograms().filter(|histogram| !histogram.is_frame())
    }

    #[must_use]
    pub fn legend(&self) -> Option<&LegendBox> {
        self.primitives.iter().find_map(|primitive| match primitive {
            Primitive::Legend(legend) => Some(legend),
            _ => None,
        })
    }

    pub fn pave_texts(&self) -> impl Iterator<Item = &PaveTextBox> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::PaveText(text) => Some(text),
            _ => None,
        })
    }
}
