use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec;
use crate::core::{AnnotationBox, Frame, Legend, Pad, Repeated, Series};
use crate::error::{ChartStyleError, ChartStyleResult};

use super::{CodecConfig, Layout};

/// Styling configuration of one composite chart.
///
/// Owns every element of its layout. Elements the layout does not include
/// are unreachable through the accessors and never encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfiguration {
    pub(crate) layout: Layout,
    pub(crate) pad: Pad,
    pub(crate) frame: Frame,
    pub(crate) series: Repeated<Series>,
    pub(crate) legend: Legend,
    pub(crate) annotations: Repeated<AnnotationBox>,
}

impl ChartConfiguration {
    /// Creates an empty configuration: default fields, empty repeatable containers.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            pad: Pad::default(),
            frame: Frame::default(),
            series: Repeated::new(),
            legend: Legend::default(),
            annotations: Repeated::new(),
        }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn pad(&self) -> &Pad {
        &self.pad
    }

    pub fn pad_mut(&mut self) -> &mut Pad {
        &mut self.pad
    }

    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    #[must_use]
    pub fn series(&self) -> &Repeated<Series> {
        &self.series
    }

    pub fn series_mut(&mut self) -> &mut Repeated<Series> {
        &mut self.series
    }

    pub fn add_series(&mut self) -> &mut Series {
        self.series.add()
    }

    /// Legend element, present only in layouts that carry one.
    #[must_use]
    pub fn legend(&self) -> Option<&Legend> {
        self.layout.has_legend().then_some(&self.legend)
    }

    pub fn legend_mut(&mut self) -> Option<&mut Legend> {
        if self.layout.has_legend() {
            Some(&mut self.legend)
        } else {
            None
        }
    }

    /// Annotation boxes, present only in layouts that carry them.
    #[must_use]
    pub fn annotations(&self) -> Option<&Repeated<AnnotationBox>> {
        self.layout.has_annotations().then_some(&self.annotations)
    }

    pub fn annotations_mut(&mut self) -> Option<&mut Repeated<AnnotationBox>> {
        if self.layout.has_annotations() {
            Some(&mut self.annotations)
        } else {
            None
        }
    }

    /// Appends an annotation box, or `None` when the layout has no annotations.
    pub fn add_annotation(&mut self) -> Option<&mut AnnotationBox> {
        self.annotations_mut().map(Repeated::add)
    }

    /// Encodes with the default codec settings.
    #[must_use]
    pub fn to_text(&self) -> String {
        codec::encode(self)
    }

    #[must_use]
    pub fn to_text_with(&self, config: &CodecConfig) -> String {
        codec::encode_with(self, config)
    }

    /// Decodes with the default codec settings.
    pub fn from_text(text: &str) -> ChartStyleResult<Self> {
        codec::decode(text)
    }

    pub fn from_text_with(text: &str, config: &CodecConfig) -> ChartStyleResult<Self> {
        codec::decode_with(text, config)
    }

    /// Reads and decodes a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ChartStyleResult<Self> {
        Self::load_with(path, &CodecConfig::default())
    }

    pub fn load_with(path: impl AsRef<Path>, config: &CodecConfig) -> ChartStyleResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ChartStyleError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded chart configuration");
        Self::from_text_with(&text, config)
    }

    /// Encodes the configuration and writes it, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> ChartStyleResult<()> {
        self.save_with(path, &CodecConfig::default())
    }

    pub fn save_with(&self, path: impl AsRef<Path>, config: &CodecConfig) -> ChartStyleResult<()> {
        let path = path.as_ref();
        let text = self.to_text_with(config);
        fs::write(path, &text).map_err(|source| ChartStyleError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "saved chart configuration");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChartConfiguration;
    use crate::api::Layout;
    use crate::error::ErrorStage;

    #[test]
    fn optional_sections_follow_layout() {
        let mut series_only = ChartConfiguration::new(Layout::Series);
        assert!(series_only.legend().is_none());
        assert!(series_only.add_annotation().is_none());

        let mut full = ChartConfiguration::new(Layout::Full);
        assert!(full.legend_mut().is_some());
        full.add_annotation().expect("full layout has annotations");
        assert_eq!(full.annotations().map(|a| a.len()), Some(1));
    }

    #[test]
    fn missing_file_fails_at_open_stage() {
        let err = ChartConfiguration::load("/nonexistent/dir/chart.config")
            .expect_err("missing file must fail");
        assert_eq!(err.stage(), ErrorStage::Open);
    }
}
