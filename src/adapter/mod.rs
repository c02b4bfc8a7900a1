//! Boundary between the codec and the rendering objects it styles.
//!
//! [`Canvas`] is a plain-data view of a drawn chart. Hosts translate their
//! engine's objects into it, then use [`capture`] to fill a configuration and
//! [`apply`] to copy one back. Every value is copied; nothing is shared with
//! the host's objects.

mod apply;
mod canvas;
mod capture;

use std::path::Path;

pub use apply::{apply, apply_to, split_histogram_list};
pub use canvas::{
    Axis, Canvas, FRAME_HISTOGRAM_NAME, Histogram, LegendBox, LegendEntry, LineAttributes,
    Margins, MarkerAttributes, NdcBox, PaveTextBox, Primitive, TextLine,
};
pub use capture::{capture, detect_canvas_presence};

use crate::api::ChartConfiguration;
use crate::error::ChartStyleResult;

/// Captures the styling of `canvas` and writes it to `path`.
pub fn save_configuration(canvas: &Canvas, path: impl AsRef<Path>) -> ChartStyleResult<()> {
    capture(canvas)?.save(path)
}

/// Loads the configuration at `path` and applies it to `canvas`.
///
/// A failed load leaves `canvas` untouched.
pub fn apply_configuration(
    path: impl AsRef<Path>,
    canvas: &mut Canvas,
) -> ChartStyleResult<ChartConfiguration> {
    let configuration = ChartConfiguration::load(path)?;
    apply(&configuration, canvas);
    Ok(configuration)
}

/// Loads the configuration at `path` and applies it to the histograms named in
/// `histogram_list` (`;`-separated), pairing series with names in list order.
pub fn apply_configuration_to(
    path: impl AsRef<Path>,
    canvas: &mut Canvas,
    histogram_list: &str,
) -> ChartStyleResult<ChartConfiguration> {
    let configuration = ChartConfiguration::load(path)?;
    apply_to(&configuration, canvas, &split_histogram_list(histogram_list));
    Ok(configuration)
}
