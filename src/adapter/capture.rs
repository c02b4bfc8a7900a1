use tracing::debug;

use crate::api::{ChartConfiguration, Layout, PresenceFlags};
use crate::core::{Frame, Header, Range, Series, Title};
use crate::error::ChartStyleResult;

use super::canvas::{Axis, Canvas, Histogram, Primitive};

/// Flags raised by the primitives on a canvas. The frame histogram alone does
/// not count as a series.
#[must_use]
pub fn detect_canvas_presence(canvas: &Canvas) -> PresenceFlags {
    let mut flags = PresenceFlags::EMPTY;
    for primitive in &canvas.primitives {
        match primitive {
            Primitive::Histogram(histogram) if !histogram.is_frame() => {
                flags.insert(PresenceFlags::SERIES);
            }
            Primitive::Histogram(_) => {}
            Primitive::Legend(_) => flags.insert(PresenceFlags::LEGEND),
            Primitive::PaveText(_) => flags.insert(PresenceFlags::ANNOTATION),
        }
    }
    flags
}

/// Copies the styling of `canvas` into a fresh configuration.
pub fn capture(canvas: &Canvas) -> ChartStyleResult<ChartConfiguration> {
    let flags = detect_canvas_presence(canvas);
    let layout = Layout::from_flags(flags)?;
    let mut configuration = ChartConfiguration::new(layout);

    let pad = configuration.pad_mut();
    pad.range_x = Range::new(canvas.margins.left, canvas.margins.right);
    pad.range_y = Range::new(canvas.margins.bottom, canvas.margins.top);

    let frame_source = canvas
        .histograms()
        .find(|histogram| histogram.is_frame())
        .or_else(|| canvas.histograms().next());
    if let Some(histogram) = frame_source {
        capture_frame(configuration.frame_mut(), histogram);
    }

    for histogram in canvas.series_histograms() {
        capture_series(configuration.add_series(), histogram);
    }

    if let Some(legend_box) = canvas.legend() {
        if let Some(legend) = configuration.legend_mut() {
            legend.header = Header::new(
                legend_box.header.clone(),
                legend_box.text_size,
                legend_box.text_color,
            );
            legend.range_x = Range::new(legend_box.position.x1, legend_box.position.x2);
            legend.range_y = Range::new(legend_box.position.y1, legend_box.position.y2);
        }
        // Legend rows find their series by histogram name.
        for entry in &legend_box.entries {
            let Some(object_name) = entry.object_name.as_deref() else {
                continue;
            };
            for series in configuration.series_mut() {
                if series.name.name == object_name {
                    series.legend.label = entry.label.clone();
                    series.legend.option = entry.option.clone();
                }
            }
        }
    }

    for pave_text in canvas.pave_texts() {
        let Some(annotation) = configuration.add_annotation() else {
            break;
        };
        annotation.range_x = Range::new(pave_text.position.x1, pave_text.position.x2);
        annotation.range_y = Range::new(pave_text.position.y1, pave_text.position.y2);
        for line in &pave_text.lines {
            annotation
                .headers
                .push(Header::new(line.text.clone(), line.size, line.color));
        }
    }

    debug!(
        ?layout,
        series = configuration.series().len(),
        "captured canvas styling"
    );
    Ok(configuration)
}

fn capture_title(axis: &Axis) -> Title {
    Title {
        size: axis.title_size,
        offset: axis.title_offset,
        text: axis.title.clone(),
    }
}

fn capture_frame(frame: &mut Frame, histogram: &Histogram) {
    let (x, y) = (&histogram.x_axis, &histogram.y_axis);
    frame.title_x = capture_title(x);
    frame.range_x = Range::new(x.first, x.last);
    frame.label_x.size = x.label_size;
    frame.label_x.offset = x.label_offset;
    frame.title_y = capture_title(y);
    frame.range_y = Range::new(y.first, y.last);
    frame.label_y.size = y.label_size;
    frame.label_y.offset = y.label_offset;
}

fn capture_series(series: &mut Series, histogram: &Histogram) {
    series.name.name = histogram.name.clone();
    series.option.option = histogram.draw_option.clone();
    series.marker.size = histogram.marker.size;
    series.marker.style = histogram.marker.style;
    series.marker.color = histogram.marker.color;
    series.line.width = histogram.line.width;
    series.line.style = histogram.line.style;
    series.line.color = histogram.line.color;
}
