use tracing::{debug, warn};

use crate::api::ChartConfiguration;
use crate::core::{Frame, Series, Title};

use super::canvas::{
    Axis, Canvas, Histogram, LegendBox, LegendEntry, Margins, NdcBox, PaveTextBox, Primitive,
    TextLine,
};

/// Restores the styling held by `configuration` onto `canvas`.
///
/// Series styles go to the canvas' series histograms in draw order. Legend and
/// text-box primitives are rebuilt from scratch.
pub fn apply(configuration: &ChartConfiguration, canvas: &mut Canvas) {
    apply_pad_and_frame(configuration, canvas);
    let targets: Vec<usize> = canvas
        .primitives
        .iter()
        .enumerate()
        .filter_map(|(index, primitive)| match primitive {
            Primitive::Histogram(histogram) if !histogram.is_frame() => Some(index),
            _ => None,
        })
        .collect();
    apply_series_and_boxes(configuration, canvas, &targets);
}

/// Like [`apply`], but series `i` styles the histogram named `names[i]`.
///
/// Names without a matching series histogram on the canvas are skipped.
pub fn apply_to(configuration: &ChartConfiguration, canvas: &mut Canvas, names: &[&str]) {
    apply_pad_and_frame(configuration, canvas);
    let mut targets = Vec::with_capacity(names.len());
    for &name in names {
        let found = canvas.primitives.iter().position(|primitive| {
            matches!(primitive, Primitive::Histogram(h) if h.name == name && !h.is_frame())
        });
        match found {
            Some(index) => targets.push(index),
            None => warn!(name, "no series histogram with this name on the canvas"),
        }
    }
    apply_series_and_boxes(configuration, canvas, &targets);
}

/// Splits a `;`-separated histogram list into trimmed, non-empty names.
#[must_use]
pub fn split_histogram_list(list: &str) -> Vec<&str> {
    list.split(';')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

fn apply_pad_and_frame(configuration: &ChartConfiguration, canvas: &mut Canvas) {
    let pad = configuration.pad();
    canvas.margins = Margins {
        left: pad.range_x.low,
        right: pad.range_x.high,
        bottom: pad.range_y.low,
        top: pad.range_y.high,
    };

    // A missing frame is created in front of every other primitive.
    if let Some(histogram) = canvas.histograms_mut().find(|histogram| histogram.is_frame()) {
        apply_frame(configuration.frame(), histogram);
        return;
    }
    let mut histogram = Histogram::frame();
    apply_frame(configuration.frame(), &mut histogram);
    canvas.primitives.insert(0, Primitive::Histogram(histogram));
}

/// `targets` are primitive indices of histograms, consumed in series order.
fn apply_series_and_boxes(
    configuration: &ChartConfiguration,
    canvas: &mut Canvas,
    targets: &[usize],
) {
    let mut styled_names = Vec::with_capacity(targets.len());
    for (series, &index) in configuration.series().iter().zip(targets) {
        if let Some(Primitive::Histogram(histogram)) = canvas.primitives.get_mut(index) {
            apply_series(series, histogram);
            styled_names.push(histogram.name.clone());
        }
    }
    let styled = styled_names.len();
    if styled < configuration.series().len() {
        warn!(
            configured = configuration.series().len(),
            styled, "fewer canvas histograms than configured series"
        );
    }

    canvas
        .primitives
        .retain(|primitive| !matches!(primitive, Primitive::Legend(_) | Primitive::PaveText(_)));

    if let Some(legend) = configuration.legend() {
        let entries = configuration
            .series()
            .iter()
            .zip(styled_names)
            .map(|(series, name)| LegendEntry {
                object_name: Some(name),
                label: series.legend.label.clone(),
                option: series.legend.option.clone(),
            })
            .collect();
        canvas.push(Primitive::Legend(LegendBox {
            header: legend.header.text.clone(),
            text_size: legend.header.size,
            text_color: legend.header.color,
            position: NdcBox::new(
                legend.range_x.low,
                legend.range_y.low,
                legend.range_x.high,
                legend.range_y.high,
            ),
            entries,
        }));
    }

    for annotation in configuration.annotations().into_iter().flatten() {
        canvas.push(Primitive::PaveText(PaveTextBox {
            position: NdcBox::new(
                annotation.range_x.low,
                annotation.range_y.low,
                annotation.range_x.high,
                annotation.range_y.high,
            ),
            lines: annotation
                .headers
                .iter()
                .map(|header| TextLine {
                    text: header.text.clone(),
                    size: header.size,
                    color: header.color,
                })
                .collect(),
        }));
    }

    debug!(layout = ?configuration.layout(), styled, "applied chart configuration");
}

fn apply_axis(axis: &mut Axis, title: &Title, low: f64, high: f64, size: f64, offset: f64) {
    axis.title = title.text.clone();
    axis.title_size = title.size;
    axis.title_offset = title.offset;
    axis.first = low;
    axis.last = high;
    axis.label_size = size;
    axis.label_offset = offset;
}

fn apply_frame(frame: &Frame, histogram: &mut Histogram) {
    apply_axis(
        &mut histogram.x_axis,
        &frame.title_x,
        frame.range_x.low,
        frame.range_x.high,
        frame.label_x.size,
        frame.label_x.offset,
    );
    apply_axis(
        &mut histogram.y_axis,
        &frame.title_y,
        frame.range_y.low,
        frame.range_y.high,
        frame.label_y.size,
        frame.label_y.offset,
    );
}

fn apply_series(series: &Series, histogram: &mut Histogram) {
    if !series.name.name.is_empty() {
        histogram.title = series.name.name.clone();
    }
    histogram.draw_option = series.option.option.clone();
    histogram.marker.size = series.marker.size;
    histogram.marker.style = series.marker.style;
    histogram.marker.color = series.marker.color;
    histogram.line.width = series.line.width;
    histogram.line.style = series.line.style;
    histogram.line.color = series.line.color;
}
