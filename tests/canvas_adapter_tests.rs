use approx::assert_relative_eq;
use chart_style::adapter::{
    Canvas, Histogram, LegendBox, LegendEntry, Margins, NdcBox, PaveTextBox, Primitive, TextLine,
    apply, apply_configuration, apply_configuration_to, apply_to, capture, save_configuration,
    split_histogram_list,
};
use chart_style::{ChartConfiguration, ChartStyleError, ErrorStage, Layout};

fn styled_histogram(name: &str, option: &str, color: i32) -> Histogram {
    let mut histogram = Histogram::new(name);
    histogram.draw_option = option.to_owned();
    histogram.marker.size = 1.1;
    histogram.marker.style = 21;
    histogram.marker.color = color;
    histogram.line.width = 3;
    histogram.line.style = 2;
    histogram.line.color = color;
    histogram
}

fn styled_canvas() -> Canvas {
    let mut canvas = Canvas::new(Margins {
        left: 0.12,
        right: 0.04,
        bottom: 0.13,
        top: 0.05,
    });

    let mut frame = Histogram::new("hframe");
    frame.title = "frame".to_owned();
    frame.x_axis.title = "p_{T} (GeV)".to_owned();
    frame.x_axis.title_size = 0.05;
    frame.x_axis.title_offset = 1.2;
    frame.x_axis.first = 0.0;
    frame.x_axis.last = 120.0;
    frame.x_axis.label_size = 0.04;
    frame.x_axis.label_offset = 0.01;
    frame.y_axis.title = "Events / bin".to_owned();
    frame.y_axis.first = 0.5;
    frame.y_axis.last = 1.0e5;
    canvas.push(Primitive::Histogram(frame));

    canvas.push(Primitive::Histogram(styled_histogram("data", "E1same", 1)));
    canvas.push(Primitive::Histogram(styled_histogram("mc", "histsame", 632)));

    canvas.push(Primitive::Legend(LegendBox {
        header: "Sample".to_owned(),
        text_size: 0.035,
        text_color: 1,
        position: NdcBox::new(0.6, 0.7, 0.9, 0.9),
        entries: vec![
            LegendEntry {
                object_name: Some("mc".to_owned()),
                label: "simulation".to_owned(),
                option: "l".to_owned(),
            },
            LegendEntry {
                object_name: Some("data".to_owned()),
                label: "data; 2024".to_owned(),
                option: "lep".to_owned(),
            },
            LegendEntry {
                object_name: None,
                label: "orphan row".to_owned(),
                option: String::new(),
            },
        ],
    }));

    canvas.push(Primitive::PaveText(PaveTextBox {
        position: NdcBox::new(0.15, 0.8, 0.45, 0.9),
        lines: vec![
            TextLine {
                text: "Preliminary".to_owned(),
                size: 0.04,
                color: 2,
            },
            TextLine {
                text: "#sqrt{s} = 13 TeV".to_owned(),
                size: 0.03,
                color: 1,
            },
        ],
    }));

    canvas
}

fn unstyled_canvas() -> Canvas {
    let mut canvas = Canvas::default();
    canvas.push(Primitive::Histogram(Histogram::new("h_data")));
    canvas.push(Primitive::Histogram(Histogram::new("h_mc")));
    canvas
}

#[test]
fn capture_reads_every_element_from_the_canvas() {
    let configuration = capture(&styled_canvas()).expect("capture canvas");
    assert_eq!(configuration.layout(), Layout::Full);

    let pad = configuration.pad();
    assert_relative_eq!(pad.range_x.low, 0.12);
    assert_relative_eq!(pad.range_x.high, 0.04);
    assert_relative_eq!(pad.range_y.low, 0.13);
    assert_relative_eq!(pad.range_y.high, 0.05);

    let frame = configuration.frame();
    assert_eq!(frame.title_x.text, "p_{T} (GeV)");
    assert_relative_eq!(frame.range_x.high, 120.0);
    assert_relative_eq!(frame.label_x.offset, 0.01);
    assert_eq!(frame.title_y.text, "Events / bin");
    assert_relative_eq!(frame.range_y.high, 1.0e5);

    let series = configuration.series();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].option.option, "E1same");
    assert_eq!(series[0].legend.label, "data; 2024");
    assert_eq!(series[0].legend.option, "lep");
    assert_eq!(series[1].option.option, "histsame");
    assert_eq!(series[1].legend.label, "simulation");
    assert_eq!(series[1].marker.color, 632);

    let legend = configuration.legend().expect("legend present");
    assert_eq!(legend.header.text, "Sample");
    assert_relative_eq!(legend.range_x.low, 0.6);
    assert_relative_eq!(legend.range_y.high, 0.9);

    let annotations = configuration.annotations().expect("annotations present");
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].headers.len(), 2);
    assert_eq!(annotations[0].headers[1].text, "#sqrt{s} = 13 TeV");
}

#[test]
fn capture_without_series_is_unsupported() {
    let mut canvas = Canvas::default();
    canvas.push(Primitive::Histogram(Histogram::frame()));
    let err = capture(&canvas).expect_err("frame alone is not a series");
    assert_eq!(err.stage(), ErrorStage::VariantSelect);
}

#[test]
fn apply_restores_styles_in_draw_order() {
    let configuration = capture(&styled_canvas()).expect("capture canvas");
    let mut target = unstyled_canvas();
    apply(&configuration, &mut target);

    assert_relative_eq!(target.margins.left, 0.12);
    assert_relative_eq!(target.margins.top, 0.05);

    let frame = target
        .histograms()
        .next()
        .expect("frame histogram inserted first");
    assert!(frame.is_frame());
    assert_eq!(frame.x_axis.title, "p_{T} (GeV)");

    let series: Vec<&Histogram> = target.series_histograms().collect();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].name, "h_data");
    assert_eq!(series[0].title, "data");
    assert_eq!(series[0].draw_option, "E1same");
    assert_eq!(series[1].draw_option, "histsame");
    assert_eq!(series[1].line.color, 632);

    let legend = target.legend().expect("legend rebuilt");
    assert_eq!(legend.entries.len(), 2);
    assert_eq!(legend.entries[0].object_name.as_deref(), Some("h_data"));
    assert_eq!(legend.entries[0].label, "data; 2024");
    assert_eq!(legend.entries[1].label, "simulation");

    assert_eq!(target.pave_texts().count(), 1);
}

#[test]
fn apply_replaces_existing_boxes() {
    let configuration = capture(&styled_canvas()).expect("capture canvas");
    let mut target = styled_canvas();
    apply(&configuration, &mut target);
    apply(&configuration, &mut target);
    assert_eq!(target.pave_texts().count(), 1);
    let legends = target
        .primitives
        .iter()
        .filter(|primitive| matches!(primitive, Primitive::Legend(_)))
        .count();
    assert_eq!(legends, 1);
}

#[test]
fn series_only_configuration_drops_boxes_from_the_canvas() {
    let mut configuration = ChartConfiguration::new(Layout::Series);
    configuration.add_series().option.option = "P".to_owned();
    let mut target = styled_canvas();
    apply(&configuration, &mut target);
    assert!(target.legend().is_none());
    assert_eq!(target.pave_texts().count(), 0);
    assert_eq!(target.series_histograms().next().map(|h| h.draw_option.as_str()), Some("P"));
}

#[test]
fn saved_canvas_styling_applies_to_a_fresh_canvas() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("adapter.cfg");
    save_configuration(&styled_canvas(), &path).expect("save configuration");

    let mut target = unstyled_canvas();
    let loaded = apply_configuration(&path, &mut target).expect("apply configuration");

    assert_eq!(loaded.layout(), Layout::Full);
    let series: Vec<&Histogram> = target.series_histograms().collect();
    assert_eq!(series[0].draw_option, "E1same");
    assert_eq!(series[0].marker.style, 21);
    assert_eq!(target.legend().map(|legend| legend.entries.len()), Some(2));
}

#[test]
fn loading_a_missing_file_reports_open_stage() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.cfg");
    let mut target = unstyled_canvas();
    let before = target.clone();
    let err = apply_configuration(&path, &mut target).expect_err("missing file");
    assert_eq!(err.stage(), ErrorStage::Open);
    assert!(matches!(err, ChartStyleError::Open { .. }));
    assert_eq!(target, before);
}

#[test]
fn configuration_file_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("configuration.cfg");
    let configuration = capture(&styled_canvas()).expect("capture canvas");
    configuration.save(&path).expect("save");
    let text = std::fs::read_to_string(&path).expect("read back");
    let loaded = ChartConfiguration::load(&path).expect("load");

    assert_eq!(text, configuration.to_text());
    assert_eq!(loaded.to_text(), configuration.to_text());
    assert_eq!(loaded.series().len(), 2);
}

#[test]
fn frame_is_found_by_title_not_name() {
    let mut frame = Histogram::new("hframe");
    frame.title = "frame".to_owned();
    frame.x_axis.title = "E (keV)".to_owned();
    let mut canvas = Canvas::default();
    canvas.push(Primitive::Histogram(styled_histogram("h_data", "P", 4)));
    canvas.push(Primitive::Histogram(frame));

    let configuration = capture(&canvas).expect("capture canvas");
    assert_eq!(configuration.series().len(), 1);
    assert_eq!(configuration.series()[0].name.name, "h_data");
    assert_eq!(configuration.frame().title_x.text, "E (keV)");

    let mut named_frame_only = Canvas::default();
    named_frame_only.push(Primitive::Histogram(Histogram::new("frame")));
    named_frame_only.push(Primitive::Histogram(Histogram::new("h_data")));
    let configuration = capture(&named_frame_only).expect("untitled frame is a series");
    assert_eq!(configuration.series().len(), 2);
}

#[test]
fn apply_inserts_a_titled_frame_when_missing() {
    let configuration = capture(&styled_canvas()).expect("capture canvas");
    let mut target = unstyled_canvas();
    apply(&configuration, &mut target);
    match &target.primitives[0] {
        Primitive::Histogram(frame) => {
            assert_eq!(frame.title, "frame");
            assert_eq!(frame.y_axis.title, "Events / bin");
        }
        other => panic!("expected frame histogram, got {other:?}"),
    }
    assert_eq!(target.series_histograms().count(), 2);
}

#[test]
fn named_targets_are_styled_in_list_order() {
    let mut configuration = ChartConfiguration::new(Layout::SeriesLegend);
    for option in ["A", "B"] {
        let series = configuration.add_series();
        series.option.option = option.to_owned();
        series.legend.label = format!("label {option}");
    }
    let mut canvas = Canvas::default();
    for name in ["h1", "h2", "h3"] {
        canvas.push(Primitive::Histogram(Histogram::new(name)));
    }

    apply_to(&configuration, &mut canvas, &["h3", "missing", "h1"]);

    let options: Vec<(&str, &str)> = canvas
        .series_histograms()
        .map(|h| (h.name.as_str(), h.draw_option.as_str()))
        .collect();
    assert_eq!(options, vec![("h1", "B"), ("h2", ""), ("h3", "A")]);

    let legend = canvas.legend().expect("legend rebuilt");
    let rows: Vec<(Option<&str>, &str)> = legend
        .entries
        .iter()
        .map(|entry| (entry.object_name.as_deref(), entry.label.as_str()))
        .collect();
    assert_eq!(rows, vec![(Some("h3"), "label A"), (Some("h1"), "label B")]);
}

#[test]
fn histogram_list_is_split_on_semicolons() {
    assert_eq!(
        split_histogram_list(" h_data ;h_mc;; signal region ;"),
        vec!["h_data", "h_mc", "signal region"]
    );
    assert!(split_histogram_list("").is_empty());
}

#[test]
fn series_name_becomes_the_histogram_title() {
    let mut configuration = ChartConfiguration::new(Layout::Series);
    configuration.add_series().name.name = "Signal".to_owned();
    configuration.add_series();
    let mut canvas = Canvas::default();
    for name in ["h_signal", "h_background"] {
        let mut histogram = Histogram::new(name);
        histogram.title = "untitled".to_owned();
        canvas.push(Primitive::Histogram(histogram));
    }
    apply(&configuration, &mut canvas);

    let titles: Vec<&str> = canvas.series_histograms().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Signal", "untitled"]);
}

#[test]
fn loaded_configuration_applies_to_listed_histograms() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("listed.cfg");
    let mut configuration = ChartConfiguration::new(Layout::Series);
    configuration.add_series().option.option = "hist".to_owned();
    configuration.save(&path).expect("save");

    let mut canvas = unstyled_canvas();
    apply_configuration_to(&path, &mut canvas, "h_mc").expect("apply listed");
    let options: Vec<&str> = canvas.series_histograms().map(|h| h.draw_option.as_str()).collect();
    assert_eq!(options, vec!["", "hist"]);
}

#[test]
fn saving_into_a_missing_directory_reports_write_stage() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("no-such-dir").join("chart.cfg");
    let mut configuration = ChartConfiguration::new(Layout::Series);
    configuration.add_series();

    let err = configuration.save(&path).expect_err("parent directory is missing");
    assert_eq!(err.stage(), ErrorStage::Write);
    assert!(matches!(err, ChartStyleError::Write { ref path, .. } if path.ends_with("chart.cfg")));
}
