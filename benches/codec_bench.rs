use chart_style::codec::{canonicalize, decode, encode};
use chart_style::core::{Header, Range};
use chart_style::{ChartConfiguration, Layout};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn full_configuration(series_count: usize) -> ChartConfiguration {
    let mut configuration = ChartConfiguration::new(Layout::Full);
    configuration.pad_mut().range_x = Range::new(0.12, 0.05);
    configuration.pad_mut().range_y = Range::new(0.13, 0.05);
    configuration.frame_mut().title_x.text = "m_{#gamma#gamma} (GeV)".to_owned();
    configuration.frame_mut().title_y.text = "Events / 2 GeV".to_owned();

    for i in 0..series_count {
        let series = configuration.add_series();
        series.option.option = "E1same".to_owned();
        series.legend.label = format!("sample {i}; weighted");
        series.legend.option = "lep".to_owned();
        series.marker.size = 1.0 + i as f64 * 0.1;
        series.marker.style = 20;
        series.marker.color = i as i32;
        series.line.width = 2;
    }

    if let Some(legend) = configuration.legend_mut() {
        legend.header = Header::new("Samples", 0.035, 1);
        legend.range_x = Range::new(0.6, 0.9);
        legend.range_y = Range::new(0.6, 0.9);
    }
    for i in 0..4 {
        if let Some(annotation) = configuration.add_annotation() {
            annotation.range_x = Range::new(0.15, 0.45);
            annotation.range_y = Range::new(0.8 - i as f64 * 0.1, 0.9 - i as f64 * 0.1);
            annotation.headers.push(Header::new("Preliminary", 0.04, 1));
            annotation.headers.push(Header::new("#sqrt{s} = 13 TeV", 0.03, 1));
        }
    }
    configuration
}

fn bench_encode_full_64(c: &mut Criterion) {
    let configuration = full_configuration(64);

    c.bench_function("encode_full_64_series", |b| {
        b.iter(|| {
            let _ = encode(black_box(&configuration));
        })
    });
}

fn bench_decode_full_64(c: &mut Criterion) {
    let text = encode(&full_configuration(64));

    c.bench_function("decode_full_64_series", |b| {
        b.iter(|| {
            let _ = decode(black_box(&text)).expect("decode");
        })
    });
}

fn bench_canonicalize_indented(c: &mut Criterion) {
    let text = encode(&full_configuration(64)).replace('<', "\n    <");

    c.bench_function("canonicalize_indented_document", |b| {
        b.iter(|| {
            let _ = canonicalize(black_box(&text));
        })
    });
}

criterion_group!(
    benches,
    bench_encode_full_64,
    bench_decode_full_64,
    bench_canonicalize_indented
);
criterion_main!(benches);
