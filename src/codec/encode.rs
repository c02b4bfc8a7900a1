use tracing::debug;

use crate::api::{ChartConfiguration, CodecConfig, ElementKind};
use crate::core::{Element, Field, FieldSlot, Repeated};

/// Entry list of one field, `;`-joined in declared order. Silent fields
/// produce nothing.
#[must_use]
pub fn encode_field_entries(field: &dyn Field) -> String {
    if field.is_silent() {
        return String::new();
    }
    field
        .entries()
        .iter()
        .map(|entry| entry.encode())
        .collect::<Vec<_>>()
        .join(";")
}

fn push_tagged(out: &mut String, anchor: &str, body: &str) {
    out.push('<');
    out.push_str(anchor);
    out.push('>');
    out.push_str(body);
    out.push('<');
    out.push_str(anchor);
    out.push('>');
}

fn push_field(out: &mut String, anchor: &str, field: &dyn Field) {
    if !field.is_silent() {
        push_tagged(out, anchor, &encode_field_entries(field));
    }
}

/// `<anchor>` + every field block in tuple order + `<anchor>`.
#[must_use]
pub fn encode_element<E: Element>(element: &E) -> String {
    let mut body = String::new();
    for slot in element.fields() {
        match slot {
            FieldSlot::Single { anchor, field } => push_field(&mut body, anchor, field),
            FieldSlot::Multiple { anchor, fields } => {
                for field in fields.fields() {
                    push_field(&mut body, anchor, field);
                }
            }
        }
    }
    let mut out = String::with_capacity(body.len() + 2 * (E::ANCHOR.len() + 2));
    push_tagged(&mut out, E::ANCHOR, &body);
    out
}

/// Every instance encoded on its own, joined with `separator`.
#[must_use]
pub fn encode_repeated<E: Element>(elements: &Repeated<E>, separator: &str) -> String {
    elements
        .iter()
        .map(encode_element)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Encodes every element of the configuration's layout in schema order.
///
/// An empty repeatable container writes nothing, so decoding infers the layout
/// from what is left: a `SeriesAnnotation` configuration without annotation
/// boxes reads back as `Series`, and one without series is rejected.
pub fn encode_with(configuration: &ChartConfiguration, config: &CodecConfig) -> String {
    let separator = config.element_separator.as_str();
    let mut out = String::new();
    for kind in configuration.layout.elements() {
        let encoded = match kind {
            ElementKind::Pad => encode_element(&configuration.pad),
            ElementKind::Frame => encode_element(&configuration.frame),
            ElementKind::Series => encode_repeated(&configuration.series, separator),
            ElementKind::Legend => encode_element(&configuration.legend),
            ElementKind::AnnotationBox => encode_repeated(&configuration.annotations, separator),
        };
        out.push_str(&encoded);
    }
    debug!(
        layout = ?configuration.layout,
        series = configuration.series.len(),
        bytes = out.len(),
        "encoded chart configuration"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::{encode_element, encode_field_entries, encode_repeated};
    use crate::core::{AnnotationBox, Header, Pad, Range, Repeated, Series, SeriesName};

    #[test]
    fn pad_encodes_both_ranges() {
        let pad = Pad {
            range_x: Range::new(0.1, 0.9),
            range_y: Range::new(0.15, 0.05),
        };
        assert_eq!(
            encode_element(&pad),
            "<pad><range_x>low:=0.1;high:=0.9<range_x><range_y>low:=0.15;high:=0.05<range_y><pad>"
        );
    }

    #[test]
    fn silent_name_is_never_written() {
        let series = Series::named("h_energy");
        assert_eq!(
            encode_field_entries(&SeriesName {
                name: "h_energy".to_owned()
            }),
            ""
        );
        assert!(!encode_element(&series).contains("h_energy"));
        assert!(!encode_element(&series).contains("<name>"));
    }

    #[test]
    fn repeated_headers_each_get_a_block() {
        let mut annotation = AnnotationBox::default();
        annotation.headers.push(Header::new("first", 0.03, 1));
        annotation.headers.push(Header::new("second", 0.03, 2));
        let text = encode_element(&annotation);
        assert!(text.starts_with(
            "<pave_text><header>user_text:=[first];size:=0.03;color:=1<header>\
             <header>user_text:=[second];size:=0.03;color:=2<header>"
        ));
    }

    #[test]
    fn repeated_elements_are_joined_with_separator() {
        let series: Repeated<Series> = vec![Series::default(), Series::default()].into();
        let text = encode_repeated(&series, "\n");
        assert_eq!(text.matches("<hist1d>").count(), 4);
        assert_eq!(text.lines().count(), 2);
    }
}
