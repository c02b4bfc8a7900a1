//! Tagged-text codec for chart configurations.
//!
//! ```text
//! document := element*
//! element  := "<" anchor ">" field* "<" anchor ">"
//! field    := "<" anchor ">" entry (";" entry)* "<" anchor ">"
//! entry    := name ":=" value      value may be "[" verbatim-text "]"
//! ```
//!
//! Values the format cannot carry back:
//!
//! - plain text with whitespace, `;`, `<` or `[`
//! - user text containing `]`
//! - non-finite numbers: `NaN` and `inf` are written as such but hold no digit
//!   run, so decoding them fails with `InvalidNumber`
//!
//! Same-named blocks do not nest.

mod blocks;
mod decode;
mod encode;
mod number;
mod verbatim;

pub use blocks::{TagBlock, split_blocks, split_entries};
pub use decode::{decode_element, decode_field, decode_with, detect_presence};
pub use encode::{encode_element, encode_field_entries, encode_repeated, encode_with};
pub use number::{parse_integer, parse_number};
pub use verbatim::{canonicalize, compact_whitespace, extract_verbatim, reinsert_verbatim};

use crate::api::{ChartConfiguration, CodecConfig};
use crate::error::ChartStyleResult;

#[must_use]
pub fn encode(configuration: &ChartConfiguration) -> String {
    encode_with(configuration, &CodecConfig::default())
}

pub fn decode(text: &str) -> ChartStyleResult<ChartConfiguration> {
    decode_with(text, &CodecConfig::default())
}
