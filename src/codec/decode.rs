use tracing::{debug, trace};

use crate::api::{ChartConfiguration, CodecConfig, ElementKind, Layout, PresenceFlags};
use crate::core::{
    AnnotationBox, ENTRY_ASSIGN, Element, EntryKey, EntryKind, EntryValue, Field, FieldSlotMut,
    Frame, Legend, Pad, Series, VERBATIM_CLOSE, VERBATIM_OPEN,
};
use crate::error::{ChartStyleError, ChartStyleResult};

use super::blocks::{TagBlock, split_blocks, split_entries};
use super::number::{parse_integer, parse_number};
use super::verbatim::canonicalize;

/// Blocks of one scope, each claimable once.
#[derive(Debug)]
struct BlockPool<'a> {
    blocks: Vec<TagBlock<'a>>,
    used: Vec<bool>,
}

impl<'a> BlockPool<'a> {
    fn new(blocks: Vec<TagBlock<'a>>) -> Self {
        let used = vec![false; blocks.len()];
        Self { blocks, used }
    }

    fn take_first(&mut self, anchor: &str) -> Option<TagBlock<'a>> {
        let index = self
            .blocks
            .iter()
            .zip(&self.used)
            .position(|(block, used)| !used && block.anchor == anchor)?;
        self.used[index] = true;
        Some(self.blocks[index])
    }

    fn take_all(&mut self, anchor: &str) -> Vec<TagBlock<'a>> {
        let mut taken = Vec::new();
        for (block, used) in self.blocks.iter().zip(self.used.iter_mut()) {
            if !*used && block.anchor == anchor {
                *used = true;
                taken.push(*block);
            }
        }
        taken
    }

    fn trace_unclaimed(&self, scope: &str) {
        for (block, used) in self.blocks.iter().zip(&self.used) {
            if !used {
                trace!(scope, anchor = block.anchor, "ignoring unknown block");
            }
        }
    }
}

/// Read-only pass over top-level blocks recording which optional elements
/// appear.
#[must_use]
pub fn detect_presence(blocks: &[TagBlock<'_>]) -> PresenceFlags {
    let mut flags = PresenceFlags::EMPTY;
    for block in blocks {
        if let Some(flag) = PresenceFlags::for_anchor(block.anchor) {
            flags.insert(flag);
        }
    }
    flags
}

/// Parses one raw value according to the kind of its key. `None` means a
/// numeric token without digits.
fn decode_value(key: EntryKey, raw: &str, config: &CodecConfig) -> Option<EntryValue> {
    match key.kind() {
        EntryKind::Number => parse_number(raw, config.signed_numbers).map(EntryValue::Number),
        EntryKind::Integer => parse_integer(raw, config.signed_numbers).map(EntryValue::Integer),
        EntryKind::PlainText => Some(EntryValue::Text(raw.to_owned())),
        EntryKind::UserText => {
            let text = raw
                .strip_prefix(VERBATIM_OPEN)
                .and_then(|inner| inner.strip_suffix(VERBATIM_CLOSE))
                .unwrap_or(raw);
            Some(EntryValue::Text(text.to_owned()))
        }
    }
}

/// Populates a field from its block body. Unknown or foreign entry names are
/// skipped; a malformed number aborts the decode.
pub fn decode_field(
    anchor: &str,
    field: &mut dyn Field,
    body: &str,
    config: &CodecConfig,
) -> ChartStyleResult<()> {
    for token in split_entries(body) {
        let Some((name, raw)) = token.split_once(ENTRY_ASSIGN) else {
            trace!(field = anchor, token, "ignoring entry without assignment");
            continue;
        };
        let Some(key) = EntryKey::from_name(name).filter(|key| field.keys().contains(key)) else {
            trace!(field = anchor, entry = name, "ignoring unknown entry");
            continue;
        };
        let value =
            decode_value(key, raw, config).ok_or_else(|| ChartStyleError::InvalidNumber {
                field: anchor.to_owned(),
                entry: name.to_owned(),
                token: raw.to_owned(),
            })?;
        field.set_entry(key, value);
    }
    Ok(())
}

/// Populates an element from the body of its block (outer tags removed).
pub fn decode_element<E: Element>(
    element: &mut E,
    body: &str,
    config: &CodecConfig,
) -> ChartStyleResult<()> {
    let mut pool = BlockPool::new(split_blocks(body));
    for slot in element.fields_mut() {
        match slot {
            FieldSlotMut::Single { anchor, field } => {
                if field.is_silent() {
                    continue;
                }
                if let Some(block) = pool.take_first(anchor) {
                    decode_field(anchor, field, block.body, config)?;
                }
            }
            FieldSlotMut::Multiple { anchor, fields } => {
                for block in pool.take_all(anchor) {
                    decode_field(anchor, fields.add_field(), block.body, config)?;
                }
            }
        }
    }
    pool.trace_unclaimed(E::ANCHOR);
    Ok(())
}

fn decode_single<E: Element>(
    pool: &mut BlockPool<'_>,
    element: &mut E,
    config: &CodecConfig,
) -> ChartStyleResult<()> {
    match pool.take_first(E::ANCHOR) {
        Some(block) => decode_element(element, block.body, config),
        None => Ok(()),
    }
}

pub fn decode_with(text: &str, config: &CodecConfig) -> ChartStyleResult<ChartConfiguration> {
    let canonical = canonicalize(text);
    let blocks = split_blocks(&canonical);
    let flags = detect_presence(&blocks);
    let layout = Layout::from_flags(flags)?;
    debug!(?layout, %flags, blocks = blocks.len(), "selected chart layout");

    let mut configuration = ChartConfiguration::new(layout);
    let mut pool = BlockPool::new(blocks);
    for kind in layout.elements() {
        match kind {
            ElementKind::Pad => decode_single::<Pad>(&mut pool, &mut configuration.pad, config)?,
            ElementKind::Frame => {
                decode_single::<Frame>(&mut pool, &mut configuration.frame, config)?;
            }
            ElementKind::Legend => {
                decode_single::<Legend>(&mut pool, &mut configuration.legend, config)?;
            }
            ElementKind::Series => {
                for block in pool.take_all(Series::ANCHOR) {
                    decode_element(configuration.series.add(), block.body, config)?;
                }
            }
            ElementKind::AnnotationBox => {
                for block in pool.take_all(AnnotationBox::ANCHOR) {
                    decode_element(configuration.annotations.add(), block.body, config)?;
                }
            }
        }
    }
    pool.trace_unclaimed("document");

    debug!(
        ?layout,
        series = configuration.series.len(),
        annotations = configuration.annotations.len(),
        "decoded chart configuration"
    );
    Ok(configuration)
}
