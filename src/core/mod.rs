pub mod element;
pub mod entry;
pub mod field;
pub mod repeated;

pub use element::{AnnotationBox, Element, FieldSlot, FieldSlotMut, Frame, Legend, Pad, Series};
pub use entry::{
    ENTRY_ASSIGN, Entry, EntryKey, EntryKind, EntryValue, USER_TEXT_MARKER, VERBATIM_CLOSE,
    VERBATIM_OPEN,
};
pub use field::{
    DrawOption, Field, FieldList, Header, Label, LegendAttributes, Line, Marker, Range,
    SeriesName, Title, anchor,
};
pub use repeated::Repeated;
