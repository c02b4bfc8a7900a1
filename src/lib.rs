//! chart-style-rs: persist and restore the visual styling of composite charts.
//!
//! A [`ChartConfiguration`] holds pad margins, the axis frame, per-series
//! marker/line style, an optional legend and optional annotation boxes. The
//! [`codec`] turns it into a small tagged-text format and back; the
//! [`adapter`] copies it to and from a plain-data canvas.

pub mod adapter;
pub mod api;
pub mod codec;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartConfiguration, CodecConfig, Layout, PresenceFlags};
pub use error::{ChartStyleError, ChartStyleResult, ErrorStage};
