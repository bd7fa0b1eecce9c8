//! Charts of sampled functions and the sinks that display them
//!
//! A [`Chart`] collects labelled curves, each produced by sampling a
//! [`ScalarFunction`](classwork_core::ScalarFunction) over a dense range. Charts are
//! handed to a [`ChartSink`], the terminal consumer; nothing in the evaluation core
//! depends on how, or whether, a chart is shown.

pub mod chart;
pub mod error;
pub mod sink;
#[cfg(feature = "gui")]
pub mod window;

pub use chart::{Chart, Curve};
pub use error::PlotError;
pub use sink::{ChartSink, JsonExport, SummarySink};
#[cfg(feature = "gui")]
pub use window::WindowSink;
