//! Turns raw diagnostic-tool text into structured hops.
//!
//! Route tracing output from Linux `traceroute` and Windows `tracert`
//! (including localized timeout lines) is parsed line by line into
//! [`HopObservation`]s. Name-lookup output is not parsed; it is passed
//! through as text.

mod line;
mod lookup;
mod patterns;
mod trace;

pub use line::LineKind;
pub use lookup::{LookupOutput, MAX_LOOKUP_OUTPUT, passthrough};
pub use trace::{ClassifiedLine, classify_lines, parse_trace};

pub use hoptrace_types::HopObservation;
