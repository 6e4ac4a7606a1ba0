//! Core types: RawLine, TypedLine, LineKind, ExportFormat

mod format;
mod line;

pub use format::ExportFormat;
pub use line::{LineKind, RawLine, TypedLine};
