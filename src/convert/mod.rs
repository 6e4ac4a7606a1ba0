//! Note conversion: classify captured lines, then render them into one of
//! the supported output formats.

mod classify;
mod render;
mod urls;

pub use classify::classify;
pub use render::{render, render_capture};
pub use urls::linkify;
