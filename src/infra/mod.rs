//! Capture input parsing

mod capture;

pub use capture::{CaptureFormat, ParseCaptureError, parse_capture};
