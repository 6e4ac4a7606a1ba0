//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments with capture files on disk and a
//! fluent CLI assertion wrapper using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::KeepclipCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
