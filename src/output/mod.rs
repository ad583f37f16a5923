//! Output sink for the workflow's result lines
//!
//! Keeps the destination of user-visible text injectable so tests can
//! assert on exact lines without capturing stdout.

pub mod console;
pub mod mock;

pub use console::ConsoleSink;
pub use mock::MockOutputSink;

pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str);
}
