use super::OutputSink;

/// Writes each result line to stdout.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}
