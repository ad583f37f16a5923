use super::OutputSink;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockOutputSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MockOutputSink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Default for MockOutputSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for MockOutputSink {
    fn emit(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_sink_captures_lines_in_order() {
        let sink = MockOutputSink::new();

        sink.emit("first");
        sink.emit("second");

        assert_eq!(
            sink.lines(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_clones_share_captured_lines() {
        let sink = MockOutputSink::new();
        let probe = sink.clone();

        sink.emit("shared");

        assert_eq!(probe.lines(), vec!["shared".to_string()]);
    }
}
