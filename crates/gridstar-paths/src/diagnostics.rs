//! Advisory output channel for search calls.

/// Receives human-readable diagnostic text from a search.
///
/// Messages never influence the search result. A search emits at most one
/// message per call.
pub trait DiagnosticSink {
    fn display_message(&mut self, msg: &str);
}

impl<F: FnMut(&str)> DiagnosticSink for F {
    fn display_message(&mut self, msg: &str) {
        self(msg)
    }
}

/// Forwards messages to the [`log`] facade at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn display_message(&mut self, msg: &str) {
        log::info!(target: "gridstar", "{msg}");
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn display_message(&mut self, _msg: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |m: &str| seen.push(m.to_owned());
            sink.display_message("hello");
            sink.display_message("world");
        }
        assert_eq!(seen, vec!["hello", "world"]);
    }

    #[test]
    fn sinks_work_as_trait_objects() {
        let mut sinks: Vec<Box<dyn DiagnosticSink>> =
            vec![Box::new(NullSink), Box::new(LogSink)];
        for s in sinks.iter_mut() {
            s.display_message("ignored");
        }
    }
}
