//! Dispatch of one record to several sinks.
use log::{Level, Log, Metadata, Record};

/// Logger that forwards each record to several sinks.
pub struct FanoutLogger {
    sinks: Vec<Box<dyn Log>>,
    flush_on: Option<Level>,
}

impl std::fmt::Debug for FanoutLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanoutLogger")
            .field("sinks", &self.sinks.len())
            .field("flush_on", &self.flush_on)
            .finish()
    }
}

impl FanoutLogger {
    /// Creates a logger over `sinks`.
    ///
    /// When `flush_on` is set, every record at that severity or above is
    /// flushed through all sinks as soon as it is written.
    #[must_use]
    pub fn new(sinks: Vec<Box<dyn Log>>, flush_on: Option<Level>) -> Self {
        Self { sinks, flush_on }
    }

    fn should_flush(&self, level: Level) -> bool {
        self.flush_on.is_some_and(|threshold| level <= threshold)
    }
}

#[cfg(test)]
impl FanoutLogger {
    pub(crate) fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub(crate) fn flush_on(&self) -> Option<Level> {
        self.flush_on
    }
}

impl Log for FanoutLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.sinks.iter().any(|sink| sink.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        let mut written = false;
        for sink in &self.sinks {
            if sink.enabled(record.metadata()) {
                sink.log(record);
                written = true;
            }
        }
        if written && self.should_flush(record.level()) {
            self.flush();
        }
    }

    fn flush(&self) {
        for sink in &self.sinks {
            sink.flush();
        }
    }
}
