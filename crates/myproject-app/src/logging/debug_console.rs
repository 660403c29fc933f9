//! Sink writing to the debugger output window via `OutputDebugStringW`.
use log::{LevelFilter, Log, Metadata, Record};
use windows_sys::Win32::System::Diagnostics::Debug::OutputDebugStringW;

/// Sends records to an attached debugger (e.g. the Visual Studio output pane).
#[derive(Debug, Clone, Copy)]
pub struct DebugConsoleSink {
    level: LevelFilter,
}

impl DebugConsoleSink {
    /// Creates a sink accepting records up to `level`.
    #[must_use]
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

fn format_line(record: &Record<'_>) -> String {
    format!("[{}] [{}] {}\n", record.target(), record.level(), record.args())
}

fn to_wide_nul(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

impl Log for DebugConsoleSink {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let wide = to_wide_nul(&format_line(record));
        // SAFETY: `wide` is NUL-terminated and outlives the call.
        unsafe { OutputDebugStringW(wide.as_ptr()) };
    }

    fn flush(&self) {}
}
