//! `tracing` output for the browser: a fmt subscriber whose writer forwards
//! each formatted event to the console method matching its level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Install the console subscriber. Later calls are no-ops.
pub fn install(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(%level, "console logging installed");
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event; emits it on drop.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = console_line(&self.buffer);
        if line.is_empty() {
            return;
        }
        let message = JsValue::from_str(&line);
        if self.level == Level::ERROR {
            console::error_1(&message);
        } else if self.level == Level::WARN {
            console::warn_1(&message);
        } else if self.level == Level::INFO {
            console::info_1(&message);
        } else {
            console::debug_1(&message);
        }
    }
}

fn console_line(buffer: &[u8]) -> String {
    String::from_utf8_lossy(buffer).trim_end().to_string()
}
