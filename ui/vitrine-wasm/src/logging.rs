//! `tracing` output routed to the browser console.
//!
//! The fmt layer writes each event into a buffer; the buffer is flushed to
//! the console method matching the event level when the writer is dropped.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ErrorEvent, PromiseRejectionEvent};

const DEFAULT_FILTER: &str = "info";

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        match self.level {
            Level::ERROR => gloo_console::error!(line),
            Level::WARN => gloo_console::warn!(line),
            Level::INFO => gloo_console::info!(line),
            _ => gloo_console::debug!(line),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Install the global subscriber. A bad filter directive falls back to `info`.
pub fn init(directive: &str) {
    let (filter, bad_directive) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    };
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if let Err(err) = installed {
        gloo_console::warn!(format!("tracing subscriber already set: {err}"));
    }
    if let Some(err) = bad_directive {
        tracing::warn!(%directive, %err, "invalid log filter, using default");
    }
}

/// Log uncaught script errors and unhandled promise rejections.
pub fn watch_window_errors() {
    let window = gloo_utils::window();

    let on_error = Closure::wrap(Box::new(move |event: ErrorEvent| {
        tracing::error!(
            message = %event.message(),
            source = %event.filename(),
            line = event.lineno(),
            "uncaught error"
        );
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let on_rejection = Closure::wrap(Box::new(move |event: PromiseRejectionEvent| {
        tracing::error!(reason = ?event.reason(), "unhandled promise rejection");
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    );
    on_rejection.forget();
}
