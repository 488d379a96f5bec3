use log::{LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use termcolor::ColorChoice;

use crate::formatter::formatted_record;
use crate::sink::{open_sink, Sink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFormat {
    /// `info`
    Lowercase,
    /// `INFO`
    Capital,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallerFormat {
    /// Parent directory, file name and line: `src/main.rs:12`
    Short,
    /// File path as recorded and line
    Full,
}

/// Fields of a console line. Disabled fields are left out, separators
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    pub level: Option<LevelFormat>,
    pub caller: Option<CallerFormat>,
    pub message: bool,
}

impl Default for Encoding {
    fn default() -> Self {
        Self {
            level: Some(LevelFormat::Lowercase),
            caller: None,
            message: true,
        }
    }
}

/// `log` backend writing one tab separated line per entry to its outputs.
///
/// Entries more verbose than the configured level are dropped. Failing
/// writes are reported on the error outputs and never reach the caller.
pub struct ConsoleLogger {
    level: LevelFilter,
    encoding: Encoding,
    outputs: Vec<Mutex<Sink>>,
    error_outputs: Vec<Mutex<Sink>>,
}

impl ConsoleLogger {
    /// Logger without any outputs, add them with [`ConsoleLogger::with_output`].
    pub fn new(level: LevelFilter, encoding: Encoding) -> Self {
        Self {
            level,
            encoding,
            outputs: vec![],
            error_outputs: vec![],
        }
    }

    pub fn with_output(mut self, sink: Sink) -> Self {
        self.outputs.push(Mutex::new(sink));
        self
    }

    pub fn with_error_output(mut self, sink: Sink) -> Self {
        self.error_outputs.push(Mutex::new(sink));
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    fn report(&self, error: &io::Error) {
        for output in &self.error_outputs {
            // Nowhere left to report to if this fails too
            let _ = writeln!(lock(output), "log4lib: write error: {}", error);
        }
    }
}

fn lock(sink: &Mutex<Sink>) -> MutexGuard<'_, Sink> {
    sink.lock().unwrap_or_else(PoisonError::into_inner)
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("level", &self.level)
            .field("encoding", &self.encoding)
            .field("outputs", &self.outputs.len())
            .field("error_outputs", &self.error_outputs.len())
            .finish()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // Rendered before any sink is locked: operands may log themselves
        let message = record.args().to_string();
        for output in &self.outputs {
            let result = formatted_record(&mut **lock(output), record, &message, &self.encoding);
            if let Err(error) = result {
                self.report(&error);
            }
        }
    }

    fn flush(&self) {
        for output in &self.outputs {
            let result = lock(output).flush();
            if let Err(error) = result {
                self.report(&error);
            }
        }
    }
}

/// Builds a [`ConsoleLogger`] from output paths.
///
/// Paths are `stdout`, `stderr` or a file path, see [`open_sink`]. Only
/// `stdout` and `stderr` outputs are colored, error outputs never are.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub level: LevelFilter,
    pub encoding: Encoding,
    pub color: ColorChoice,
    pub output_paths: Vec<String>,
    pub error_output_paths: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            encoding: Encoding::default(),
            color: ColorChoice::Never,
            output_paths: vec!["stdout".to_string()],
            error_output_paths: vec!["stderr".to_string()],
        }
    }
}

impl ConsoleConfig {
    pub fn build(&self) -> io::Result<ConsoleLogger> {
        let mut logger = ConsoleLogger::new(self.level, self.encoding.clone());
        for path in &self.output_paths {
            logger = logger.with_output(open_sink(path, self.color)?);
        }
        for path in &self.error_output_paths {
            logger = logger.with_error_output(open_sink(path, ColorChoice::Never)?);
        }
        Ok(logger)
    }
}
