use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};

/// Destination a [`ConsoleLogger`](crate::ConsoleLogger) writes entries to.
pub type Sink = Box<dyn WriteColor + Send>;

/// Opens the sink for an output path.
///
/// `stdout` and `stderr` select the standard streams, colored according to
/// `color`. Any other path is a file, created if missing and appended to.
/// Files are never colored.
pub fn open_sink(path: &str, color: ColorChoice) -> io::Result<Sink> {
    match path {
        "stdout" => Ok(Box::new(StandardStream::stdout(color))),
        "stderr" => Ok(Box::new(StandardStream::stderr(color))),
        _ => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(Box::new(NoColor::new(file)))
        }
    }
}

/// In-memory sink. Clones share the same buffer, so one clone can be handed
/// to a logger while another one reads what was written.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).to_string()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn into_sink(self) -> Sink {
        Box::new(NoColor::new(self))
    }
}

impl Write for BufferSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
