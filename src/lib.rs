//! Use any [`log`] backend where a library expects a `LibLogger`.
//!
//! [`wrap_logger`] turns a [`log::Log`] implementation into a [`LibLogger`],
//! the leveled logging interface with plain (`info`) and formatted (`infof`)
//! variants for debug, info, warn, error, panic and fatal entries. Entries
//! keep the location of the code calling the `LibLogger` method.
//!
//! [`ConsoleLogger`] is a `log` backend writing tab separated lines, handy
//! when no other backend is set up.

mod adapter;
mod formatter;
mod lib_logger;
mod logger;
mod sink;

pub use adapter::{wrap_global, wrap_logger, Global, LogWrapper, DEFAULT_TARGET, SEVERITY_KEY};
pub use lib_logger::{LibLogger, Severity};
pub use logger::{CallerFormat, ConsoleConfig, ConsoleLogger, Encoding, LevelFormat};
pub use sink::{open_sink, BufferSink, Sink};
