use log::{Log, Metadata, Record};
use std::fmt;
use std::panic::Location;
use std::process;

use crate::lib_logger::{LibLogger, Severity};

/// Target set on records when none was configured with [`LogWrapper::with_target`].
pub const DEFAULT_TARGET: &str = "log4lib";
/// Key of the key/value pair carrying the [`Severity`] name on every record.
pub const SEVERITY_KEY: &str = "severity";

/// Wraps a [`log::Log`] implementation so it can be used as a [`LibLogger`].
///
/// The caller location of every entry is the code calling the `LibLogger`
/// method, not this wrapper. Filtering, formatting and output are left to
/// the wrapped logger.
///
/// ```
/// use log4lib_wrapper::{infof, wrap_logger, BufferSink, ConsoleLogger, Encoding, LibLogger};
///
/// let buffer = BufferSink::new();
/// let console = ConsoleLogger::new(log::LevelFilter::Debug, Encoding::default())
///     .with_output(buffer.clone().into_sink());
/// let logger = wrap_logger(&console);
/// logger.info(&[&"coucou", &"joe"]);
/// infof!(logger, "coucou {} {} :)", "joe", 12);
/// assert_eq!(buffer.contents(), "info\tcoucoujoe\ninfo\tcoucou joe 12 :)\n");
/// ```
#[derive(Clone)]
pub struct LogWrapper<L> {
    logger: L,
    target: String,
}

/// Wraps `logger` as a [`LibLogger`].
///
/// Pass a reference, `Box` or `Arc` to share one logger between several
/// wrappers.
pub fn wrap_logger<L: Log>(logger: L) -> LogWrapper<L> {
    LogWrapper::new(logger)
}

/// Wraps the logger installed with [`log::set_logger`] or [`log::set_boxed_logger`].
pub fn wrap_global() -> LogWrapper<Global> {
    LogWrapper::new(Global)
}

impl<L: Log> LogWrapper<L> {
    pub fn new(logger: L) -> Self {
        Self {
            logger,
            target: DEFAULT_TARGET.to_string(),
        }
    }

    /// Use `target` as the `log` target of every record.
    pub fn with_target(self, target: impl Into<String>) -> Self {
        Self {
            logger: self.logger,
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn get_ref(&self) -> &L {
        &self.logger
    }

    pub fn into_inner(self) -> L {
        self.logger
    }

    fn emit(&self, severity: Severity, args: fmt::Arguments<'_>, caller: &'static Location<'static>) {
        self.logger.log(
            &Record::builder()
                .args(args)
                .level(severity.level())
                .target(&self.target)
                .file_static(Some(caller.file()))
                .line(Some(caller.line()))
                .key_values(&(SEVERITY_KEY, severity.as_str()))
                .build(),
        );
    }
}

impl<L> fmt::Debug for LogWrapper<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogWrapper")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

// Writes every operand in order, without separators.
struct Concat<'a, 'b>(&'a [&'b dyn fmt::Display]);

impl fmt::Display for Concat<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for operand in self.0 {
            write!(f, "{}", operand)?;
        }
        Ok(())
    }
}

impl<L: Log> LibLogger for LogWrapper<L> {
    #[track_caller]
    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.debugf(format_args!("{}", Concat(args)))
    }

    #[track_caller]
    fn info(&self, args: &[&dyn fmt::Display]) {
        self.infof(format_args!("{}", Concat(args)))
    }

    #[track_caller]
    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.warnf(format_args!("{}", Concat(args)))
    }

    #[track_caller]
    fn error(&self, args: &[&dyn fmt::Display]) {
        self.errorf(format_args!("{}", Concat(args)))
    }

    #[track_caller]
    fn panic(&self, args: &[&dyn fmt::Display]) -> ! {
        self.panicf(format_args!("{}", Concat(args)))
    }

    #[track_caller]
    fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        self.fatalf(format_args!("{}", Concat(args)))
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, args, Location::caller());
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, args, Location::caller());
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, args, Location::caller());
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Error, args, Location::caller());
    }

    #[track_caller]
    fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        // Rendered once so the panic carries exactly the logged message
        let message = args.to_string();
        self.emit(Severity::Panic, format_args!("{}", message), Location::caller());
        self.logger.flush();
        panic!("{}", message)
    }

    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.emit(Severity::Fatal, format_args!("{}", message), Location::caller());
        self.logger.flush();
        process::exit(1)
    }
}

/// Forwards to the process wide `log` logger, honoring [`log::max_level`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl Log for Global {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level() && log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() <= log::max_level() {
            log::logger().log(record);
        }
    }

    fn flush(&self) {
        log::logger().flush();
    }
}
