use std::fmt;
use std::str::FromStr;

/// Severity of an entry logged through a [`LibLogger`].
///
/// The `log` crate tops out at [`log::Level::Error`], so `Panic` and `Fatal`
/// share that level on the emitted record. Their exact name travels along as
/// the `severity` key/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Panic,
    Fatal,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Panic,
        Severity::Fatal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Panic => "panic",
            Severity::Fatal => "fatal",
        }
    }

    pub fn level(&self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error | Severity::Panic | Severity::Fatal => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(value))
            .copied()
            .ok_or_else(|| format!("Unknown severity: '{}'", value))
    }
}

/// Leveled logging interface libraries can depend on without picking a
/// logging backend.
///
/// Plain methods take their operands as a slice and log the concatenation of
/// each operand's `Display` output. Formatted methods take pre-built
/// [`fmt::Arguments`], see the [`infof!`](crate::infof) family of macros.
///
/// Every method is `#[track_caller]`: implementations can attribute the
/// entry to the code calling the method, also through `dyn LibLogger`.
pub trait LibLogger {
    #[track_caller]
    fn debug(&self, args: &[&dyn fmt::Display]);
    #[track_caller]
    fn info(&self, args: &[&dyn fmt::Display]);
    #[track_caller]
    fn warn(&self, args: &[&dyn fmt::Display]);
    #[track_caller]
    fn error(&self, args: &[&dyn fmt::Display]);
    /// Logs, then panics with the same message.
    #[track_caller]
    fn panic(&self, args: &[&dyn fmt::Display]) -> !;
    /// Logs, then exits the process.
    #[track_caller]
    fn fatal(&self, args: &[&dyn fmt::Display]) -> !;

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>);
    #[track_caller]
    fn panicf(&self, args: fmt::Arguments<'_>) -> !;
    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> !;
}

#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::LibLogger as _;
        $logger.debugf(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::LibLogger as _;
        $logger.infof(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::LibLogger as _;
        $logger.warnf(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::LibLogger as _;
        $logger.errorf(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! panicf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::LibLogger as _;
        $logger.panicf(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::LibLogger as _;
        $logger.fatalf(format_args!($($arg)+))
    }};
}
