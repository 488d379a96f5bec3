use clap::{AppSettings, Parser};
use log::LevelFilter;
use log4lib_wrapper::{CallerFormat, ConsoleConfig, Encoding, LevelFormat, Severity};
use termcolor::ColorChoice;

#[derive(Parser, Debug)]
#[clap(
    name = "log4lib-probe",
    version,
    long_version = long_version_output(),
    verbatim_doc_comment,
    setting(AppSettings::DeriveDisplayOrder)
)]
/**
Log one entry through a LibLogger wrapping the global `log` logger.

## Usage examples

    log4lib-probe info coucou joe
      Print "coucoujoe" at the info level.

    log4lib-probe --caller warn coucou
      Print the entry with the location of the call.

    log4lib-probe --output=probe.log --output=stdout error coucou
      Append the entry to probe.log and print it.

    log4lib-probe fatal coucou
      Print the entry and exit with status 1.
*/
pub struct Probe {
    /// Most verbose level written
    #[clap(long, default_value = "debug", help_heading = "LOGGER")]
    pub level: LevelFilter,

    /// Write to stdout, stderr or a file path, can be repeated. Defaults to stdout
    #[clap(long = "output", value_name = "PATH", help_heading = "LOGGER")]
    pub outputs: Vec<String>,

    /// Print the caller of the entry
    #[clap(long, help_heading = "OUTPUT")]
    pub caller: bool,

    /// Print the full caller path
    #[clap(long, help_heading = "OUTPUT")]
    pub full_caller: bool,

    /// Omit the level of the entry
    #[clap(long = "no-level", help_heading = "OUTPUT", parse(from_flag = std::ops::Not::not))]
    pub print_level: bool,

    /// Print the level in capitals
    #[clap(long, help_heading = "OUTPUT")]
    pub capital: bool,

    /// Enable color output
    #[clap(long = "color", help_heading = "OUTPUT")]
    pub color: bool,

    /// Disable color output
    #[clap(long = "no-color", help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Severity of the entry: debug, info, warn, error, panic or fatal
    #[clap(name = "severity")]
    pub severity: Severity,

    /// Operands of the entry, logged without separators
    #[clap(name = "operands")]
    pub operands: Vec<String>,
}

impl Probe {
    /// Return color config option value
    pub fn color(&self) -> ColorChoice {
        if self.no_color {
            return ColorChoice::Never;
        }
        if self.color {
            return ColorChoice::Always;
        }
        ColorChoice::Never // By default color is turned off
    }

    pub fn encoding(&self) -> Encoding {
        let level = if !self.print_level {
            None
        } else if self.capital {
            Some(LevelFormat::Capital)
        } else {
            Some(LevelFormat::Lowercase)
        };
        let caller = if self.full_caller {
            Some(CallerFormat::Full)
        } else if self.caller {
            Some(CallerFormat::Short)
        } else {
            None
        };
        Encoding {
            level,
            caller,
            message: true,
        }
    }

    pub fn console_config(&self) -> ConsoleConfig {
        let output_paths = if self.outputs.is_empty() {
            vec!["stdout".to_string()]
        } else {
            self.outputs.clone()
        };
        ConsoleConfig {
            level: self.level,
            encoding: self.encoding(),
            color: self.color(),
            output_paths,
            error_output_paths: vec!["stderr".to_string()],
        }
    }
}

// Print the long version label including the target for which it was built
fn long_version_output() -> &'static str {
    concat!(
        clap::crate_version!(),
        "\n",
        env!("LOG4LIB_BUILD_TARGET_TRIPLE")
    )
}
