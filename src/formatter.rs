use log::kv::{Key, Source};
use log::{Level, Record};
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::adapter::SEVERITY_KEY;
use crate::logger::{CallerFormat, Encoding, LevelFormat};

const FIELD_SEPARATOR: &str = "\t";

pub fn color(fg: Color) -> ColorSpec {
    let mut cs = ColorSpec::new();
    cs.set_fg(Some(fg));
    cs
}

fn intense_color(fg: Color) -> ColorSpec {
    let mut cs = color(fg);
    cs.set_intense(true);
    cs
}

pub fn level_color(level: Level, severity: &str) -> ColorSpec {
    match severity {
        "panic" | "fatal" => {
            let mut cs = intense_color(Color::Red);
            cs.set_bold(true);
            cs
        }
        _ => match level {
            Level::Error => color(Color::Red),
            Level::Warn => color(Color::Yellow),
            Level::Info => color(Color::Green),
            Level::Debug => color(Color::Blue),
            Level::Trace => intense_color(Color::Blue),
        },
    }
}

/// Name of the entry's severity: the `severity` key/value when the record
/// carries one, the record level otherwise.
pub fn severity_name(record: &Record<'_>) -> String {
    match record.key_values().get(Key::from_str(SEVERITY_KEY)) {
        Some(value) => value.to_string(),
        None => record.level().as_str().to_lowercase(),
    }
}

fn encoded_level(name: &str, format: LevelFormat) -> String {
    match format {
        LevelFormat::Lowercase => name.to_lowercase(),
        LevelFormat::Capital => name.to_uppercase(),
    }
}

// Parent directory and file name, "src/main.rs" for "/app/src/main.rs"
pub fn short_path(file: &str) -> &str {
    let separators: &[char] = &['/', '\\'];
    match file.rfind(separators) {
        Some(last) => match file[..last].rfind(separators) {
            Some(parent) => &file[parent + 1..],
            None => file,
        },
        None => file,
    }
}

fn encoded_caller(record: &Record<'_>, format: CallerFormat) -> Option<String> {
    let file = record.file()?;
    let file = match format {
        CallerFormat::Short => short_path(file),
        CallerFormat::Full => file,
    };
    match record.line() {
        Some(line) => Some(format!("{}:{}", file, line)),
        None => Some(file.to_string()),
    }
}

/// Writes `record` as one console line: level, caller and `message` separated
/// by tabs, leaving out the fields `encoding` disables.
///
/// `message` is the already rendered `record.args()`.
pub fn formatted_record(
    out: &mut dyn WriteColor,
    record: &Record<'_>,
    message: &str,
    encoding: &Encoding,
) -> io::Result<()> {
    let mut separate = false;
    if let Some(format) = encoding.level {
        let name = severity_name(record);
        out.set_color(&level_color(record.level(), &name))?;
        write!(out, "{}", encoded_level(&name, format))?;
        out.reset()?;
        separate = true;
    }
    if let Some(caller) = encoding
        .caller
        .and_then(|format| encoded_caller(record, format))
    {
        if separate {
            write!(out, "{}", FIELD_SEPARATOR)?;
        }
        write!(out, "{}", caller)?;
        separate = true;
    }
    if encoding.message {
        if separate {
            write!(out, "{}", FIELD_SEPARATOR)?;
        }
        write!(out, "{}", message)?;
    }
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{color, formatted_record, intense_color, level_color, severity_name, short_path};
    use crate::adapter::SEVERITY_KEY;
    use crate::logger::{CallerFormat, Encoding, LevelFormat};
    use log::{Level, Record};
    use termcolor::{Buffer, Color};

    fn render(encoding: &Encoding, record: &Record<'_>) -> String {
        let mut out = Buffer::no_color();
        formatted_record(&mut out, record, &record.args().to_string(), encoding)
            .expect("Unable to format record");
        String::from_utf8_lossy(out.as_slice()).to_string()
    }

    fn caller_encoding(format: CallerFormat) -> Encoding {
        Encoding {
            caller: Some(format),
            ..Encoding::default()
        }
    }

    #[test]
    fn level_and_message() {
        let output = render(
            &Encoding::default(),
            &Record::builder()
                .args(format_args!("coucou {}", "joe"))
                .level(Level::Warn)
                .build(),
        );
        assert_eq!(output, "warn\tcoucou joe\n");
    }

    #[test]
    fn capital_level() {
        let encoding = Encoding {
            level: Some(LevelFormat::Capital),
            ..Encoding::default()
        };
        let output = render(
            &encoding,
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Error)
                .build(),
        );
        assert_eq!(output, "ERROR\tcoucou\n");
    }

    #[test]
    fn severity_key_overrides_level_name() {
        let output = render(
            &Encoding::default(),
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Error)
                .key_values(&(SEVERITY_KEY, "fatal"))
                .build(),
        );
        assert_eq!(output, "fatal\tcoucou\n");
    }

    #[test]
    fn severity_name_from_level() {
        assert_eq!(
            severity_name(&Record::builder().level(Level::Trace).build()),
            "trace"
        );
        assert_eq!(
            severity_name(
                &Record::builder()
                    .level(Level::Error)
                    .key_values(&(SEVERITY_KEY, "panic"))
                    .build()
            ),
            "panic"
        );
    }

    #[test]
    fn short_caller() {
        let output = render(
            &caller_encoding(CallerFormat::Short),
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Info)
                .file(Some("/home/joe/project/tests/wrap.rs"))
                .line(Some(12))
                .build(),
        );
        assert_eq!(output, "info\ttests/wrap.rs:12\tcoucou\n");
    }

    #[test]
    fn full_caller() {
        let output = render(
            &caller_encoding(CallerFormat::Full),
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Info)
                .file(Some("/home/joe/project/tests/wrap.rs"))
                .line(Some(12))
                .build(),
        );
        assert_eq!(output, "info\t/home/joe/project/tests/wrap.rs:12\tcoucou\n");
    }

    #[test]
    fn caller_without_location() {
        let output = render(
            &caller_encoding(CallerFormat::Short),
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Info)
                .build(),
        );
        assert_eq!(output, "info\tcoucou\n");

        let output = render(
            &caller_encoding(CallerFormat::Short),
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Info)
                .file(Some("src/main.rs"))
                .build(),
        );
        assert_eq!(output, "info\tsrc/main.rs\tcoucou\n");
    }

    #[test]
    fn caller_only() {
        let encoding = Encoding {
            level: None,
            caller: Some(CallerFormat::Short),
            message: false,
        };
        let output = render(
            &encoding,
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Info)
                .file(Some("tests/wrap.rs"))
                .line(Some(3))
                .build(),
        );
        assert_eq!(output, "tests/wrap.rs:3\n");
    }

    #[test]
    fn colored_level() {
        let mut out = Buffer::ansi();
        formatted_record(
            &mut out,
            &Record::builder()
                .args(format_args!("coucou"))
                .level(Level::Error)
                .build(),
            "coucou",
            &Encoding::default(),
        )
        .unwrap();
        let output = String::from_utf8_lossy(out.as_slice()).to_string();
        assert!(output.contains("\u{1b}[31merror"));
        assert!(output.ends_with("\u{1b}[0m\tcoucou\n"));
    }

    #[test]
    fn panic_level_color() {
        let spec = level_color(Level::Error, "panic");
        assert_eq!(spec.fg(), Some(&Color::Red));
        assert!(spec.intense());
        assert!(spec.bold());
        assert_eq!(level_color(Level::Trace, "trace"), intense_color(Color::Blue));
        assert_eq!(level_color(Level::Warn, "warn"), color(Color::Yellow));
    }

    #[test]
    fn short_paths() {
        assert_eq!(short_path("/home/joe/project/src/main.rs"), "src/main.rs");
        assert_eq!(short_path("src/main.rs"), "src/main.rs");
        assert_eq!(short_path("main.rs"), "main.rs");
        assert_eq!(short_path("C:\\project\\src\\lib.rs"), "src\\lib.rs");
    }
}
