use clap::Parser;
use log4lib_wrapper::{wrap_global, LibLogger, Severity};
use std::fmt::Display;

mod config;

use config::Probe;

fn main() {
    let options = Probe::parse();
    init_logger(&options);

    let operands = options
        .operands
        .iter()
        .map(|operand| operand as &dyn Display)
        .collect::<Vec<&dyn Display>>();
    let logger = wrap_global().with_target("log4lib-probe");
    match options.severity {
        Severity::Debug => logger.debug(&operands),
        Severity::Info => logger.info(&operands),
        Severity::Warn => logger.warn(&operands),
        Severity::Error => logger.error(&operands),
        Severity::Panic => logger.panic(&operands),
        Severity::Fatal => logger.fatal(&operands),
    }
    log::logger().flush();
}

fn init_logger(options: &Probe) {
    let result = options
        .console_config()
        .build()
        .map_err(|error| error.to_string())
        .and_then(|logger| {
            log::set_boxed_logger(Box::new(logger)).map_err(|error| error.to_string())
        })
        .map(|()| log::set_max_level(options.level));
    if let Err(error) = result {
        eprintln!(
            "An error occurred while initializing the logger. \
            Cannot continue.\n{}",
            error
        );
        std::process::exit(1)
    }
}
