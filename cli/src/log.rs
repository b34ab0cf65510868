use std::io::Write;

use chrono::Local;
use env_logger::{
    fmt::{Color, Formatter},
    Env,
};
use log::{Level, Record};

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global logger. `RUST_LOG` overrides the `--verbose` default.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format(write_record)
        .init();
}

const fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Cyan,
        Level::Trace => Color::White,
    }
}

// module path only shows up on debug/trace lines
fn write_record(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let mut level_style = buf.style();
    level_style
        .set_color(level_color(record.level()))
        .set_bold(record.level() <= Level::Warn);

    write!(
        buf,
        "{} {:<5} ",
        Local::now().format(TIMESTAMP_FORMAT),
        level_style.value(record.level().as_str())
    )?;
    if record.level() >= Level::Debug {
        write!(buf, "{}: ", record.module_path().unwrap_or(record.target()))?;
    }
    writeln!(buf, "{}", record.args())
}
