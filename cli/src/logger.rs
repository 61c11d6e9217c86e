use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn color(level: Level) -> Color {
        match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info => Color::Green,
            Level::Debug => Color::Cyan,
            Level::Trace => Color::Magenta,
        }
    }

    fn write_record(&self, record: &Record) -> std::io::Result<()> {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        stderr.set_color(
            ColorSpec::new()
                .set_fg(Some(Self::color(record.level())))
                .set_bold(true),
        )?;
        write!(stderr, "{:>5}", record.level())?;
        stderr.reset()?;
        writeln!(stderr, " {}: {}", record.target(), record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = self.write_record(record);
        }
    }

    fn flush(&self) {}
}

pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let level = level_for_verbosity(verbosity);
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, LevelFilter::Warn)]
    #[case(1, LevelFilter::Info)]
    #[case(2, LevelFilter::Debug)]
    #[case(3, LevelFilter::Trace)]
    #[case(9, LevelFilter::Trace)]
    fn verbosity_raises_the_level(#[case] verbosity: u8, #[case] expected: LevelFilter) {
        assert_eq!(level_for_verbosity(verbosity), expected);
    }

    #[test]
    fn filters_below_the_level() {
        let logger = StderrLogger {
            level: LevelFilter::Info,
        };
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }
}
