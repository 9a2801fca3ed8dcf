use std::fmt::{self, Display};

pub const RED: &str = "\x1B[1;31m";
pub const GRN: &str = "\x1B[1;32m";
pub const YEL: &str = "\x1B[1;33m";
pub const GRY: &str = "\x1B[1;30m";
pub const BLU: &str = "\x1B[1;94m";
pub const RESET: &str = "\x1B[0m";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Error => RED,
            Level::Warn  => YEL,
            Level::Info  => GRN,
            Level::Debug => GRY,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Level::Error => "error",
            Level::Warn  => "warning",
            Level::Info  => "info",
            Level::Debug => "DEBUG",
        };
        write!(f, "{}{}:{}", self.color(), label, RESET)
    }
}

/// one line of log output, without the trailing newline
pub fn format_line<S: Display>(level: Level, msg: S) -> String {
    format!("[lispy] {} {}", level, msg)
}

pub fn log<S: Display>(level: Level, msg: S) {
    eprintln!("{}", format_line(level, msg));
}

pub fn error<S: Display>(msg: S) {
    log(Level::Error, msg);
}

pub fn warn<S: Display>(msg: S) {
    log(Level::Warn, msg);
}

pub fn info<S: Display>(msg: S) {
    log(Level::Info, msg);
}

pub fn debug<S: Display>(msg: S) {
    log(Level::Debug, msg);
}

// {{{ tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        assert_eq!(format_line(Level::Warn, "history missing"),
                   format!("[lispy] {}warning:{} history missing", YEL, RESET));
        assert_eq!(format_line(Level::Debug, 3),
                   format!("[lispy] {}DEBUG:{} 3", GRY, RESET));
    }
}
// }}}
