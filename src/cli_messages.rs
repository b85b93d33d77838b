//! One-line status messages for the dashboard's commands
//!
//! `analyze`, `seed`, `snapshot` and `config` report through these, and the
//! headless console uses them for results and notices. Each line is a
//! colored `[TAG]`, a title and optional details.

/// Kind of status line, which fixes its tag and color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warn,
    Error,
    Success,
}

impl MessageKind {
    fn tag(self) -> &'static str {
        match self {
            MessageKind::Info => "INFO",
            MessageKind::Warn => "WARN",
            MessageKind::Error => "ERROR",
            MessageKind::Success => "SUCCESS",
        }
    }

    fn color(self) -> &'static str {
        match self {
            MessageKind::Info => "\x1b[1;33m",
            MessageKind::Warn => "\x1b[1;91m",
            MessageKind::Error => "\x1b[1;31m",
            MessageKind::Success => "\x1b[1;32m",
        }
    }

    fn prefix(self) -> String {
        format!("{}[{}]\x1b[0m", self.color(), self.tag())
    }
}

/// Status line with details after a tab. Empty details leave just the title.
pub fn format_message(kind: MessageKind, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", kind.prefix(), title)
    } else {
        format!("{} {}\t {}", kind.prefix(), title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Info, title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Warn, title, details));
}

/// Errors put their details on a second tagged line.
pub fn print_error(title: &str, details: Option<&str>) {
    println!("{}", format_message(MessageKind::Error, title, ""));
    if let Some(details) = details {
        println!("{} Details: {}", MessageKind::Error.prefix(), details);
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_message(MessageKind::Success, title, details));
}

/// `print_cmd_info!(title, fmt, args...)`
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// `print_cmd_warn!(title, fmt, args...)`
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// `print_cmd_error!(title)` or `print_cmd_error!(title, details)`
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

/// `print_cmd_success!(title, fmt, args...)`
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
