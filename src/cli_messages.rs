//! Messages printed by the plain command-line commands (`sellers`, `table`,
//! `set-api-url`, `reset-config`).

const RESET: &str = "\x1b[0m";

fn print_tagged(color: &str, tag: &str, title: &str, details: &str) {
    if details.is_empty() {
        println!("{}[{}]{} {}", color, tag, RESET, title);
    } else {
        println!("{}[{}]{} {}\t {}", color, tag, RESET, title, details);
    }
}

pub fn print_info(title: &str, details: &str) {
    print_tagged("\x1b[1;36m", "INFO", title, details);
}

pub fn print_warn(title: &str, details: &str) {
    print_tagged("\x1b[1;33m", "WARN", title, details);
}

/// Errors go to stderr so piped table output stays clean.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("\x1b[1;31m[ERROR]{} {}", RESET, title);
    if let Some(details) = details {
        eprintln!("\x1b[1;31m[ERROR]{} Details: {}", RESET, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    print_tagged("\x1b[1;32m", "SUCCESS", title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
