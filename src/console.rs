//! Terminal output helpers for the check report.
//!
//! All report text goes to stdout as plain human-readable lines; diagnostics
//! go through `tracing` instead. Colors are suppressed when `NO_COLOR` is set.

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn paint(code: &str, text: &str) -> String {
    if colors_enabled() {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn success(message: &str) {
    println!("{} {message}", paint(GREEN, "ok"));
}

pub fn failure(message: &str) {
    println!("{} {message}", paint(RED, "FAIL"));
}

pub fn warning(message: &str) {
    println!("{} {message}", paint(YELLOW, "warn"));
}

pub fn info(message: &str) {
    println!("{} {message}", paint(CYAN, "info"));
}

pub fn section(title: &str) {
    println!();
    println!("{}", paint(GRAY, "----------------------------------------"));
    println!("  {}", paint(CYAN, title));
    println!("{}", paint(GRAY, "----------------------------------------"));
}

pub fn blank() {
    println!();
}
