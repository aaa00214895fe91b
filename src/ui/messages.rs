use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}[i]{} {}", FG_BLUE, BOLD, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}[ok]{} {}", FG_GREEN, BOLD, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}[warn]{} {}", FG_YELLOW, BOLD, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}[err]{} {}", FG_RED, BOLD, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}====================== {}\n{}",
        FG_BLUE, BOLD, msg, RESET
    );
}
