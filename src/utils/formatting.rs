//! Formatting utilities used for CLI outputs.

use crate::models::WorkType;
use crate::utils::colors::{BLUE, CYAN, MAGENTA};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Label and ANSI color for a work type.
pub fn describe_work_type(work_type: WorkType) -> (&'static str, &'static str) {
    match work_type {
        WorkType::Office => (work_type.label(), BLUE),
        WorkType::Remote => (work_type.label(), CYAN),
        WorkType::AnnualLeave => (work_type.label(), MAGENTA),
    }
}
