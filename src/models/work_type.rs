use serde::{Deserialize, Serialize};

/// How a day was spent. Drives both the calculation branch and the
/// statistics bucket an entry lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    Office,      // O
    Remote,      // R
    AnnualLeave, // A
}

impl WorkType {
    pub fn code(&self) -> &'static str {
        match self {
            WorkType::Office => "O",
            WorkType::Remote => "R",
            WorkType::AnnualLeave => "A",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkType::Office => "office",
            WorkType::Remote => "remote",
            WorkType::AnnualLeave => "annual-leave",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "office" => Some(WorkType::Office),
            "remote" => Some(WorkType::Remote),
            "annual-leave" => Some(WorkType::AnnualLeave),
            _ => None,
        }
    }

    /// Helper: accept either a one-letter code or a full name from the CLI,
    /// case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "o" | "office" => Some(WorkType::Office),
            "r" | "remote" => Some(WorkType::Remote),
            "a" | "l" | "leave" | "annual-leave" => Some(WorkType::AnnualLeave),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Office => "Office",
            WorkType::Remote => "Remote",
            WorkType::AnnualLeave => "Annual leave",
        }
    }

    pub fn is_leave(&self) -> bool {
        matches!(self, WorkType::AnnualLeave)
    }
}
