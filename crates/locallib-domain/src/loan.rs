//! Book-instance loan status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Availability of a single book copy.
///
/// Stored as a one-character code (`d`, `o`, `a`, `r`). New copies start in
/// `Maintenance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    #[default]
    Maintenance,
    OnLoan,
    Available,
    Reserved,
}

impl LoanStatus {
    /// Storage code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Maintenance => "d",
            Self::OnLoan => "o",
            Self::Available => "a",
            Self::Reserved => "r",
        }
    }

    /// Parse a storage code. Returns `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "d" => Some(Self::Maintenance),
            "o" => Some(Self::OnLoan),
            "a" => Some(Self::Available),
            "r" => Some(Self::Reserved),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::OnLoan => "On loan",
            Self::Available => "Available",
            Self::Reserved => "Reserved",
        }
    }
}

/// A copy is overdue when it has a due date strictly before `today`.
pub fn is_overdue(due_back: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_back.is_some_and(|due| due < today)
}
