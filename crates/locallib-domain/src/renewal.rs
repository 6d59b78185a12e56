//! Loan renewal date rules.
//!
//! A librarian may push a loan's due date to any day from today up to four
//! weeks ahead, both ends inclusive. The renewal form pre-fills three weeks.

use chrono::{Days, NaiveDate};

/// Furthest a renewal may reach, in days from today.
pub const RENEWAL_WINDOW_DAYS: u64 = 28;

/// Pre-filled renewal offset, in days from today.
pub const DEFAULT_RENEWAL_DAYS: u64 = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenewalDateError {
    #[error("Invalid date - renewal in past")]
    InPast,
    #[error("Invalid date - renewal more than 4 weeks ahead")]
    TooFarAhead,
}

/// Check a proposed due date against `today`.
///
/// Returns the date unchanged when `today <= proposed <= today + 28 days`.
pub fn validate_renewal_date(
    proposed: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, RenewalDateError> {
    if proposed < today {
        return Err(RenewalDateError::InPast);
    }
    match today.checked_add_days(Days::new(RENEWAL_WINDOW_DAYS)) {
        Some(latest) if proposed <= latest => Ok(proposed),
        // Past the end of the calendar: nothing later than today can be valid.
        Some(_) | None => Err(RenewalDateError::TooFarAhead),
    }
}

/// Date offered when the renewal form is first shown.
pub fn default_renewal_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(DEFAULT_RENEWAL_DAYS))
        .unwrap_or(today)
}
