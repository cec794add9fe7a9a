use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use fractic_server_error::{CriticalError, ServerError};

/// Inclusive UTC range from the 1st 00:00:00.000 to the last day 23:59:59.999
/// of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// The month window containing the given instant.
    pub fn containing(now: DateTime<Utc>) -> Result<Self, ServerError> {
        let start = Utc
            .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .single()
            .ok_or_else(|| {
                CriticalError::with_debug(
                    "month window start unexpectedly resulted in invalid date",
                    &format!("year: {}, month: {}", now.year(), now.month()),
                )
            })?;
        let (next_year, next_month) = if now.month() == 12 {
            (now.year() + 1, 1)
        } else {
            (now.year(), now.month() + 1)
        };
        let next_start = Utc
            .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| {
                CriticalError::with_debug(
                    "month window end unexpectedly resulted in invalid date",
                    &format!("year: {}, month: {}", next_year, next_month),
                )
            })?;
        Ok(Self {
            start,
            end: next_start - Duration::milliseconds(1),
        })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
