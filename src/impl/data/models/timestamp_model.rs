use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Permissive timestamp parse for backend `date`/`created_at` columns, which
/// arrive as RFC 3339, bare datetimes, or bare dates. Unparsable input is a
/// soft failure; callers treat `Err` as "no usable date".
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimestampModel(pub DateTime<Utc>);

impl FromStr for TimestampModel {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(());
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(TimestampModel(dt.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Ok(TimestampModel(naive.and_utc()));
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            // Bare dates anchor to midnight UTC.
            return Ok(TimestampModel(
                date.and_hms_opt(0, 0, 0)
                    .expect("midnight is always a valid time")
                    .and_utc(),
            ));
        }
        Err(())
    }
}

/// Optional-field helper: `None` for absent, empty, or unparsable values.
pub(crate) fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| TimestampModel::from_str(s).ok()).map(|m| m.0)
}

impl Into<DateTime<Utc>> for TimestampModel {
    fn into(self) -> DateTime<Utc> {
        self.0
    }
}
