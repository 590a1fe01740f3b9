//! Tolerant date/time parsing.
//!
//! The API family this SDK targets emits timestamps in several shapes, so
//! parsing tries an explicit, ordered list of formats and takes the first one
//! that matches. Date-time results are normalized to UTC.
//!
//! None of the shuffler record fields carry timestamps; these helpers stand on
//! their own and are also exposed as serde adapters ([`iso_date_time`],
//! [`option_iso_date_time`]) for record types that do.

use std::fmt;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat, TimeZone,
    Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::DEFAULT_TIME_DATE;
use crate::error::{ParseError, Result};

type Attempt = fn(&str) -> Option<DateTime<Utc>>;

/// Date-time formats in priority order.
const DATE_TIME_ATTEMPTS: &[(&str, Attempt)] = &[
    ("iso-date-time", iso_date_time_with_zone),
    ("iso-offset-date-time", iso_offset_date_time),
    ("iso-instant", iso_instant),
    ("spaced-fraction-offset", spaced_fraction_offset),
    ("spaced-offset", spaced_offset),
    ("spaced-local", spaced_local),
];

// ---------------------------------------------------------------------------
// Date-time
// ---------------------------------------------------------------------------

/// Parse a timestamp in any of the accepted shapes and normalize it to UTC.
///
/// Accepted, in order:
///
/// 1. ISO date-time with optional offset or zone
///    (`2021-06-01T12:00:00+02:00[Europe/Paris]`, `2021-06-01T12:00:00[Europe/Paris]`,
///    `2021-06-01T12:00:00`)
/// 2. ISO date-time with a basic numeric offset (`2021-06-01T12:00:00+0200`)
/// 3. ISO instant (`2021-06-01T12:00:00Z`)
/// 4. `yyyy-MM-dd HH:mm:ss.f` plus offset (`2021-06-01 12:00:00.000Z`)
/// 5. `yyyy-MM-dd HH:mm:ss` plus offset (`2021-06-01 12:00:00+02`)
/// 6. `yyyy-MM-dd HH:mm:ss` with no offset, taken as UTC
pub fn parse_date_time_string(s: &str) -> Result<DateTime<Utc>> {
    for (name, attempt) in DATE_TIME_ATTEMPTS {
        if let Some(parsed) = attempt(s) {
            tracing::trace!(input = s, format = name, "parsed date-time");
            return Ok(parsed);
        }
    }
    tracing::debug!(input = s, "no date-time format matched");
    Err(ParseError::DateTime(s.to_string()))
}

fn iso_date_time_with_zone(s: &str) -> Option<DateTime<Utc>> {
    let (body, zone) = match s.strip_suffix(']').and_then(|rest| rest.rsplit_once('[')) {
        Some((body, zone)) => (body, Some(zone)),
        None => (s, None),
    };
    // A numeric offset wins over a bracketed region id.
    if let Ok(parsed) = DateTime::parse_from_rfc3339(body) {
        return Some(parsed.with_timezone(&Utc));
    }
    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(body, fmt).ok())?;
    match zone {
        Some(zone) => {
            let tz: Tz = zone.parse().ok()?;
            // Ambiguous local times take the earlier offset; skipped ones fail.
            tz.from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
        }
        None => Some(Utc.from_utc_datetime(&naive)),
    }
}

fn iso_offset_date_time(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z")
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn iso_instant(s: &str) -> Option<DateTime<Utc>> {
    let body = s.strip_suffix('Z')?;
    NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn spaced_fraction_offset(s: &str) -> Option<DateTime<Utc>> {
    let (body, offset) = split_offset(s, "yyyy-MM-dd HH:mm:ss".len())?;
    if !body.contains('.') {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(body, "%Y-%m-%d %H:%M:%S%.f").ok()?;
    apply_offset(&naive, offset)
}

fn spaced_offset(s: &str) -> Option<DateTime<Utc>> {
    let (body, offset) = split_offset(s, "yyyy-MM-dd HH:mm:ss".len())?;
    let naive = NaiveDateTime::parse_from_str(body, "%Y-%m-%d %H:%M:%S").ok()?;
    apply_offset(&naive, offset)
}

fn spaced_local(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

// ---------------------------------------------------------------------------
// Time of day
// ---------------------------------------------------------------------------

/// A time of day paired with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> Self {
        Self { time, offset }
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// This time placed on the reference date (2020-01-01), in UTC.
    pub fn on_reference_date(&self) -> Result<DateTime<Utc>> {
        let date = reference_date().ok_or_else(|| ParseError::Time(self.to_string()))?;
        apply_offset(&date.and_time(self.time), self.offset)
            .ok_or_else(|| ParseError::Time(self.to_string()))
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time.format("%H:%M:%S%.f"), self.offset)
    }
}

impl Serialize for OffsetTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OffsetTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_time_string(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse a bare time of day (`HH:mm`, `HH:mm:ss`, `HH:mm:ss.f`) with an
/// optional offset.
///
/// The missing date defaults to 2020-01-01 and a missing offset to UTC. A
/// given offset is kept, so `"12:30+02:00"` yields `12:30:00+02:00`; use
/// [`OffsetTime::on_reference_date`] for the UTC instant.
pub fn parse_time_string(s: &str) -> Result<OffsetTime> {
    let (body, offset) = match split_offset(s, "HH:mm".len()) {
        Some(split) => split,
        None => (s, utc_offset()),
    };
    let time = ["%H:%M:%S%.f", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(body, fmt).ok())
        .ok_or_else(|| ParseError::Time(s.to_string()))?;
    tracing::trace!(input = s, %time, %offset, "parsed time");
    Ok(OffsetTime::new(time, offset))
}

// ---------------------------------------------------------------------------
// Serde adapters
// ---------------------------------------------------------------------------

/// `#[serde(with = "iso_date_time")]` for `DateTime<Utc>` fields.
///
/// Reads through [`parse_date_time_string`]; writes ISO-8601 with an extended
/// offset (`2021-06-01T12:00:00+00:00`).
pub mod iso_date_time {
    use super::*;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date_time(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_date_time_string(&raw).map_err(serde::de::Error::custom)
    }
}

/// Like [`iso_date_time`] for `Option<DateTime<Utc>>`; `null` maps to `None`.
pub mod option_iso_date_time {
    use super::*;

    pub fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_some(&format_date_time(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_date_time_string(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

/// ISO-8601 extended offset form, never an epoch number.
pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

fn reference_date() -> Option<NaiveDate> {
    let (year, month, day) = DEFAULT_TIME_DATE;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn apply_offset(naive: &NaiveDateTime, offset: FixedOffset) -> Option<DateTime<Utc>> {
    offset
        .from_local_datetime(naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Split a trailing offset (`Z`, `±hh`, `±hhmm`, `±hh:mm`) off `s`.
///
/// Sign characters before `min_body_len` belong to the value itself (the
/// dashes of a date), so an offset must start at or after it.
fn split_offset(s: &str, min_body_len: usize) -> Option<(&str, FixedOffset)> {
    if let Some(body) = s.strip_suffix('Z') {
        return Some((body, utc_offset()));
    }
    let idx = s.rfind(['+', '-'])?;
    if idx < min_body_len {
        return None;
    }
    let (body, offset) = s.split_at(idx);
    Some((body, parse_offset(offset)?))
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, digits) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = match digits.len() {
        2 | 4 => digits.to_string(),
        5 if digits.as_bytes()[2] == b':' => digits.replacen(':', "", 1),
        _ => return None,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = if digits.len() == 4 { digits[2..].parse().ok()? } else { 0 };
    if hours > 18 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
