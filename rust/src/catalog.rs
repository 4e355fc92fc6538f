//! Typed catalog records and parsing of the catalog's wire formats.
//!
//! The frontend hands over course records exactly as the catalog API shapes
//! them: single-character day and campus codes, "HHMM" military times, the
//! empty string for "time unknown". Everything is validated here, once,
//! before any scheduling runs; malformed data is a fault, not something to
//! coerce.

use chrono::Weekday;
use pyo3::prelude::*;
use thiserror::Error;

use crate::models::{Campus, Meeting, TimeSpan};

/// Data-integrity faults in catalog records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("malformed military time {0:?} (expected \"HHMM\" or empty)")]
    BadTime(String),
    #[error("meeting has only one of start/end time")]
    HalfOpenTime,
    #[error("meeting time range reversed: start {start} after end {end}")]
    ReversedTime { start: u16, end: u16 },
    #[error("unknown meeting day code {0:?}")]
    UnknownDay(String),
    #[error("unknown campus code {0:?}")]
    UnknownCampus(String),
}

/// Parse a 4-digit 24-hour military time into minutes since midnight.
///
/// The catalog uses the empty string for meetings without a published time;
/// that maps to `None`. Anything else must be exactly four ASCII digits
/// with in-range hours and minutes.
pub fn parse_military(raw: &str) -> Result<Option<u16>, CatalogError> {
    if raw.is_empty() {
        return Ok(None);
    }
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CatalogError::BadTime(raw.to_string()));
    }
    let hours: u16 = raw[..2]
        .parse()
        .map_err(|_| CatalogError::BadTime(raw.to_string()))?;
    let minutes: u16 = raw[2..]
        .parse()
        .map_err(|_| CatalogError::BadTime(raw.to_string()))?;
    if hours > 23 || minutes > 59 {
        return Err(CatalogError::BadTime(raw.to_string()));
    }
    Ok(Some(hours * 60 + minutes))
}

/// Parse the catalog's single-character meeting-day code.
pub fn day_from_code(code: &str) -> Result<Weekday, CatalogError> {
    match code {
        "M" => Ok(Weekday::Mon),
        "T" => Ok(Weekday::Tue),
        "W" => Ok(Weekday::Wed),
        "H" => Ok(Weekday::Thu),
        "F" => Ok(Weekday::Fri),
        "S" => Ok(Weekday::Sat),
        "U" => Ok(Weekday::Sun),
        other => Err(CatalogError::UnknownDay(other.to_string())),
    }
}

/// Inverse of [`day_from_code`].
pub fn day_code(day: Weekday) -> char {
    match day {
        Weekday::Mon => 'M',
        Weekday::Tue => 'T',
        Weekday::Wed => 'W',
        Weekday::Thu => 'H',
        Weekday::Fri => 'F',
        Weekday::Sat => 'S',
        Weekday::Sun => 'U',
    }
}

/// Parse the catalog's single-character campus code.
pub fn campus_from_code(code: &str) -> Result<Campus, CatalogError> {
    match code {
        "1" => Ok(Campus::College),
        "2" => Ok(Campus::Busch),
        "3" => Ok(Campus::Livingston),
        "O" => Ok(Campus::Online),
        other => Err(CatalogError::UnknownCampus(other.to_string())),
    }
}

/// Inverse of [`campus_from_code`].
pub fn campus_code(campus: Campus) -> char {
    match campus {
        Campus::College => '1',
        Campus::Busch => '2',
        Campus::Livingston => '3',
        Campus::Online => 'O',
    }
}

/// One meeting time exactly as the catalog reports it.
#[pyclass]
#[derive(Clone, Debug)]
pub struct MeetingRecord {
    #[pyo3(get, set)]
    pub meeting_day: String,
    #[pyo3(get, set)]
    pub campus_location: String,
    #[pyo3(get, set)]
    pub start_time_military: String,
    #[pyo3(get, set)]
    pub end_time_military: String,
}

impl MeetingRecord {
    /// Validate this record and build the core meeting type.
    pub fn resolve(&self, course_title: &str) -> Result<Meeting, CatalogError> {
        let day = day_from_code(&self.meeting_day)?;
        let campus = campus_from_code(&self.campus_location)?;
        let start = parse_military(&self.start_time_military)?;
        let end = parse_military(&self.end_time_military)?;
        let time = match (start, end) {
            (Some(s), Some(e)) => Some(TimeSpan::checked(s, e)?),
            (None, None) => None,
            _ => return Err(CatalogError::HalfOpenTime),
        };
        Ok(Meeting {
            day,
            campus,
            time,
            course_title: course_title.to_string(),
        })
    }
}

#[pymethods]
impl MeetingRecord {
    #[new]
    #[pyo3(signature = (meeting_day, campus_location, start_time_military=String::new(), end_time_military=String::new()))]
    fn new(
        meeting_day: String,
        campus_location: String,
        start_time_military: String,
        end_time_military: String,
    ) -> Self {
        Self {
            meeting_day,
            campus_location,
            start_time_military,
            end_time_military,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "MeetingRecord(day={:?}, campus={:?}, start={:?}, end={:?})",
            self.meeting_day, self.campus_location, self.start_time_military, self.end_time_military
        )
    }
}

/// One section as the catalog reports it.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SectionRecord {
    #[pyo3(get, set)]
    pub index: String,
    #[pyo3(get, set)]
    pub meeting_times: Vec<MeetingRecord>,
}

#[pymethods]
impl SectionRecord {
    #[new]
    #[pyo3(signature = (index, meeting_times=Vec::new()))]
    fn new(index: String, meeting_times: Vec<MeetingRecord>) -> Self {
        Self {
            index,
            meeting_times,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SectionRecord(index={:?}, meeting_times={})",
            self.index,
            self.meeting_times.len()
        )
    }
}

/// One course as the catalog reports it.
#[pyclass]
#[derive(Clone, Debug)]
pub struct CourseRecord {
    #[pyo3(get, set)]
    pub course_string: String,
    #[pyo3(get, set)]
    pub title: String,
    #[pyo3(get, set)]
    pub sections: Vec<SectionRecord>,
}

#[pymethods]
impl CourseRecord {
    #[new]
    #[pyo3(signature = (course_string, title, sections=Vec::new()))]
    fn new(course_string: String, title: String, sections: Vec<SectionRecord>) -> Self {
        Self {
            course_string,
            title,
            sections,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CourseRecord(course_string={:?}, title={:?}, sections={})",
            self.course_string,
            self.title,
            self.sections.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: &str, campus: &str, start: &str, end: &str) -> MeetingRecord {
        MeetingRecord {
            meeting_day: day.to_string(),
            campus_location: campus.to_string(),
            start_time_military: start.to_string(),
            end_time_military: end.to_string(),
        }
    }

    #[test]
    fn test_parse_military_valid() {
        assert_eq!(parse_military("0000").unwrap(), Some(0));
        assert_eq!(parse_military("0915").unwrap(), Some(9 * 60 + 15));
        assert_eq!(parse_military("1430").unwrap(), Some(14 * 60 + 30));
        assert_eq!(parse_military("2359").unwrap(), Some(23 * 60 + 59));
    }

    #[test]
    fn test_parse_military_empty_is_unknown() {
        assert_eq!(parse_military("").unwrap(), None);
    }

    #[test]
    fn test_parse_military_rejects_wrong_length() {
        assert_eq!(
            parse_military("915"),
            Err(CatalogError::BadTime("915".to_string()))
        );
        assert_eq!(
            parse_military("09150"),
            Err(CatalogError::BadTime("09150".to_string()))
        );
    }

    #[test]
    fn test_parse_military_rejects_non_numeric() {
        assert_eq!(
            parse_military("9a15"),
            Err(CatalogError::BadTime("9a15".to_string()))
        );
    }

    #[test]
    fn test_parse_military_rejects_out_of_range() {
        assert_eq!(
            parse_military("2460"),
            Err(CatalogError::BadTime("2460".to_string()))
        );
        assert_eq!(
            parse_military("1260"),
            Err(CatalogError::BadTime("1260".to_string()))
        );
    }

    #[test]
    fn test_day_codes_round_trip() {
        for code in ["M", "T", "W", "H", "F", "S", "U"] {
            let day = day_from_code(code).unwrap();
            assert_eq!(day_code(day).to_string(), code);
        }
        assert_eq!(
            day_from_code("X"),
            Err(CatalogError::UnknownDay("X".to_string()))
        );
    }

    #[test]
    fn test_campus_codes_round_trip() {
        for code in ["1", "2", "3", "O"] {
            let campus = campus_from_code(code).unwrap();
            assert_eq!(campus_code(campus).to_string(), code);
        }
        assert_eq!(
            campus_from_code("9"),
            Err(CatalogError::UnknownCampus("9".to_string()))
        );
    }

    #[test]
    fn test_resolve_timed_meeting() {
        let meeting = record("M", "2", "0900", "1020").resolve("Calculus I").unwrap();
        assert_eq!(meeting.day, chrono::Weekday::Mon);
        assert_eq!(meeting.campus, Campus::Busch);
        assert_eq!(
            meeting.time,
            Some(TimeSpan {
                start_minute: 540,
                end_minute: 620
            })
        );
        assert_eq!(meeting.course_title, "Calculus I");
    }

    #[test]
    fn test_resolve_untimed_meeting() {
        let meeting = record("W", "O", "", "").resolve("Async Lecture").unwrap();
        assert_eq!(meeting.time, None);
    }

    #[test]
    fn test_resolve_rejects_half_open_time() {
        assert_eq!(
            record("M", "2", "0900", "").resolve("t"),
            Err(CatalogError::HalfOpenTime)
        );
        assert_eq!(
            record("M", "2", "", "1020").resolve("t"),
            Err(CatalogError::HalfOpenTime)
        );
    }

    #[test]
    fn test_resolve_rejects_reversed_range() {
        assert_eq!(
            record("M", "2", "1020", "0900").resolve("t"),
            Err(CatalogError::ReversedTime {
                start: 620,
                end: 540
            })
        );
    }
}
