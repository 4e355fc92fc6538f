//! Core data types for the schedule generator.

use chrono::Weekday;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::catalog::{self, CatalogError};

/// Campus a meeting takes place at.
#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Campus {
    College,
    Busch,
    Livingston,
    Online,
}

#[pymethods]
impl Campus {
    /// Single-character catalog code for this campus.
    fn code(&self) -> String {
        catalog::campus_code(*self).to_string()
    }
}

/// Minutes-since-midnight interval of a single meeting.
///
/// Invariant: `start_minute <= end_minute`, enforced at construction.
#[pyclass]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSpan {
    #[pyo3(get)]
    pub start_minute: u16,
    #[pyo3(get)]
    pub end_minute: u16,
}

impl TimeSpan {
    /// Construct a span, rejecting reversed ranges.
    pub fn checked(start_minute: u16, end_minute: u16) -> Result<Self, CatalogError> {
        if end_minute < start_minute {
            return Err(CatalogError::ReversedTime {
                start: start_minute,
                end: end_minute,
            });
        }
        Ok(Self {
            start_minute,
            end_minute,
        })
    }
}

#[pymethods]
impl TimeSpan {
    #[new]
    fn new(start_minute: u16, end_minute: u16) -> PyResult<Self> {
        TimeSpan::checked(start_minute, end_minute).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("TimeSpan({}..{})", self.start_minute, self.end_minute)
    }
}

/// A single weekly recurring time/place block belonging to a section.
///
/// `time` is `None` when the catalog reports no meeting time; such a
/// meeting makes no claim on the timeline and never conflicts.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Meeting {
    pub day: Weekday,
    #[pyo3(get, set)]
    pub campus: Campus,
    pub time: Option<TimeSpan>,
    #[pyo3(get, set)]
    pub course_title: String,
}

#[pymethods]
impl Meeting {
    #[new]
    #[pyo3(signature = (day, campus, time=None, course_title=String::new()))]
    fn new(day: &str, campus: Campus, time: Option<TimeSpan>, course_title: String) -> PyResult<Self> {
        let day = catalog::day_from_code(day).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            day,
            campus,
            time,
            course_title,
        })
    }

    /// Single-character day code ("M", "T", "W", "H", "F", "S", "U").
    #[getter(day)]
    fn day_code(&self) -> String {
        catalog::day_code(self.day).to_string()
    }

    #[getter(time)]
    fn time_span(&self) -> Option<TimeSpan> {
        self.time
    }

    fn __repr__(&self) -> String {
        match self.time {
            Some(t) => format!(
                "Meeting({}{} {}-{} {:?})",
                catalog::day_code(self.day),
                catalog::campus_code(self.campus),
                t.start_minute,
                t.end_minute,
                self.course_title
            ),
            None => format!(
                "Meeting({}{} untimed {:?})",
                catalog::day_code(self.day),
                catalog::campus_code(self.campus),
                self.course_title
            ),
        }
    }
}

/// A specific offering of a course: an index plus its meetings.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    #[pyo3(get, set)]
    pub index: String,
    #[pyo3(get, set)]
    pub meetings: Vec<Meeting>,
}

#[pymethods]
impl Section {
    #[new]
    #[pyo3(signature = (index, meetings=Vec::new()))]
    fn new(index: String, meetings: Vec<Meeting>) -> Self {
        Self { index, meetings }
    }

    fn __repr__(&self) -> String {
        format!(
            "Section(index={:?}, meetings={})",
            self.index,
            self.meetings.len()
        )
    }
}

/// The eligible sections for one position in the request; the enumerator
/// picks exactly one element per slot.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseSlot {
    #[pyo3(get, set)]
    pub sections: Vec<Section>,
}

#[pymethods]
impl CourseSlot {
    #[new]
    #[pyo3(signature = (sections=Vec::new()))]
    fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    fn __repr__(&self) -> String {
        format!("CourseSlot(sections={})", self.sections.len())
    }
}

/// One surviving schedule with its score, ready for the reporting pass.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct RankedSchedule {
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub meetings: Vec<Meeting>,
    #[pyo3(get)]
    pub section_indexes: Vec<String>,
}

#[pymethods]
impl RankedSchedule {
    #[new]
    fn new(score: f64, meetings: Vec<Meeting>, section_indexes: Vec<String>) -> Self {
        Self {
            score,
            meetings,
            section_indexes,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "RankedSchedule(score={}, sections={:?})",
            self.score, self.section_indexes
        )
    }
}
