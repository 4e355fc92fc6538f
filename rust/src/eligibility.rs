//! Course-slot construction: which sections are even candidates.
//!
//! The inclusion decisions (open enrollment, manual overrides, index
//! markers, day/campus/cutoff exclusions) are expressed as a declarative
//! rule list evaluated uniformly per section, so a new constraint is a new
//! variant rather than another inline conditional.

use chrono::Weekday;
use pyo3::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::catalog::{self, CatalogError, CourseRecord};
use crate::models::{Campus, CourseSlot, Meeting, Section};

/// Errors that can occur while resolving the request into course slots.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("course not found in catalog: {0}")]
    UnknownCourse(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One position in the request: a choice among the pooled sections of one
/// or more alternative course identifiers.
#[pyclass]
#[derive(Clone, Debug)]
pub struct SlotRequest {
    #[pyo3(get, set)]
    pub courses: Vec<String>,
}

#[pymethods]
impl SlotRequest {
    #[new]
    fn new(courses: Vec<String>) -> Self {
        Self { courses }
    }

    fn __repr__(&self) -> String {
        format!("SlotRequest(courses={:?})", self.courses)
    }
}

/// Which section indices are currently open, and which are taken
/// regardless of availability (already registered, manual overrides).
#[derive(Clone, Debug, Default)]
pub struct Availability {
    pub open: FxHashSet<String>,
    pub registered: FxHashSet<String>,
}

impl Availability {
    pub fn admits(&self, index: &str) -> bool {
        self.open.contains(index) || self.registered.contains(index)
    }
}

/// A declarative section-inclusion rule.
///
/// Day fields use the catalog's single-character codes and are validated
/// before any section is examined. `SkipIndexPrefix` is scoped to one
/// course; the meeting-level rules apply to every slot.
#[pyclass]
#[derive(Clone, Debug)]
pub enum EligibilityRule {
    /// Skip sections of `course` whose index starts with `prefix`.
    SkipIndexPrefix { course: String, prefix: String },
    /// Drop sections with any meeting on this day.
    ExcludeDay { day: String },
    /// Drop sections with any meeting at this campus.
    ExcludeCampus { campus: Campus },
    /// Drop sections with any meeting outside this campus list.
    LimitCampuses { allowed: Vec<Campus> },
    /// Drop sections with a meeting on `day` ending after `minute`.
    ExcludeEndingAfter { day: String, minute: u16 },
}

/// Rule with day codes resolved, ready to evaluate.
enum CompiledRule {
    SkipIndexPrefix { course: String, prefix: String },
    ExcludeDay(Weekday),
    ExcludeCampus(Campus),
    LimitCampuses(Vec<Campus>),
    ExcludeEndingAfter { day: Weekday, minute: u16 },
}

fn compile_rules(rules: &[EligibilityRule]) -> Result<Vec<CompiledRule>, PlanError> {
    rules
        .iter()
        .map(|rule| {
            Ok(match rule {
                EligibilityRule::SkipIndexPrefix { course, prefix } => {
                    CompiledRule::SkipIndexPrefix {
                        course: course.clone(),
                        prefix: prefix.clone(),
                    }
                }
                EligibilityRule::ExcludeDay { day } => {
                    CompiledRule::ExcludeDay(catalog::day_from_code(day)?)
                }
                EligibilityRule::ExcludeCampus { campus } => CompiledRule::ExcludeCampus(*campus),
                EligibilityRule::LimitCampuses { allowed } => {
                    CompiledRule::LimitCampuses(allowed.clone())
                }
                EligibilityRule::ExcludeEndingAfter { day, minute } => {
                    CompiledRule::ExcludeEndingAfter {
                        day: catalog::day_from_code(day)?,
                        minute: *minute,
                    }
                }
            })
        })
        .collect()
}

impl CompiledRule {
    fn skips_section(&self, course: &str, index: &str) -> bool {
        match self {
            CompiledRule::SkipIndexPrefix { course: c, prefix } => {
                c == course && index.starts_with(prefix.as_str())
            }
            _ => false,
        }
    }

    fn rejects_meeting(&self, meeting: &Meeting) -> bool {
        match self {
            CompiledRule::SkipIndexPrefix { .. } => false,
            CompiledRule::ExcludeDay(day) => meeting.day == *day,
            CompiledRule::ExcludeCampus(campus) => meeting.campus == *campus,
            CompiledRule::LimitCampuses(allowed) => !allowed.contains(&meeting.campus),
            CompiledRule::ExcludeEndingAfter { day, minute } => {
                meeting.day == *day && meeting.time.is_some_and(|t| t.end_minute > *minute)
            }
        }
    }
}

/// Resolve the request into one eligible-section list per slot.
///
/// Fails fast on unknown course identifiers, malformed catalog data in any
/// admitted section, and bad day codes in rules. A slot that filters down
/// to zero sections is not an error; it just empties the product.
pub fn build_course_slots(
    catalog: &FxHashMap<String, CourseRecord>,
    requests: &[SlotRequest],
    availability: &Availability,
    rules: &[EligibilityRule],
) -> Result<Vec<CourseSlot>, PlanError> {
    let compiled = compile_rules(rules)?;

    let mut slots = Vec::with_capacity(requests.len());
    for request in requests {
        let mut sections = Vec::new();
        for course_id in &request.courses {
            let course = catalog
                .get(course_id)
                .ok_or_else(|| PlanError::UnknownCourse(course_id.clone()))?;
            for record in &course.sections {
                if !availability.admits(&record.index) {
                    continue;
                }
                if compiled
                    .iter()
                    .any(|r| r.skips_section(course_id, &record.index))
                {
                    continue;
                }
                // Validate every meeting before filtering, so bad data in
                // an admitted section always surfaces.
                let mut meetings = Vec::with_capacity(record.meeting_times.len());
                for meeting_record in &record.meeting_times {
                    meetings.push(meeting_record.resolve(&course.title)?);
                }
                if meetings
                    .iter()
                    .any(|m| compiled.iter().any(|r| r.rejects_meeting(m)))
                {
                    continue;
                }
                sections.push(Section {
                    index: record.index.clone(),
                    meetings,
                });
            }
        }
        slots.push(CourseSlot { sections });
    }
    Ok(slots)
}
