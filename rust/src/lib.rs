//! Rust core of the sked schedule generator.
//!
//! The Python frontend retrieves the course catalog and section
//! availability and prints results; this crate owns the data model and the
//! whole enumerate/filter/score pipeline. Everything is usable as a plain
//! Rust library; the PyO3 wrappers below are a thin boundary that converts
//! collections and maps core errors onto `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashSet;

pub mod cache;
pub mod catalog;
pub mod compat;
pub mod config;
pub mod eligibility;
pub mod enumerate;
pub mod filters;
pub mod logging;
pub mod models;
pub mod ranking;
pub mod scoring;

pub use cache::ConflictCache;
pub use catalog::{parse_military, CatalogError, CourseRecord, MeetingRecord, SectionRecord};
pub use compat::{meetings_compatible, sections_compatible};
pub use config::{CampusPolicy, PlannerConfig};
pub use eligibility::{build_course_slots, Availability, EligibilityRule, PlanError, SlotRequest};
pub use enumerate::ScheduleEnumerator;
pub use filters::{daily_transfers_exceed, max_daily_load, transfers_in_day};
pub use models::{Campus, CourseSlot, Meeting, RankedSchedule, Section, TimeSpan};
pub use ranking::rank_schedules;
pub use scoring::{average_end, score_schedule, total_day_span, ScoreError};

/// Resolve raw catalog records into one eligible-section slot per request.
///
/// # Arguments
/// * `catalog` - Course records as retrieved from the catalog API
/// * `requests` - Ordered course slots; each may pool alternative courses
/// * `open_sections` - Section indices with open enrollment
/// * `registered` - Section indices to include regardless of availability
/// * `rules` - Declarative inclusion rules
///
/// # Raises
/// * ValueError on unknown courses, malformed records, or bad rule codes
#[pyfunction]
#[pyo3(signature = (catalog, requests, open_sections, registered, rules=Vec::new()))]
fn py_build_course_slots(
    catalog: Vec<CourseRecord>,
    requests: Vec<SlotRequest>,
    open_sections: HashSet<String>,
    registered: HashSet<String>,
    rules: Vec<EligibilityRule>,
) -> PyResult<Vec<CourseSlot>> {
    // Std collections at the boundary for PyO3 conversions, Fx inside.
    let catalog: FxHashMap<String, CourseRecord> = catalog
        .into_iter()
        .map(|c| (c.course_string.clone(), c))
        .collect();
    let availability = Availability {
        open: open_sections.into_iter().collect(),
        registered: registered.into_iter().collect(),
    };
    build_course_slots(&catalog, &requests, &availability, &rules)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Enumerate conflict-free schedules, apply the post-filters, and return
/// the survivors scored and sorted ascending (most desirable first).
///
/// # Raises
/// * ValueError on an unknown scoring strategy
#[pyfunction]
#[pyo3(signature = (slots, config=None))]
fn py_rank_schedules(
    slots: Vec<CourseSlot>,
    config: Option<PlannerConfig>,
) -> PyResult<Vec<RankedSchedule>> {
    let config = config.unwrap_or_default();
    rank_schedules(&slots, &config).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// The sked.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Campus>()?;
    m.add_class::<TimeSpan>()?;
    m.add_class::<Meeting>()?;
    m.add_class::<Section>()?;
    m.add_class::<CourseSlot>()?;
    m.add_class::<RankedSchedule>()?;

    // Catalog records and request types
    m.add_class::<MeetingRecord>()?;
    m.add_class::<SectionRecord>()?;
    m.add_class::<CourseRecord>()?;
    m.add_class::<SlotRequest>()?;
    m.add_class::<EligibilityRule>()?;

    // Config types
    m.add_class::<CampusPolicy>()?;
    m.add_class::<PlannerConfig>()?;

    // Pipeline
    m.add_function(wrap_pyfunction!(py_build_course_slots, m)?)?;
    m.add_function(wrap_pyfunction!(py_rank_schedules, m)?)?;

    Ok(())
}
