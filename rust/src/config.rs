//! Configuration types for campus geometry and schedule selection.

use pyo3::prelude::*;

use crate::models::Campus;

/// Campus geometry: which campus pairs are close enough for a short gap,
/// and where a day starts and ends for transfer counting.
///
/// The defaults describe the institution the catalog data comes from, but
/// nothing in the core depends on them being these particular campuses.
#[pyclass]
#[derive(Clone, Debug)]
pub struct CampusPolicy {
    /// Minimum minutes between same-day meetings on co-located campuses.
    #[pyo3(get, set)]
    pub same_campus_gap: u16,
    /// Minimum minutes between same-day meetings needing a campus trip.
    #[pyo3(get, set)]
    pub cross_campus_gap: u16,
    /// Campus pairs connected well enough to count as co-located.
    #[pyo3(get, set)]
    pub adjacent: Vec<(Campus, Campus)>,
    /// Campus each day starts from and returns to.
    #[pyo3(get, set)]
    pub home: Campus,
}

impl Default for CampusPolicy {
    fn default() -> Self {
        Self {
            same_campus_gap: 30,
            cross_campus_gap: 60,
            adjacent: vec![(Campus::Busch, Campus::Livingston)],
            home: Campus::Busch,
        }
    }
}

impl CampusPolicy {
    /// Whether two meeting locations need only the short gap.
    pub fn co_located(&self, a: Campus, b: Campus) -> bool {
        a == b
            || a == Campus::Online
            || b == Campus::Online
            || self
                .adjacent
                .iter()
                .any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
    }

    /// Minimum minutes required between two same-day meetings.
    pub fn required_gap(&self, a: Campus, b: Campus) -> i32 {
        if self.co_located(a, b) {
            i32::from(self.same_campus_gap)
        } else {
            i32::from(self.cross_campus_gap)
        }
    }
}

#[pymethods]
impl CampusPolicy {
    #[new]
    #[pyo3(signature = (same_campus_gap=None, cross_campus_gap=None, adjacent=None, home=None))]
    fn new(
        same_campus_gap: Option<u16>,
        cross_campus_gap: Option<u16>,
        adjacent: Option<Vec<(Campus, Campus)>>,
        home: Option<Campus>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            same_campus_gap: same_campus_gap.unwrap_or(defaults.same_campus_gap),
            cross_campus_gap: cross_campus_gap.unwrap_or(defaults.cross_campus_gap),
            adjacent: adjacent.unwrap_or(defaults.adjacent),
            home: home.unwrap_or(defaults.home),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "CampusPolicy(home={:?}, adjacent={:?}, gaps={}/{})",
            self.home, self.adjacent, self.same_campus_gap, self.cross_campus_gap
        )
    }
}

/// Configuration for schedule generation and ranking.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Maximum campus transfers allowed on any single day.
    #[pyo3(get, set)]
    pub max_daily_transfers: u32,
    /// Maximum meetings allowed on any single day.
    #[pyo3(get, set)]
    pub max_daily_meetings: usize,
    /// Scoring strategy: "day_length" or "avg_end".
    #[pyo3(get, set)]
    pub strategy: String,
    /// Logging verbosity (0=silent, 1=summary, 2=rejections, 3=trace).
    #[pyo3(get, set)]
    pub verbosity: u8,
    /// Campus geometry used for gap checks and transfer counting.
    #[pyo3(get, set)]
    pub campus: CampusPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_daily_transfers: 3,
            max_daily_meetings: 4,
            strategy: "day_length".to_string(),
            verbosity: 0,
            campus: CampusPolicy::default(),
        }
    }
}

#[pymethods]
impl PlannerConfig {
    #[new]
    #[pyo3(signature = (
        max_daily_transfers=None,
        max_daily_meetings=None,
        strategy=None,
        verbosity=None,
        campus=None
    ))]
    fn new(
        max_daily_transfers: Option<u32>,
        max_daily_meetings: Option<usize>,
        strategy: Option<String>,
        verbosity: Option<u8>,
        campus: Option<CampusPolicy>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            max_daily_transfers: max_daily_transfers.unwrap_or(defaults.max_daily_transfers),
            max_daily_meetings: max_daily_meetings.unwrap_or(defaults.max_daily_meetings),
            strategy: strategy.unwrap_or(defaults.strategy),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            campus: campus.unwrap_or(defaults.campus),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "PlannerConfig(strategy={:?}, max_daily_transfers={}, max_daily_meetings={})",
            self.strategy, self.max_daily_transfers, self.max_daily_meetings
        )
    }
}
