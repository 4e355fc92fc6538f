//! Compatibility predicate between meetings and sections.

use crate::config::CampusPolicy;
use crate::models::{Meeting, Section};

/// Whether two meetings can coexist in one schedule.
///
/// Meetings on different days never conflict, and a meeting without a
/// published time makes no claim on the timeline, so it conflicts with
/// nothing. Same-day meetings must be separated by the travel gap their
/// campus pair requires. The signed difference between the latest start
/// and the earliest end handles overlapping, nested, and adjacent ranges
/// without a branch on which meeting comes first.
pub fn meetings_compatible(a: &Meeting, b: &Meeting, policy: &CampusPolicy) -> bool {
    if a.day != b.day {
        return true;
    }
    let (Some(ta), Some(tb)) = (a.time, b.time) else {
        return true;
    };
    let gap = policy.required_gap(a.campus, b.campus);
    let latest_start = i32::from(ta.start_minute.max(tb.start_minute));
    let earliest_end = i32::from(ta.end_minute.min(tb.end_minute));
    latest_start - earliest_end >= gap
}

/// Whether two sections can coexist: every meeting of `a` must be
/// compatible with every meeting of `b`.
pub fn sections_compatible(a: &Section, b: &Section, policy: &CampusPolicy) -> bool {
    a.meetings
        .iter()
        .all(|ma| b.meetings.iter().all(|mb| meetings_compatible(ma, mb, policy)))
}
