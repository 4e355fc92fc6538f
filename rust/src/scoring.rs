//! Schedule desirability scoring.
//!
//! Both strategies produce scores where lower is better, so ranking is
//! ascending:
//! - `day_length`: summed daily footprint (latest end minus earliest
//!   start, gaps included) across days with a timed meeting
//! - `avg_end`: mean over active days of the day's latest end time

use std::cmp::Ordering;

use chrono::Weekday;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::models::Meeting;

/// Strategy names accepted by [`score_schedule`].
pub const STRATEGIES: [&str; 2] = ["day_length", "avg_end"];

/// Errors that can occur during scoring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("unknown scoring strategy: {0}")]
    UnknownStrategy(String),
}

/// (earliest start, latest end) of timed meetings, per day.
pub fn day_spans(meetings: &[&Meeting]) -> FxHashMap<Weekday, (u16, u16)> {
    let mut spans: FxHashMap<Weekday, (u16, u16)> = FxHashMap::default();
    for meeting in meetings {
        let Some(time) = meeting.time else { continue };
        spans
            .entry(meeting.day)
            .and_modify(|(start, end)| {
                *start = (*start).min(time.start_minute);
                *end = (*end).max(time.end_minute);
            })
            .or_insert((time.start_minute, time.end_minute));
    }
    spans
}

/// Summed daily footprint in minutes, gaps between classes included.
pub fn total_day_span(meetings: &[&Meeting]) -> u32 {
    day_spans(meetings)
        .values()
        .map(|&(start, end)| u32::from(end - start))
        .sum()
}

/// Mean latest end time over days with at least one timed meeting.
pub fn average_end(meetings: &[&Meeting]) -> f64 {
    let spans = day_spans(meetings);
    if spans.is_empty() {
        return 0.0;
    }
    let total: u32 = spans.values().map(|&(_, end)| u32::from(end)).sum();
    f64::from(total) / spans.len() as f64
}

/// Score a schedule with the named strategy.
pub fn score_schedule(meetings: &[&Meeting], strategy: &str) -> Result<f64, ScoreError> {
    match strategy {
        "day_length" => Ok(f64::from(total_day_span(meetings))),
        "avg_end" => Ok(average_end(meetings)),
        other => Err(ScoreError::UnknownStrategy(other.to_string())),
    }
}

/// Compare scores for sorting, treating NaN as equal to everything.
pub fn cmp_score(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Campus, TimeSpan};

    fn meeting(day: Weekday, start: u16, end: u16) -> Meeting {
        Meeting {
            day,
            campus: Campus::Busch,
            time: Some(TimeSpan {
                start_minute: start,
                end_minute: end,
            }),
            course_title: "course".to_string(),
        }
    }

    fn refs(meetings: &[Meeting]) -> Vec<&Meeting> {
        meetings.iter().collect()
    }

    #[test]
    fn test_day_length_includes_gaps() {
        // Monday 9:00-10:20 and 10:50-12:10: footprint is 9:00 to 12:10.
        let meetings = vec![
            meeting(Weekday::Mon, 540, 620),
            meeting(Weekday::Mon, 650, 730),
        ];
        assert_eq!(total_day_span(&refs(&meetings)), 190);
    }

    #[test]
    fn test_day_length_sums_over_days() {
        let meetings = vec![
            meeting(Weekday::Mon, 540, 620),
            meeting(Weekday::Mon, 650, 730),
            meeting(Weekday::Tue, 600, 660),
        ];
        assert_eq!(total_day_span(&refs(&meetings)), 190 + 60);
    }

    #[test]
    fn test_day_length_invariant_to_meeting_order() {
        let mut meetings = vec![
            meeting(Weekday::Mon, 650, 730),
            meeting(Weekday::Tue, 600, 660),
            meeting(Weekday::Mon, 540, 620),
        ];
        let forward = total_day_span(&refs(&meetings));
        meetings.reverse();
        assert_eq!(total_day_span(&refs(&meetings)), forward);
    }

    #[test]
    fn test_untimed_meetings_do_not_score() {
        let meetings = vec![
            meeting(Weekday::Mon, 540, 620),
            Meeting {
                day: Weekday::Mon,
                campus: Campus::Online,
                time: None,
                course_title: "course".to_string(),
            },
        ];
        assert_eq!(total_day_span(&refs(&meetings)), 80);
    }

    #[test]
    fn test_average_end() {
        let meetings = vec![
            meeting(Weekday::Mon, 540, 720),
            meeting(Weekday::Mon, 540, 600),
            meeting(Weekday::Tue, 540, 600),
        ];
        // Monday's latest end is 720, Tuesday's is 600.
        let avg = average_end(&refs(&meetings));
        assert!((avg - 660.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_end_empty_is_zero() {
        assert_eq!(average_end(&[]), 0.0);
    }

    #[test]
    fn test_score_strategies() {
        let meetings = vec![meeting(Weekday::Mon, 540, 620)];
        assert_eq!(score_schedule(&refs(&meetings), "day_length").unwrap(), 80.0);
        assert_eq!(score_schedule(&refs(&meetings), "avg_end").unwrap(), 620.0);
    }

    #[test]
    fn test_unknown_strategy_error() {
        assert_eq!(
            score_schedule(&[], "shortest_walk"),
            Err(ScoreError::UnknownStrategy("shortest_walk".to_string()))
        );
    }
}
