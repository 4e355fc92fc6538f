//! Secondary schedule constraints, applied after enumeration.

use chrono::Weekday;
use rustc_hash::FxHashMap;

use crate::config::CampusPolicy;
use crate::models::{Campus, Meeting};

/// Group a schedule's meetings by day.
pub fn meetings_by_day<'m>(meetings: &[&'m Meeting]) -> FxHashMap<Weekday, Vec<&'m Meeting>> {
    let mut by_day: FxHashMap<Weekday, Vec<&Meeting>> = FxHashMap::default();
    for meeting in meetings {
        by_day.entry(meeting.day).or_default().push(meeting);
    }
    by_day
}

/// Count campus transfers across one day.
///
/// The walk starts at the policy's home campus and follows timed meetings
/// in start order; every non-online campus change is one transfer, and a
/// day ending away from home costs one more for the trip back. Untimed
/// meetings have no position in the walk and are skipped.
pub fn transfers_in_day(day_meetings: &[&Meeting], policy: &CampusPolicy) -> u32 {
    let mut stops: Vec<(u16, Campus)> = day_meetings
        .iter()
        .filter_map(|m| m.time.map(|t| (t.start_minute, m.campus)))
        .collect();
    stops.sort_by_key(|&(start, _)| start);

    let mut current = policy.home;
    let mut transfers = 0;
    for (_, campus) in stops {
        if campus != Campus::Online && campus != current {
            current = campus;
            transfers += 1;
        }
    }
    if current != policy.home {
        transfers += 1;
    }
    transfers
}

/// Whether any single day needs more than `max` campus transfers.
pub fn daily_transfers_exceed(meetings: &[&Meeting], max: u32, policy: &CampusPolicy) -> bool {
    meetings_by_day(meetings)
        .values()
        .any(|day| transfers_in_day(day, policy) > max)
}

/// The largest number of meetings on any single day.
pub fn max_daily_load(meetings: &[&Meeting]) -> usize {
    meetings_by_day(meetings)
        .values()
        .map(Vec::len)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSpan;

    fn meeting(day: Weekday, campus: Campus, start: u16, end: u16) -> Meeting {
        Meeting {
            day,
            campus,
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
    fn test_alternating_campuses_count_every_hop() {
        let policy = CampusPolicy::default();
        // Busch, Livingston, Busch, Livingston, Busch: four transfers,
        // and the day already ends at home.
        let meetings = vec![
            meeting(Weekday::Mon, Campus::Busch, 540, 600),
            meeting(Weekday::Mon, Campus::Livingston, 630, 690),
            meeting(Weekday::Mon, Campus::Busch, 720, 780),
            meeting(Weekday::Mon, Campus::Livingston, 810, 870),
            meeting(Weekday::Mon, Campus::Busch, 900, 960),
        ];
        assert_eq!(transfers_in_day(&refs(&meetings), &policy), 4);
        assert!(daily_transfers_exceed(&refs(&meetings), 3, &policy));
        assert!(!daily_transfers_exceed(&refs(&meetings), 4, &policy));
    }

    #[test]
    fn test_return_trip_counts_as_transfer() {
        let policy = CampusPolicy::default();
        // One Livingston meeting: go there and come home again.
        let meetings = vec![meeting(Weekday::Mon, Campus::Livingston, 540, 600)];
        assert_eq!(transfers_in_day(&refs(&meetings), &policy), 2);
    }

    #[test]
    fn test_all_at_home_needs_no_transfers() {
        let policy = CampusPolicy::default();
        let meetings = vec![
            meeting(Weekday::Mon, Campus::Busch, 540, 600),
            meeting(Weekday::Mon, Campus::Busch, 630, 690),
        ];
        assert_eq!(transfers_in_day(&refs(&meetings), &policy), 0);
    }

    #[test]
    fn test_online_meetings_are_not_stops() {
        let policy = CampusPolicy::default();
        let meetings = vec![
            meeting(Weekday::Mon, Campus::Busch, 540, 600),
            meeting(Weekday::Mon, Campus::Online, 630, 690),
            meeting(Weekday::Mon, Campus::Busch, 720, 780),
        ];
        assert_eq!(transfers_in_day(&refs(&meetings), &policy), 0);
    }

    #[test]
    fn test_untimed_meetings_are_not_stops() {
        let policy = CampusPolicy::default();
        let meetings = vec![
            meeting(Weekday::Mon, Campus::Busch, 540, 600),
            Meeting {
                day: Weekday::Mon,
                campus: Campus::Livingston,
                time: None,
                course_title: "course".to_string(),
            },
        ];
        assert_eq!(transfers_in_day(&refs(&meetings), &policy), 0);
    }

    #[test]
    fn test_new_campus_never_decreases_count() {
        let policy = CampusPolicy::default();
        let mut meetings = vec![
            meeting(Weekday::Mon, Campus::Busch, 540, 600),
            meeting(Weekday::Mon, Campus::Livingston, 630, 690),
        ];
        let before = transfers_in_day(&refs(&meetings), &policy);
        meetings.push(meeting(Weekday::Mon, Campus::College, 720, 780));
        let after = transfers_in_day(&refs(&meetings), &policy);
        assert!(after >= before);
    }

    #[test]
    fn test_transfers_checked_per_day() {
        let policy = CampusPolicy::default();
        // Two hops on Monday, none on Tuesday; only Monday can fail.
        let meetings = vec![
            meeting(Weekday::Mon, Campus::Livingston, 540, 600),
            meeting(Weekday::Mon, Campus::College, 700, 760),
            meeting(Weekday::Tue, Campus::Busch, 540, 600),
        ];
        assert!(daily_transfers_exceed(&refs(&meetings), 2, &policy));
        assert!(!daily_transfers_exceed(&refs(&meetings), 3, &policy));
    }

    #[test]
    fn test_max_daily_load() {
        let meetings = vec![
            meeting(Weekday::Mon, Campus::Busch, 540, 600),
            meeting(Weekday::Mon, Campus::Busch, 630, 690),
            meeting(Weekday::Mon, Campus::Busch, 720, 780),
            meeting(Weekday::Tue, Campus::Busch, 540, 600),
        ];
        assert_eq!(max_daily_load(&refs(&meetings)), 3);
        assert_eq!(max_daily_load(&[]), 0);
    }

    #[test]
    fn test_untimed_meetings_count_toward_load() {
        let meetings = vec![
            meeting(Weekday::Mon, Campus::Busch, 540, 600),
            Meeting {
                day: Weekday::Mon,
                campus: Campus::Online,
                time: None,
                course_title: "course".to_string(),
            },
        ];
        assert_eq!(max_daily_load(&refs(&meetings)), 2);
    }
}
