//! The enumerate → filter → score → rank pipeline.

use crate::config::PlannerConfig;
use crate::enumerate::ScheduleEnumerator;
use crate::filters::{daily_transfers_exceed, max_daily_load};
use crate::models::{CourseSlot, Meeting, RankedSchedule, Section};
use crate::scoring::{cmp_score, score_schedule, ScoreError, STRATEGIES};
use crate::{log_rejects, log_summary, log_trace};

/// Enumerate every conflict-free schedule, drop those breaking the
/// transfer or daily-load budgets, and return the rest scored and sorted
/// ascending (most desirable first). The sort is stable, so equal scores
/// keep enumeration order.
pub fn rank_schedules(
    slots: &[CourseSlot],
    config: &PlannerConfig,
) -> Result<Vec<RankedSchedule>, ScoreError> {
    // Reject a bad strategy before doing any enumeration work.
    if !STRATEGIES.contains(&config.strategy.as_str()) {
        return Err(ScoreError::UnknownStrategy(config.strategy.clone()));
    }

    let mut survivors = Vec::new();
    let mut enumerated = 0usize;
    for sections in ScheduleEnumerator::new(slots, &config.campus) {
        enumerated += 1;
        let meetings: Vec<&Meeting> = sections.iter().flat_map(|s| s.meetings.iter()).collect();
        if daily_transfers_exceed(&meetings, config.max_daily_transfers, &config.campus) {
            log_rejects!(
                config.verbosity,
                "rejected {:?}: daily transfer budget exceeded",
                indexes_of(&sections)
            );
            continue;
        }
        if max_daily_load(&meetings) > config.max_daily_meetings {
            log_rejects!(
                config.verbosity,
                "rejected {:?}: too many classes on one day",
                indexes_of(&sections)
            );
            continue;
        }
        let score = score_schedule(&meetings, &config.strategy)?;
        log_trace!(
            config.verbosity,
            "kept {:?} score {}",
            indexes_of(&sections),
            score
        );
        survivors.push(RankedSchedule {
            score,
            meetings: meetings.into_iter().cloned().collect(),
            section_indexes: sections.iter().map(|s| s.index.clone()).collect(),
        });
    }

    survivors.sort_by(|a, b| cmp_score(a.score, b.score));
    log_summary!(
        config.verbosity,
        "{} conflict-free schedules, {} after filters",
        enumerated,
        survivors.len()
    );
    Ok(survivors)
}

fn indexes_of<'a>(sections: &'a [&Section]) -> Vec<&'a str> {
    sections.iter().map(|s| s.index.as_str()).collect()
}
