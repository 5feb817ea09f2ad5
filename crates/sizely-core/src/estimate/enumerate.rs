use tracing::debug;

use crate::error::EstimateError;
use crate::estimate::advice::recommendations;
use crate::model::combination::{Combination, CombinationResult};
use crate::model::size::SizeTier;
use crate::model::task_count::TaskCount;

pub const DEFAULT_MAX_TASKS: u32 = 15;

/// Validated arguments for a combination search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationRequest {
    target_points: u32,
    max_tasks: u32,
}

impl EnumerationRequest {
    /// Rejects non-positive or out-of-range values before any search runs.
    pub fn new(target_points: i64, max_tasks: i64) -> Result<Self, EstimateError> {
        Ok(Self {
            target_points: positive("points", target_points)?,
            max_tasks: positive("max_tasks", max_tasks)?,
        })
    }

    pub fn target_points(&self) -> u32 {
        self.target_points
    }

    pub fn max_tasks(&self) -> u32 {
        self.max_tasks
    }

    pub fn run(&self) -> CombinationResult {
        find_combinations(self.target_points, self.max_tasks)
    }
}

fn positive(field: &str, value: i64) -> Result<u32, EstimateError> {
    if value <= 0 {
        return Err(EstimateError::invalid(field, "must be positive"));
    }
    u32::try_from(value)
        .map_err(|_| EstimateError::invalid(field, format!("must not exceed {}", u32::MAX)))
}

/// Every `(xs, s, m, l)` summing to `target_points` with at most `max_tasks`
/// tasks, ordered by ascending task count.
pub fn find_combinations(target_points: u32, max_tasks: u32) -> CombinationResult {
    let combinations = generate_combinations(target_points, max_tasks);
    let recommendations = recommendations(&combinations, target_points);
    debug!(
        target_points,
        max_tasks,
        found = combinations.len(),
        "enumerated combinations"
    );
    CombinationResult::new(target_points, max_tasks, combinations, recommendations)
}

fn generate_combinations(target_points: u32, max_tasks: u32) -> Vec<Combination> {
    let l_points = SizeTier::Large.points();
    let m_points = SizeTier::Medium.points();
    let s_points = SizeTier::Small.points();
    let xs_points = SizeTier::ExtraSmall.points();

    let mut combinations = Vec::new();

    let max_l = (target_points / l_points).min(max_tasks);
    for l in 0..=max_l {
        let remaining_after_l = target_points - l * l_points;
        let max_m = (remaining_after_l / m_points).min(max_tasks - l);

        for m in 0..=max_m {
            let remaining_after_m = remaining_after_l - m * m_points;
            let max_s = (remaining_after_m / s_points).min(max_tasks - l - m);

            for s in 0..=max_s {
                let remaining_after_s = remaining_after_m - s * s_points;
                // XS absorbs whatever is left, so each (l, m, s) yields at most one tuple.
                if remaining_after_s % xs_points != 0 {
                    continue;
                }
                let xs = remaining_after_s / xs_points;
                let total_tasks = u64::from(l) + u64::from(m) + u64::from(s) + u64::from(xs);
                if total_tasks <= u64::from(max_tasks) {
                    combinations.push(Combination::new(TaskCount::new(xs, s, m, l), target_points));
                }
            }
        }
    }

    // Stable: ties keep (l, m, s) iteration order.
    combinations.sort_by_key(Combination::total_tasks);
    combinations
}
