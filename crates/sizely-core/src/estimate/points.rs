use crate::model::capacity::{SprintCapacity, TierBreakdown};
use crate::model::size::SizeTier;
use crate::model::task_count::TaskCount;

/// Weighted sum `xs*1 + s*3 + m*5 + l*10`.
pub fn compute_total(tasks: &TaskCount) -> u64 {
    tasks.total_points()
}

/// Builds the four-row breakdown in tier order XS, S, M, L.
pub fn compute_breakdown(tasks: TaskCount) -> SprintCapacity {
    let breakdown: Vec<TierBreakdown> = SizeTier::ALL
        .iter()
        .map(|&tier| TierBreakdown::new(tier, tasks.get(tier)))
        .collect();
    let total_points = breakdown.iter().map(|row| row.total).sum();
    let total_tasks = breakdown.iter().map(|row| u64::from(row.count)).sum();

    SprintCapacity {
        tasks,
        breakdown,
        total_points,
        total_tasks,
    }
}
