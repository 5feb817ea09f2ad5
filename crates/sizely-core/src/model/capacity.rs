use serde::Serialize;

use crate::model::size::SizeTier;
use crate::model::task_count::TaskCount;

/// One row of a capacity breakdown: `count` tasks of `size` at `points` each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierBreakdown {
    pub size: SizeTier,
    pub count: u32,
    pub points: u32,
    pub total: u64,
}

impl TierBreakdown {
    pub fn new(size: SizeTier, count: u32) -> Self {
        Self {
            size,
            count,
            points: size.points(),
            total: u64::from(count) * u64::from(size.points()),
        }
    }
}

/// Point total and per-tier breakdown for a set of task counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SprintCapacity {
    pub tasks: TaskCount,
    pub breakdown: Vec<TierBreakdown>,
    pub total_points: u64,
    pub total_tasks: u64,
}

impl SprintCapacity {
    pub fn row(&self, tier: SizeTier) -> Option<&TierBreakdown> {
        self.breakdown.iter().find(|row| row.size == tier)
    }
}

#[cfg(test)]
mod tests {
    use super::TierBreakdown;
    use crate::model::size::SizeTier;

    #[test]
    fn row_total_is_count_times_weight() {
        let row = TierBreakdown::new(SizeTier::Medium, 4);
        assert_eq!(row.points, 5);
        assert_eq!(row.total, 20);
    }

    #[test]
    fn row_serializes_size_label() {
        let json = serde_json::to_string(&TierBreakdown::new(SizeTier::ExtraSmall, 2)).unwrap();
        assert_eq!(json, r#"{"size":"XS","count":2,"points":1,"total":2}"#);
    }
}
