use serde::Serialize;

use crate::model::task_count::TaskCount;

/// One assignment of task counts whose weighted sum hits a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Combination {
    xs: u32,
    s: u32,
    m: u32,
    l: u32,
    points: u32,
}

impl Combination {
    pub(crate) const fn new(counts: TaskCount, points: u32) -> Self {
        Self {
            xs: counts.xs,
            s: counts.s,
            m: counts.m,
            l: counts.l,
            points,
        }
    }

    pub const fn counts(&self) -> TaskCount {
        TaskCount::new(self.xs, self.s, self.m, self.l)
    }

    pub const fn points(&self) -> u32 {
        self.points
    }

    pub const fn total_tasks(&self) -> u32 {
        self.xs + self.s + self.m + self.l
    }

    pub fn compact(&self) -> String {
        self.counts().compact()
    }
}

/// Outcome of a single enumeration call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationResult {
    target_points: u32,
    max_tasks: u32,
    combinations: Vec<Combination>,
    total_found: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    recommendations: Vec<String>,
}

impl CombinationResult {
    pub(crate) fn new(
        target_points: u32,
        max_tasks: u32,
        combinations: Vec<Combination>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            target_points,
            max_tasks,
            total_found: combinations.len(),
            combinations,
            recommendations,
        }
    }

    pub fn target_points(&self) -> u32 {
        self.target_points
    }

    pub fn max_tasks(&self) -> u32 {
        self.max_tasks
    }

    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn total_found(&self) -> usize {
        self.total_found
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn is_empty(&self) -> bool {
        self.total_found == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
