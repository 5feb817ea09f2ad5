use serde::{Deserialize, Serialize};

use crate::model::size::SizeTier;

/// Number of tasks estimated at each size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaskCount {
    #[serde(alias = "XS")]
    pub xs: u32,
    #[serde(alias = "S")]
    pub s: u32,
    #[serde(alias = "M")]
    pub m: u32,
    #[serde(alias = "L")]
    pub l: u32,
}

impl TaskCount {
    pub const fn new(xs: u32, s: u32, m: u32, l: u32) -> Self {
        Self { xs, s, m, l }
    }

    pub const fn get(&self, tier: SizeTier) -> u32 {
        match tier {
            SizeTier::ExtraSmall => self.xs,
            SizeTier::Small => self.s,
            SizeTier::Medium => self.m,
            SizeTier::Large => self.l,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SizeTier, u32)> + '_ {
        SizeTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }

    pub fn total_tasks(&self) -> u64 {
        self.iter().map(|(_, count)| u64::from(count)).sum()
    }

    pub fn total_points(&self) -> u64 {
        self.iter()
            .map(|(tier, count)| u64::from(count) * u64::from(tier.points()))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, count)| count == 0)
    }

    /// Compact `L×1 + M×1 + S×2 + XS×3` form, largest tier first.
    pub fn compact(&self) -> String {
        let parts: Vec<String> = SizeTier::ENUMERATION_ORDER
            .iter()
            .filter_map(|&tier| {
                let count = self.get(tier);
                (count > 0).then(|| format!("{tier}×{count}"))
            })
            .collect();
        if parts.is_empty() {
            "No tasks".to_string()
        } else {
            parts.join(" + ")
        }
    }
}
