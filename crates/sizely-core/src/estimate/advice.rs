//! Heuristic planning notes. These never affect which combinations are found.

use serde::Serialize;

use crate::model::combination::Combination;

const LOW_TASK_MAX: u32 = 8;
const HIGH_TASK_MIN: u32 = 12;
const BALANCED_MIN: u32 = 6;
const BALANCED_MAX: u32 = 10;
const INCIDENT_RESERVE_TARGET: u32 = 30;
const SCOPE_REDUCTION_TARGET: u32 = 35;

const FOCUSED_COMBO_MAX: u32 = 6;
const HEAVY_LARGE_MIN: u32 = 3;
const MANY_XS_MIN: u32 = 6;
const MANY_S_MIN: u32 = 5;

pub const NO_COMBINATIONS: &str =
    "No valid combinations found. Try adjusting target points or max tasks.";
pub const BALANCED_MIX: &str =
    "Consider combinations with a mix of large and small tasks for balanced workflow";
pub const FOCUSED_WORK: &str = "Low task count combinations are good for focused, deep work";
pub const CONTEXT_SWITCHING: &str =
    "High task count combinations may cause context switching - monitor carefully";
pub const INCIDENT_RESERVE: &str =
    "For SRE teams: ensure 20-30% capacity is reserved for incident response";
pub const SCOPE_REDUCTION: &str = "Consider reducing scope or extending timeline for reliability";

fn has_large_and_small(combo: &Combination) -> bool {
    let counts = combo.counts();
    counts.l > 0 && (counts.xs > 0 || counts.s > 0)
}

fn is_balanced(combo: &Combination) -> bool {
    let total = combo.total_tasks();
    has_large_and_small(combo) && (BALANCED_MIN..=BALANCED_MAX).contains(&total)
}

/// Result-level notes in fixed order: balance, focus, switching, then target-based.
pub fn recommendations(combinations: &[Combination], target_points: u32) -> Vec<String> {
    if combinations.is_empty() {
        return vec![NO_COMBINATIONS.to_string()];
    }

    let mut notes = Vec::new();
    if combinations.iter().any(is_balanced) {
        notes.push(BALANCED_MIX.to_string());
    }
    if combinations.iter().any(|c| c.total_tasks() <= LOW_TASK_MAX) {
        notes.push(FOCUSED_WORK.to_string());
    }
    if combinations.iter().any(|c| c.total_tasks() >= HIGH_TASK_MIN) {
        notes.push(CONTEXT_SWITCHING.to_string());
    }
    if target_points >= INCIDENT_RESERVE_TARGET {
        notes.push(INCIDENT_RESERVE.to_string());
    }
    if target_points >= SCOPE_REDUCTION_TARGET {
        notes.push(SCOPE_REDUCTION.to_string());
    }
    notes
}

/// Note attached to a single combination when it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    FocusedWork,
    ContextSwitching,
    GoodMix,
    HeavyOnLarge,
    QuickWins,
}

impl Advice {
    pub const fn message(self) -> &'static str {
        match self {
            Advice::FocusedWork => "Low task count - excellent for focused work",
            Advice::ContextSwitching => "High task count - may cause context switching",
            Advice::GoodMix => "Good mix of large and small tasks",
            Advice::HeavyOnLarge => "Heavy on large tasks - ensure adequate planning",
            Advice::QuickWins => "Many small tasks - good for quick wins",
        }
    }

    pub const fn marker(self) -> &'static str {
        match self {
            Advice::FocusedWork => "💡",
            Advice::ContextSwitching => "⚠️ ",
            Advice::GoodMix => "✅",
            Advice::HeavyOnLarge => "🎯",
            Advice::QuickWins => "⚡",
        }
    }
}

/// At most one task-count note followed by at most one balance note.
pub fn combination_advice(combo: &Combination) -> Vec<Advice> {
    let counts = combo.counts();
    let total = combo.total_tasks();
    let mut advice = Vec::with_capacity(2);

    if total <= FOCUSED_COMBO_MAX {
        advice.push(Advice::FocusedWork);
    } else if total >= HIGH_TASK_MIN {
        advice.push(Advice::ContextSwitching);
    }

    if has_large_and_small(combo) {
        advice.push(Advice::GoodMix);
    } else if counts.l >= HEAVY_LARGE_MIN {
        advice.push(Advice::HeavyOnLarge);
    } else if counts.l == 0 && (counts.xs >= MANY_XS_MIN || counts.s >= MANY_S_MIN) {
        advice.push(Advice::QuickWins);
    }

    advice
}
