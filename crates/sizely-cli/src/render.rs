//! Text, JSON and YAML rendering of calculator output.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sizely_core::estimate::combination_advice;
use sizely_core::model::capacity::SprintCapacity;
use sizely_core::model::combination::{Combination, CombinationResult};
use sizely_core::model::size::SizeTier;

const HEAVY_RULE: &str = "═══════════════════════════════";
const LIGHT_RULE: &str = "───────────────────────────────";
const WIDE_RULE: &str = "═══════════════════════════════════════════════════";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Machine-readable form of any calculator output.
pub fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

pub fn capacity(capacity: &SprintCapacity, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => capacity_text(capacity),
        _ => serialize(capacity, format),
    }
}

pub fn combinations(
    result: &CombinationResult,
    format: OutputFormat,
    show_advice: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => combinations_text(result, show_advice),
        _ => serialize(result, format),
    }
}

pub fn capacity_text(capacity: &SprintCapacity) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "📊 Sprint Capacity Calculation")?;
    writeln!(out, "{HEAVY_RULE}")?;
    for row in &capacity.breakdown {
        let label = format!("{} ({}pt):", row.size, row.points);
        writeln!(
            out,
            "{label:<11} {:>3} tasks = {:>3} points",
            row.count, row.total
        )?;
    }
    writeln!(out, "{LIGHT_RULE}")?;
    writeln!(
        out,
        "{:<11} {:>3} tasks = {:>3} points",
        "Total:", capacity.total_tasks, capacity.total_points
    )?;
    Ok(out)
}

pub fn combinations_text(result: &CombinationResult, show_advice: bool) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "🔍 Finding combinations for {} points (max {} tasks)",
        result.target_points(),
        result.max_tasks()
    )?;
    writeln!(out, "{WIDE_RULE}")?;

    if result.is_empty() {
        writeln!(
            out,
            "No combinations found for {} points with max {} tasks",
            result.target_points(),
            result.max_tasks()
        )?;
        return Ok(out);
    }

    writeln!(out, "Found {} combination(s):", result.total_found())?;
    writeln!(out)?;
    for (index, combo) in result.combinations().iter().enumerate() {
        write_combination(&mut out, index + 1, combo, show_advice)?;
    }

    if show_advice && !result.recommendations().is_empty() {
        writeln!(out, "💡 Recommendations:")?;
        for note in result.recommendations() {
            writeln!(out, "   • {note}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "📋 JSON Output:")?;
    writeln!(out, "{}", result.to_json()?)?;
    Ok(out)
}

fn write_combination(
    out: &mut String,
    index: usize,
    combo: &Combination,
    show_advice: bool,
) -> Result<()> {
    writeln!(
        out,
        "{index:>2}. {} = {} points ({} tasks)",
        combo.compact(),
        combo.points(),
        combo.total_tasks()
    )?;
    if show_advice {
        for advice in combination_advice(combo) {
            writeln!(out, "    {} {}", advice.marker(), advice.message())?;
        }
    }
    writeln!(out)?;
    Ok(())
}

/// Point table appended to `--help`.
pub fn tier_legend() -> String {
    let mut legend = String::from("T-shirt size points:\n");
    for tier in SizeTier::ALL {
        let label = format!("{tier}:");
        let points = format!("{} point{}", tier.points(), if tier.points() == 1 { "" } else { "s" });
        legend.push_str(&format!(
            "  {label:<4}{points:<10} ({})\n",
            tier.duration_hint()
        ));
    }
    legend
}
