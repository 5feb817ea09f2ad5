//! Point calculation, combination search and the advisory heuristics layered on top.

pub mod advice;
pub mod enumerate;
pub mod points;

pub use advice::{Advice, combination_advice, recommendations};
pub use enumerate::{DEFAULT_MAX_TASKS, EnumerationRequest, find_combinations};
pub use points::{compute_breakdown, compute_total};
