// Partial scorers. Five rule-based functions (pure, synchronous) plus the
// AI logic scorer (one small external call).
//
// Each factor has exactly one cap, shared by the sub-scorer that produces it
// and the aggregator that sums it.

pub mod ai_logic;
pub mod education;
pub mod experience;
pub mod industry;
pub mod location;
pub mod prompts;
pub mod regions;
pub mod similarity;
pub mod skills;

use crate::analysis::lenient::is_specified;

pub const SKILLS_MAX: u32 = 30;
pub const EXPERIENCE_MAX: u32 = 20;
pub const INDUSTRY_MAX: u32 = 20;
pub const LOCATION_MAX: u32 = 10;
pub const EDUCATION_MAX: u32 = 10;
pub const AI_LOGIC_MAX: u32 = 10;
pub const HUMAN_READING_MAX: u32 = 15;
pub const TOTAL_MAX: u32 = 100;

/// Case-insensitive containment in either direction. Blank terms never match.
pub(crate) fn contains_either(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Trims, drops placeholders and removes case-insensitive duplicates, keeping first-seen order.
pub(crate) fn dedup_terms<'a>(terms: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    terms
        .into_iter()
        .map(|t| t.trim())
        .filter(|t| is_specified(t))
        .filter(|t| seen.insert(t.to_lowercase()))
        .map(str::to_string)
        .collect()
}
