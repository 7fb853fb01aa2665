// Profile extraction: raw resume / job posting text → structured profiles.
// One external call per analyzer; prompt construction (prompts.rs) is kept apart
// from tolerant parsing (lenient.rs, models.rs) so parsing is fixture-testable.

pub mod lenient;
pub mod models;
pub mod position_analyzer;
pub mod prompts;
pub mod resume_analyzer;

use crate::catalog::{KeywordCatalog, PROMPT_SAMPLE_SIZE};

/// The bounded vocabulary sample quoted in analyzer prompts.
fn keyword_sample(catalog: &KeywordCatalog) -> String {
    catalog.sample(PROMPT_SAMPLE_SIZE).join(", ")
}
