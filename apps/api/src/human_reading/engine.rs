//! Human Reading Engine — one rich external call producing a `HumanReadingResult`.
//!
//! The response must carry at least one of the top-level sections; otherwise,
//! or on any call failure, the neutral `HumanReadingResult::fallback()` is
//! returned and the reading is marked degraded.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::human_reading::heuristic::{human_reading_score, NEUTRAL_SCORE};
use crate::human_reading::models::HumanReadingResult;
use crate::human_reading::prompts::{HUMAN_READING_PROMPT_TEMPLATE, HUMAN_READING_SYSTEM};
use crate::llm_client::{extract_json_object, TextGenerator};

const REQUIRED_SECTIONS: &[&str] = &[
    "candidateUnderstanding",
    "currentStatus",
    "flags",
    "jobFitAnalysis",
];

/// A reading plus whether it is the substituted default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanReading {
    pub result: HumanReadingResult,
    pub degraded: bool,
}

impl HumanReading {
    fn degraded() -> Self {
        Self {
            result: HumanReadingResult::fallback(),
            degraded: true,
        }
    }

    /// Heuristic score for a real reading; the neutral base for a degraded one.
    pub fn score(&self) -> u32 {
        if self.degraded {
            NEUTRAL_SCORE
        } else {
            human_reading_score(&self.result)
        }
    }
}

pub async fn read_candidate(
    resume_text: &str,
    candidate: &CandidateProfile,
    position: &PositionProfile,
    llm: &dyn TextGenerator,
) -> HumanReading {
    let prompt = match build_reading_prompt(resume_text, candidate, position) {
        Ok(prompt) => prompt,
        Err(e) => {
            warn!("Failed to serialize profiles for human reading: {e}");
            return HumanReading::degraded();
        }
    };

    let response = match llm.generate(&prompt, HUMAN_READING_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Human reading call failed, using neutral reading: {e}");
            return HumanReading::degraded();
        }
    };

    match parse_human_reading(&response) {
        Some(result) => {
            info!(
                "Human reading: fit={:?}, green={}, red={}, confidence={:?}",
                result.job_fit_analysis.fit_score,
                result.flags.green_flags.len(),
                result.flags.red_flags.len(),
                result.confidence_level
            );
            HumanReading {
                result,
                degraded: false,
            }
        }
        None => {
            warn!("Human reading response failed shape validation, using neutral reading");
            HumanReading::degraded()
        }
    }
}

pub fn build_reading_prompt(
    resume_text: &str,
    candidate: &CandidateProfile,
    position: &PositionProfile,
) -> Result<String, serde_json::Error> {
    Ok(HUMAN_READING_PROMPT_TEMPLATE
        .replace("{candidate_json}", &serde_json::to_string_pretty(candidate)?)
        .replace("{position_json}", &serde_json::to_string_pretty(position)?)
        .replace("{resume_text}", resume_text))
}

/// Parses a reading, requiring an object with at least one known section.
pub fn parse_human_reading(response: &str) -> Option<HumanReadingResult> {
    let json = extract_json_object(response)?;
    let value: Value = serde_json::from_str(json).ok()?;
    let has_section = value
        .as_object()
        .is_some_and(|obj| REQUIRED_SECTIONS.iter().any(|key| obj.contains_key(*key)));
    if !has_section {
        return None;
    }
    serde_json::from_value(value).ok()
}
