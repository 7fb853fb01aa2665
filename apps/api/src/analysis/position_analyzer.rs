//! Position Analyzer — raw job posting text → `PositionProfile`.
//!
//! Same contract as the resume analyzer: failures degrade to
//! `PositionProfile::default()` and are only logged.

use tracing::{info, warn};

use crate::analysis::keyword_sample;
use crate::analysis::models::PositionProfile;
use crate::analysis::prompts::{POSITION_ANALYSIS_PROMPT_TEMPLATE, POSITION_ANALYSIS_SYSTEM};
use crate::catalog::KeywordCatalog;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, VOCABULARY_INSTRUCTION};
use crate::llm_client::{extract_json_object, TextGenerator};

pub async fn analyze_position(
    position_text: &str,
    llm: &dyn TextGenerator,
    catalog: &KeywordCatalog,
) -> PositionProfile {
    let prompt = build_position_prompt(position_text, catalog);

    let response = match llm.generate(&prompt, POSITION_ANALYSIS_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Position analysis call failed, using default profile: {e}");
            return PositionProfile::default();
        }
    };

    match parse_position_profile(&response, position_text, catalog) {
        Some(profile) => {
            info!(
                "Position analyzed: title={}, must_have={}, min_years={}",
                profile.basic_info.title,
                profile.requirements.must_have.len(),
                profile.requirements.experience.minimum
            );
            profile
        }
        None => {
            warn!("Position analysis returned no parseable JSON object, using default profile");
            PositionProfile::default()
        }
    }
}

pub fn build_position_prompt(position_text: &str, catalog: &KeywordCatalog) -> String {
    POSITION_ANALYSIS_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{vocabulary_instruction}", VOCABULARY_INSTRUCTION)
        .replace("{keywords}", &keyword_sample(catalog))
        .replace("{position_text}", position_text)
}

pub fn parse_position_profile(
    response: &str,
    position_text: &str,
    catalog: &KeywordCatalog,
) -> Option<PositionProfile> {
    let json = extract_json_object(response)?;
    let mut profile: PositionProfile = serde_json::from_str(json).ok()?;

    profile.matched_tags = catalog.restrict(&profile.matched_tags, position_text);

    Some(profile)
}
