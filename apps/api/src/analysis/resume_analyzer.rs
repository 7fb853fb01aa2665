//! Resume Analyzer — raw resume text → `CandidateProfile`.
//!
//! Never fails: a failed call or an unparsable response yields
//! `CandidateProfile::default()`.

use tracing::{info, warn};

use crate::analysis::keyword_sample;
use crate::analysis::models::CandidateProfile;
use crate::analysis::prompts::{RESUME_ANALYSIS_PROMPT_TEMPLATE, RESUME_ANALYSIS_SYSTEM};
use crate::catalog::KeywordCatalog;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, VOCABULARY_INSTRUCTION};
use crate::llm_client::{extract_json_object, TextGenerator};

pub async fn analyze_resume(
    resume_text: &str,
    llm: &dyn TextGenerator,
    catalog: &KeywordCatalog,
) -> CandidateProfile {
    let prompt = build_resume_prompt(resume_text, catalog);

    let response = match llm.generate(&prompt, RESUME_ANALYSIS_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume analysis call failed, using default profile: {e}");
            return CandidateProfile::default();
        }
    };

    match parse_candidate_profile(&response, resume_text, catalog) {
        Some(profile) => {
            info!(
                "Resume analyzed: seniority={:?}, years={}, hot_keywords={}",
                profile.seniority,
                profile.work_experience.total_years,
                profile.hot_keywords.len()
            );
            profile
        }
        None => {
            warn!("Resume analysis returned no parseable JSON object, using default profile");
            CandidateProfile::default()
        }
    }
}

pub fn build_resume_prompt(resume_text: &str, catalog: &KeywordCatalog) -> String {
    RESUME_ANALYSIS_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{vocabulary_instruction}", VOCABULARY_INSTRUCTION)
        .replace("{keywords}", &keyword_sample(catalog))
        .replace("{resume_text}", resume_text)
}

/// Parses a model response into a profile. Tags outside the vocabulary, or
/// absent from the resume itself, are dropped.
pub fn parse_candidate_profile(
    response: &str,
    resume_text: &str,
    catalog: &KeywordCatalog,
) -> Option<CandidateProfile> {
    let json = extract_json_object(response)?;
    let mut profile: CandidateProfile = serde_json::from_str(json).ok()?;

    profile.hot_keywords = catalog.restrict(&profile.hot_keywords, resume_text);
    profile.matched_tags = catalog.restrict(&profile.matched_tags, resume_text);

    Some(profile)
}
