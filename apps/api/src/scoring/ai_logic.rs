//! AI Logic Scorer — one small external call returning a 0–10 relevance score.
//!
//! Any failure (call error, missing SCORE line) degrades to
//! score=5, reason="unavailable".

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::llm_client::TextGenerator;
use crate::scoring::prompts::{AI_LOGIC_PROMPT_TEMPLATE, AI_LOGIC_SYSTEM};
use crate::scoring::AI_LOGIC_MAX;

pub const FALLBACK_SCORE: u32 = 5;
pub const FALLBACK_REASON: &str = "unavailable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiLogicScore {
    pub score: u32,
    pub reason: String,
}

impl Default for AiLogicScore {
    fn default() -> Self {
        Self {
            score: FALLBACK_SCORE,
            reason: FALLBACK_REASON.to_string(),
        }
    }
}

pub async fn score_ai_logic(
    candidate: &CandidateProfile,
    position: &PositionProfile,
    llm: &dyn TextGenerator,
) -> AiLogicScore {
    let prompt = AI_LOGIC_PROMPT_TEMPLATE
        .replace("{candidate_digest}", &candidate.digest())
        .replace("{position_digest}", &position.digest());

    let response = match llm.generate(&prompt, AI_LOGIC_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("AI logic call failed, using neutral score: {e}");
            return AiLogicScore::default();
        }
    };

    match parse_ai_logic(&response) {
        Some(result) => {
            debug!("AI logic score {}: {}", result.score, result.reason);
            result
        }
        None => {
            warn!("AI logic response had no SCORE line, using neutral score");
            AiLogicScore::default()
        }
    }
}

/// Reads the `SCORE:` / `REASON:` lines. The score is clamped to 0–10;
/// a missing reason is tolerated, a missing or non-numeric score is not.
pub fn parse_ai_logic(response: &str) -> Option<AiLogicScore> {
    let mut score = None;
    let mut reason = None;

    for line in response.lines() {
        let line = line.trim().trim_matches('*').trim();
        if let Some(rest) = strip_label(line, "score") {
            score = score.or_else(|| leading_integer(rest));
        } else if let Some(rest) = strip_label(line, "reason") {
            if !rest.is_empty() {
                reason.get_or_insert_with(|| rest.to_string());
            }
        }
    }

    Some(AiLogicScore {
        score: score?.min(AI_LOGIC_MAX),
        reason: reason.unwrap_or_else(|| "not specified".to_string()),
    })
}

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let head = line.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    let rest = line[label.len()..].trim_start().trim_start_matches('*');
    rest.strip_prefix(':').map(|r| r.trim().trim_start_matches('*').trim())
}

fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
