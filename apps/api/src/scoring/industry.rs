//! Industry scorer: containment overlap between candidate and position
//! industries (ratio × 15, or a flat 10 when the position names none) plus
//! +2 per shared tag, at most +5.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::scoring::{contains_either, dedup_terms, INDUSTRY_MAX};

const RATIO_POINTS: f64 = 15.0;
const UNLISTED_POINTS: u32 = 10;
const TAG_POINTS_EACH: u32 = 2;
const TAG_POINTS_MAX: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryMatch {
    pub score: u32,
    pub matched_industries: Vec<String>,
    pub missing_industries: Vec<String>,
    pub shared_tags: Vec<String>,
}

pub fn score_industry(candidate: &CandidateProfile, position: &PositionProfile) -> IndustryMatch {
    let candidate_industries: Vec<&str> = candidate.industries.all();
    let position_industries = dedup_terms(&position.industry);

    let (matched_industries, missing_industries): (Vec<String>, Vec<String>) =
        position_industries.into_iter().partition(|wanted| {
            candidate_industries
                .iter()
                .any(|have| contains_either(have, wanted))
        });

    let base = if matched_industries.is_empty() && missing_industries.is_empty() {
        UNLISTED_POINTS
    } else {
        let ratio =
            matched_industries.len() as f64 / (matched_industries.len() + missing_industries.len()) as f64;
        (ratio * RATIO_POINTS).round() as u32
    };

    let shared_tags = shared_tags(&candidate.matched_tags, &position.matched_tags);
    let tag_points = (shared_tags.len() as u32 * TAG_POINTS_EACH).min(TAG_POINTS_MAX);

    IndustryMatch {
        score: (base + tag_points).min(INDUSTRY_MAX),
        matched_industries,
        missing_industries,
        shared_tags,
    }
}

fn normalize_tag(tag: &str) -> String {
    tag.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '+' || *c == '#')
        .collect()
}

/// Tags present on both sides after normalization (case, spacing, punctuation).
fn shared_tags(candidate: &[String], position: &[String]) -> Vec<String> {
    let wanted: BTreeSet<String> = position
        .iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect();
    candidate
        .iter()
        .map(|t| normalize_tag(t))
        .filter(|t| wanted.contains(t))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
