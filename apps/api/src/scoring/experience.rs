//! Experience scorer.
//!
//! - years ≥ preferred > 0 → full marks
//! - minimum ≤ years < preferred → linear from 15 (at minimum) to 20 (at preferred)
//! - at most one year short of minimum → 10
//! - otherwise max(0, 5 − shortfall)
//! - +3 for an exact seniority match, capped at EXPERIENCE_MAX

use serde::{Deserialize, Serialize};

use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::scoring::EXPERIENCE_MAX;

const AT_MINIMUM: f64 = 15.0;
const ONE_YEAR_SHORT: f64 = 10.0;
const FAR_SHORT_BASE: f64 = 5.0;
/// No years requirement stated: experience cannot be judged either way.
const NO_REQUIREMENT: f64 = 15.0;
const SENIORITY_BONUS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatch {
    pub score: u32,
    pub candidate_years: f64,
    pub shortfall_years: f64,
    /// A years requirement is stated and the candidate reaches its minimum.
    pub requirement_met: bool,
    pub seniority_matches: bool,
}

pub fn score_experience(candidate: &CandidateProfile, position: &PositionProfile) -> ExperienceMatch {
    let years = candidate.work_experience.total_years.max(0.0);
    let minimum = position.requirements.experience.minimum.max(0.0);
    let preferred = position.requirements.experience.preferred.max(0.0);
    let full = EXPERIENCE_MAX as f64;

    let shortfall = (minimum - years).max(0.0);

    let base = if preferred > 0.0 && years >= preferred {
        full
    } else if minimum == 0.0 && preferred == 0.0 {
        NO_REQUIREMENT
    } else if years >= minimum {
        if preferred > minimum {
            AT_MINIMUM + (full - AT_MINIMUM) * (years - minimum) / (preferred - minimum)
        } else {
            full
        }
    } else if shortfall <= 1.0 {
        ONE_YEAR_SHORT
    } else {
        (FAR_SHORT_BASE - shortfall).max(0.0)
    };

    let requirement_met = if minimum > 0.0 {
        years >= minimum
    } else {
        preferred > 0.0 && years >= preferred
    };

    let seniority_matches = candidate.seniority == position.seniority_required;
    let bonus = if seniority_matches { SENIORITY_BONUS } else { 0 };
    let score = (base.round() as u32 + bonus).min(EXPERIENCE_MAX);

    ExperienceMatch {
        score,
        candidate_years: years,
        shortfall_years: shortfall,
        requirement_met,
        seniority_matches,
    }
}
