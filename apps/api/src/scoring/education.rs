//! Education scorer.
//!
//! - nothing required → 10
//! - requirement names a degree → 10 if the candidate holds bachelor or above, else 4
//! - certifications required → overlap ratio scaled 5–10
//! - anything else → 7

use serde::{Deserialize, Serialize};

use crate::analysis::lenient::is_specified;
use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::catalog::mentions_term;
use crate::scoring::{contains_either, dedup_terms, EDUCATION_MAX};

const DEGREE_MISSING: u32 = 4;
const CERTIFICATION_FLOOR: f64 = 5.0;
const AMBIGUOUS: u32 = 7;
/// Bachelor in the secondary=1 … doctorate=5 rank table.
const DEGREE_RANK: u8 = 3;

/// Matched as whole terms, so "ba" does not fire inside "Cuba".
const DEGREE_TERMS: &[&str] = &[
    "degree", "bachelor", "b.sc", "bsc", "b.a", "ba", "master", "masters", "m.sc", "msc", "mba",
    "ph.d", "phd", "doctorate", "university", "academic", "graduate",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationBasis {
    NoRequirement,
    Degree,
    Certifications,
    Ambiguous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationMatch {
    pub score: u32,
    pub basis: EducationBasis,
    pub requirement_met: bool,
}

pub fn score_education(candidate: &CandidateProfile, position: &PositionProfile) -> EducationMatch {
    let requirement = position.requirements.education.as_str();
    let required_certs = dedup_terms(&position.requirements.certifications);

    if !is_specified(requirement) && required_certs.is_empty() {
        return EducationMatch {
            score: EDUCATION_MAX,
            basis: EducationBasis::NoRequirement,
            requirement_met: true,
        };
    }

    if is_specified(requirement) && implies_degree(requirement) {
        let met = candidate.education.level.rank() >= DEGREE_RANK;
        return EducationMatch {
            score: if met { EDUCATION_MAX } else { DEGREE_MISSING },
            basis: EducationBasis::Degree,
            requirement_met: met,
        };
    }

    if !required_certs.is_empty() {
        let held = &candidate.skills.certifications;
        let matched = required_certs
            .iter()
            .filter(|cert| held.iter().any(|h| contains_either(h, cert)))
            .count();
        let ratio = matched as f64 / required_certs.len() as f64;
        let span = EDUCATION_MAX as f64 - CERTIFICATION_FLOOR;
        return EducationMatch {
            score: (CERTIFICATION_FLOOR + ratio * span).round() as u32,
            basis: EducationBasis::Certifications,
            requirement_met: matched == required_certs.len(),
        };
    }

    EducationMatch {
        score: AMBIGUOUS,
        basis: EducationBasis::Ambiguous,
        requirement_met: false,
    }
}

fn implies_degree(requirement: &str) -> bool {
    DEGREE_TERMS
        .iter()
        .any(|term| mentions_term(requirement, term))
}
