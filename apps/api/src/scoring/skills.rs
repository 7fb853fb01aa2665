//! Skills scorer.
//!
//! candidate = technical ∪ professional ∪ certifications ∪ hotKeywords
//! required  = technical ∪ professional ∪ mustHave ∪ keyRequirements
//! bonus     = niceToHave ∪ soft
//!
//! score = round(matchRatio × 25) + min(5, bonusMatches × 2), clamped to SKILLS_MAX.

use serde::{Deserialize, Serialize};

use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::scoring::similarity::SimilarityStrategy;
use crate::scoring::{contains_either, dedup_terms, SKILLS_MAX};

const RATIO_POINTS: f64 = 25.0;
const BONUS_POINTS_EACH: u32 = 2;
const BONUS_POINTS_MAX: u32 = 5;
/// Used when there is nothing to compare: no requirements, or no candidate skills.
const NEUTRAL_RATIO: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsMatch {
    pub score: u32,
    pub match_ratio: f64,
    /// Required items the candidate covers. Disjoint from `missing_skills`.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub bonus_matches: Vec<String>,
    /// mustHave ∪ keyRequirements, partitioned the same way.
    pub matched_requirements: Vec<String>,
    pub missing_requirements: Vec<String>,
}

pub fn score_skills(
    candidate: &CandidateProfile,
    position: &PositionProfile,
    similarity: &dyn SimilarityStrategy,
) -> SkillsMatch {
    let candidate_skills = dedup_terms(
        candidate
            .skills
            .technical
            .iter()
            .chain(&candidate.skills.professional)
            .chain(&candidate.skills.certifications)
            .chain(&candidate.hot_keywords),
    );
    let required = dedup_terms(
        position
            .skills
            .technical
            .iter()
            .chain(&position.skills.professional)
            .chain(&position.requirements.must_have)
            .chain(&position.key_requirements),
    );
    let requirements = dedup_terms(
        position
            .requirements
            .must_have
            .iter()
            .chain(&position.key_requirements),
    );
    let bonus = dedup_terms(
        position
            .requirements
            .nice_to_have
            .iter()
            .chain(&position.skills.soft),
    );

    let covered = |term: &str, pool: &[String]| {
        pool.iter()
            .any(|have| contains_either(have, term) || similarity.is_similar(have, term))
    };

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .into_iter()
        .partition(|req| covered(req, &candidate_skills));

    let (matched_requirements, missing_requirements): (Vec<String>, Vec<String>) = requirements
        .into_iter()
        .partition(|req| covered(req, &candidate_skills));

    // Soft skills only count toward the bonus set.
    let bonus_pool: Vec<String> = candidate_skills
        .iter()
        .chain(&candidate.skills.soft)
        .cloned()
        .collect();
    let bonus_matches: Vec<String> = bonus
        .into_iter()
        .filter(|b| covered(b, &bonus_pool))
        .collect();

    let required_count = matched_skills.len() + missing_skills.len();
    let match_ratio = if required_count == 0 || candidate_skills.is_empty() {
        NEUTRAL_RATIO
    } else {
        matched_skills.len() as f64 / required_count as f64
    };

    let bonus_points = (bonus_matches.len() as u32 * BONUS_POINTS_EACH).min(BONUS_POINTS_MAX);
    let score = ((match_ratio * RATIO_POINTS).round() as u32 + bonus_points).min(SKILLS_MAX);

    SkillsMatch {
        score,
        match_ratio,
        matched_skills,
        missing_skills,
        bonus_matches,
        matched_requirements,
        missing_requirements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::similarity::EditDistanceSimilarity;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn candidate(technical: &[&str]) -> CandidateProfile {
        let mut c = CandidateProfile::default();
        c.skills.technical = strings(technical);
        c
    }

    fn position(must_have: &[&str], nice_to_have: &[&str]) -> PositionProfile {
        let mut p = PositionProfile::default();
        p.requirements.must_have = strings(must_have);
        p.requirements.nice_to_have = strings(nice_to_have);
        p
    }

    fn score(c: &CandidateProfile, p: &PositionProfile) -> SkillsMatch {
        score_skills(c, p, &EditDistanceSimilarity::default())
    }

    #[test]
    fn test_full_overlap_scores_25() {
        let skills = ["Python", "SQL", "Docker", "AWS", "Linux"];
        let result = score(&candidate(&skills), &position(&skills, &[]));
        assert_eq!(result.score, 25);
        assert_eq!(result.matched_skills.len(), 5);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.matched_requirements.len(), 5);
    }

    #[test]
    fn test_no_requirements_uses_neutral_ratio() {
        let result = score(&candidate(&["Python"]), &position(&[], &[]));
        assert_eq!(result.match_ratio, 0.5);
        assert_eq!(result.score, 13);
    }

    #[test]
    fn test_unknown_candidate_uses_neutral_ratio() {
        let result = score(&CandidateProfile::default(), &position(&["Python", "SQL"], &[]));
        assert_eq!(result.match_ratio, 0.5);
        assert_eq!(result.missing_skills, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_containment_and_fuzzy_matching() {
        let c = candidate(&["PostgreSQL", "Javascrypt"]);
        let p = position(&["SQL", "JavaScript", "Haskell"], &[]);
        let result = score(&c, &p);
        assert_eq!(result.matched_skills, vec!["SQL", "JavaScript"]);
        assert_eq!(result.missing_skills, vec!["Haskell"]);
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let c = candidate(&["Rust", "Go"]);
        let p = position(&["rust", "RUST", "Kafka", "Go"], &[]);
        let result = score(&c, &p);
        for m in &result.matched_skills {
            assert!(!result.missing_skills.iter().any(|x| x.eq_ignore_ascii_case(m)));
        }
        assert_eq!(result.matched_skills.len() + result.missing_skills.len(), 3);
    }

    #[test]
    fn test_bonus_capped_at_five() {
        let mut c = candidate(&["Python"]);
        c.skills.soft = strings(&["teamwork", "leadership", "communication"]);
        let p = position(&["Python"], &["teamwork", "leadership", "communication"]);
        let result = score(&c, &p);
        assert_eq!(result.bonus_matches.len(), 3);
        assert_eq!(result.score, 30);
    }

    #[test]
    fn test_score_non_decreasing_in_matches() {
        let required = ["Python", "SQL", "Docker", "AWS"];
        let p = position(&required, &[]);
        let mut last = 0;
        for n in 1..=required.len() {
            let result = score(&candidate(&required[..n]), &p);
            assert!(result.score >= last);
            assert!(result.score <= SKILLS_MAX);
            last = result.score;
        }
    }
}
