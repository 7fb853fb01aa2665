//! Match Aggregator — runs every partial scorer and folds them into one `MatchResult`.
//!
//! Flow: five rule scorers (sync) → AI logic + human reading (concurrent external
//! calls) → capped breakdown → explanation, strengths/risks, recommendation.
//!
//! Holds no state between calls: no cache, no memoization, no retries.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::analysis::position_analyzer::analyze_position;
use crate::analysis::resume_analyzer::analyze_resume;
use crate::catalog::KeywordCatalog;
use crate::human_reading::engine::{read_candidate, HumanReading};
use crate::llm_client::TextGenerator;
use crate::matching::explanation;
use crate::matching::models::{
    MatchConfidence, MatchDetails, MatchResult, Recommendation, ScoreBreakdown,
};
use crate::scoring::ai_logic::{score_ai_logic, AiLogicScore};
use crate::scoring::dedup_terms;
use crate::scoring::education::{score_education, EducationMatch};
use crate::scoring::experience::{score_experience, ExperienceMatch};
use crate::scoring::industry::{score_industry, IndustryMatch};
use crate::scoring::location::{score_location, LocationMatch};
use crate::scoring::regions::RegionTiers;
use crate::scoring::similarity::SimilarityStrategy;
use crate::scoring::skills::{score_skills, SkillsMatch};

const HIGH_CONFIDENCE_TOTAL: u32 = 75;
const HIGH_CONFIDENCE_SKILLS: u32 = 15;
const LOW_CONFIDENCE_TOTAL: u32 = 50;
const PROCEED_TOTAL: u32 = 55;
const RED_FLAG_LIMIT: usize = 3;

/// Outputs of the five rule-based scorers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleScores {
    pub skills: SkillsMatch,
    pub experience: ExperienceMatch,
    pub industry: IndustryMatch,
    pub location: LocationMatch,
    pub education: EducationMatch,
}

pub fn score_rules(
    candidate: &CandidateProfile,
    position: &PositionProfile,
    regions: &RegionTiers,
    similarity: &dyn SimilarityStrategy,
) -> RuleScores {
    RuleScores {
        skills: score_skills(candidate, position, similarity),
        experience: score_experience(candidate, position),
        industry: score_industry(candidate, position),
        location: score_location(candidate, position, regions),
        education: score_education(candidate, position),
    }
}

/// Both profiles plus the match computed from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub candidate: CandidateProfile,
    pub position: PositionProfile,
    pub result: MatchResult,
}

/// The matching engine with its injected collaborators.
#[derive(Clone)]
pub struct MatchEngine {
    llm: Arc<dyn TextGenerator>,
    catalog: Arc<KeywordCatalog>,
    regions: Arc<RegionTiers>,
    similarity: Arc<dyn SimilarityStrategy>,
}

impl MatchEngine {
    pub fn new(
        llm: Arc<dyn TextGenerator>,
        catalog: Arc<KeywordCatalog>,
        regions: Arc<RegionTiers>,
        similarity: Arc<dyn SimilarityStrategy>,
    ) -> Self {
        Self {
            llm,
            catalog,
            regions,
            similarity,
        }
    }

    pub async fn analyze_resume(&self, resume_text: &str) -> CandidateProfile {
        analyze_resume(resume_text, self.llm.as_ref(), &self.catalog).await
    }

    pub async fn analyze_position(&self, position_text: &str) -> PositionProfile {
        analyze_position(position_text, self.llm.as_ref(), &self.catalog).await
    }

    /// Scores an already-analyzed pair. `resume_text` feeds the human reading.
    pub async fn match_profiles(
        &self,
        resume_text: &str,
        candidate: &CandidateProfile,
        position: &PositionProfile,
    ) -> MatchResult {
        let rules = score_rules(candidate, position, &self.regions, self.similarity.as_ref());

        let (ai, reading) = tokio::join!(
            score_ai_logic(candidate, position, self.llm.as_ref()),
            read_candidate(resume_text, candidate, position, self.llm.as_ref()),
        );

        let result = aggregate(candidate, position, rules, ai, reading);
        info!(
            "Match computed: total={}, confidence={:?}, proceed={}",
            result.total_score, result.recommendation.confidence, result.recommendation.should_proceed
        );
        result
    }

    /// Analyzes both texts concurrently, then scores the pair.
    pub async fn match_texts(&self, resume_text: &str, position_text: &str) -> MatchOutcome {
        let (candidate, position) = tokio::join!(
            self.analyze_resume(resume_text),
            self.analyze_position(position_text),
        );
        let result = self.match_profiles(resume_text, &candidate, &position).await;
        MatchOutcome {
            candidate,
            position,
            result,
        }
    }
}

/// Folds all partial scores into the final result. Pure.
pub fn aggregate(
    candidate: &CandidateProfile,
    position: &PositionProfile,
    rules: RuleScores,
    ai: AiLogicScore,
    reading: HumanReading,
) -> MatchResult {
    let breakdown = ScoreBreakdown {
        skills: rules.skills.score,
        experience: rules.experience.score,
        industry: rules.industry.score,
        location: rules.location.score,
        education: rules.education.score,
        ai_logic: ai.score,
        human_reading: reading.score(),
    }
    .capped();
    let total_score = breakdown.total();

    let matched_skills = dedup_terms(
        rules
            .skills
            .matched_skills
            .iter()
            .chain(&rules.industry.matched_industries),
    );
    let matched_lower: HashSet<String> = matched_skills.iter().map(|s| s.to_lowercase()).collect();
    let missing_skills: Vec<String> = dedup_terms(
        rules
            .skills
            .missing_skills
            .iter()
            .chain(&rules.industry.missing_industries),
    )
    .into_iter()
    .filter(|s| !matched_lower.contains(&s.to_lowercase()))
    .collect();

    let red_flags = reading.result.flags.red_flags.len();
    let confidence = if total_score < LOW_CONFIDENCE_TOTAL || red_flags >= RED_FLAG_LIMIT {
        MatchConfidence::Low
    } else if total_score >= HIGH_CONFIDENCE_TOTAL
        && breakdown.skills >= HIGH_CONFIDENCE_SKILLS
        && reading.result.confidence_level
            == crate::human_reading::models::ConfidenceLevel::VeryConfident
    {
        MatchConfidence::High
    } else {
        MatchConfidence::Medium
    };
    let should_proceed = total_score >= PROCEED_TOTAL && red_flags < RED_FLAG_LIMIT;

    let details = MatchDetails {
        strengths: explanation::strengths(&rules, &ai, &reading.result),
        risks: explanation::risks(&rules, &missing_skills, &reading.result),
        human_insights: explanation::human_insights(&reading.result),
        matched_requirements: rules.skills.matched_requirements.clone(),
        missing_requirements: rules.skills.missing_requirements.clone(),
        matched_skills,
        missing_skills,
        ai_logic_reason: ai.reason.clone(),
    };

    let recommendation = Recommendation {
        should_proceed,
        confidence,
        employer_summary: explanation::employer_summary(total_score, candidate, position),
        recruiter_summary: reading.result.recruiter_recommendation.clone(),
    };

    MatchResult {
        total_score,
        breakdown,
        explanation: explanation::explanation(total_score, &breakdown, &ai, &reading.result),
        details,
        human_reading: reading.result,
        human_reading_degraded: reading.degraded,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::Seniority;
    use crate::human_reading::heuristic::NEUTRAL_SCORE;
    use crate::human_reading::models::{ConfidenceLevel, HumanReadingResult};
    use crate::llm_client::stub::{FailingGenerator, ScriptedGenerator};
    use crate::scoring::similarity::EditDistanceSimilarity;

    const STRONG_READING: &str = r#"{
        "candidateUnderstanding": {
            "characterization": "Seasoned backend engineer in payments",
            "careerPath": "Steady growth from developer to senior developer"
        },
        "flags": {
            "greenFlags": ["long tenure", "promotions", "relevant domain", "open source work"],
            "redFlags": []
        },
        "jobFitAnalysis": {"fitScore": 9, "fitReasons": ["same stack", "same domain"]},
        "humanSummary": "An easy yes.",
        "recruiterRecommendation": "Schedule a technical interview this week.",
        "confidenceLevel": "very_confident"
    }"#;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn engine(llm: Arc<dyn TextGenerator>) -> MatchEngine {
        MatchEngine::new(
            llm,
            Arc::new(KeywordCatalog::builtin()),
            Arc::new(RegionTiers::builtin()),
            Arc::new(EditDistanceSimilarity::default()),
        )
    }

    fn strong_pair() -> (CandidateProfile, PositionProfile) {
        let skills = ["Python", "SQL", "Docker", "AWS", "Kubernetes"];

        let mut c = CandidateProfile::default();
        c.personal_info.name = "Dana Levi".to_string();
        c.personal_info.city = "Tel Aviv".to_string();
        c.work_experience.total_years = 6.0;
        c.skills.technical = strings(&skills);
        c.industries.primary = "Fintech".to_string();
        c.seniority = Seniority::Senior;

        let mut p = PositionProfile::default();
        p.basic_info.title = "Backend Engineer".to_string();
        p.basic_info.location = "Tel Aviv".to_string();
        p.requirements.must_have = strings(&skills);
        p.requirements.experience.minimum = 3.0;
        p.requirements.experience.preferred = 5.0;
        p.industry = strings(&["Fintech"]);
        p.seniority_required = Seniority::Senior;

        (c, p)
    }

    fn strong_llm() -> Arc<ScriptedGenerator> {
        Arc::new(
            ScriptedGenerator::new()
                .respond("RECRUITER READING", STRONG_READING)
                .respond("RELEVANCE ASSESSMENT", "SCORE: 9\nREASON: Direct continuation of their career"),
        )
    }

    #[tokio::test]
    async fn test_strong_match_is_high_confidence_and_proceeds() {
        let (c, p) = strong_pair();
        let result = engine(strong_llm()).match_profiles("resume text", &c, &p).await;

        assert!(result.total_score >= 75, "total was {}", result.total_score);
        assert_eq!(result.recommendation.confidence, MatchConfidence::High);
        assert!(result.recommendation.should_proceed);
        assert_eq!(result.breakdown.location, 10);
        assert_eq!(result.breakdown.education, 10);
        assert_eq!(result.breakdown.human_reading, 15);
        assert!(!result.human_reading_degraded);
        assert_eq!(
            result.recommendation.recruiter_summary,
            "Schedule a technical interview this week."
        );
        assert!(result.details.strengths.iter().any(|s| s == "long tenure"));
        assert!(result.details.missing_skills.is_empty());
        assert!(result.explanation.starts_with("Match score"));
    }

    #[tokio::test]
    async fn test_fully_unknown_candidate_completes_within_bounds() {
        let (_, p) = strong_pair();
        let c = CandidateProfile::default();
        let llm = Arc::new(FailingGenerator);
        let result = engine(llm).match_profiles("", &c, &p).await;

        let rules = score_rules(&c, &p, &RegionTiers::builtin(), &EditDistanceSimilarity::default());
        assert_eq!(rules.skills.match_ratio, 0.5);
        assert_eq!(result.breakdown.location, 5);
        assert!(result.total_score <= 100);
        assert_eq!(result.recommendation.confidence, MatchConfidence::Low);
    }

    #[tokio::test]
    async fn test_failed_human_reading_degrades_without_error() {
        let (c, p) = strong_pair();
        let llm = Arc::new(
            ScriptedGenerator::new()
                .fail("RECRUITER READING", 529)
                .respond("RELEVANCE ASSESSMENT", "SCORE: 9\nREASON: fine"),
        );
        let result = engine(llm).match_profiles("resume text", &c, &p).await;

        assert!(result.human_reading_degraded);
        assert_eq!(result.human_reading.confidence_level, ConfidenceLevel::NeedMoreInfo);
        assert_eq!(result.breakdown.human_reading, NEUTRAL_SCORE);
        // need_more_info rules out the high tier
        assert_ne!(result.recommendation.confidence, MatchConfidence::High);
    }

    #[tokio::test]
    async fn test_identical_inputs_give_identical_results() {
        let (c, p) = strong_pair();
        let engine = engine(strong_llm());
        let first = engine.match_profiles("resume text", &c, &p).await;
        let second = engine.match_profiles("resume text", &c, &p).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_match_texts_analyzes_both_sides() {
        let llm = Arc::new(
            ScriptedGenerator::new()
                .respond("RECRUITER READING", STRONG_READING)
                .respond("RELEVANCE ASSESSMENT", "SCORE: 7\nREASON: ok")
                .respond("RESUME TO ANALYZE:", r#"{"personalInfo": {"city": "Haifa"}}"#)
                .respond("JOB POSTING TO ANALYZE:", r#"{"basicInfo": {"location": "Haifa"}}"#),
        );
        let outcome = engine(llm.clone()).match_texts("my resume", "the posting").await;
        assert_eq!(outcome.candidate.personal_info.city, "Haifa");
        assert_eq!(outcome.position.basic_info.location, "Haifa");
        assert_eq!(outcome.result.breakdown.location, 10);
        assert_eq!(llm.calls(), 4);
    }

    fn reading(red_flags: usize, confidence: ConfidenceLevel) -> HumanReading {
        let mut result = HumanReadingResult::default();
        result.flags.red_flags = (0..red_flags).map(|i| format!("red {i}")).collect();
        result.confidence_level = confidence;
        HumanReading {
            result,
            degraded: false,
        }
    }

    #[test]
    fn test_three_red_flags_block_proceeding() {
        let (c, p) = strong_pair();
        let rules = score_rules(&c, &p, &RegionTiers::builtin(), &EditDistanceSimilarity::default());
        let ai = AiLogicScore {
            score: 10,
            reason: "x".to_string(),
        };
        let result = aggregate(&c, &p, rules, ai, reading(3, ConfidenceLevel::VeryConfident));
        assert!(!result.recommendation.should_proceed);
        assert_eq!(result.recommendation.confidence, MatchConfidence::Low);
        assert_eq!(result.details.risks.iter().filter(|r| r.starts_with("red")).count(), 2);
    }

    #[test]
    fn test_medium_confidence_without_very_confident_reading() {
        let (c, p) = strong_pair();
        let rules = score_rules(&c, &p, &RegionTiers::builtin(), &EditDistanceSimilarity::default());
        let ai = AiLogicScore {
            score: 8,
            reason: "x".to_string(),
        };
        let result = aggregate(&c, &p, rules, ai, reading(0, ConfidenceLevel::Confident));
        assert!(result.total_score >= 75);
        assert_eq!(result.recommendation.confidence, MatchConfidence::Medium);
        assert!(result.recommendation.should_proceed);
    }

    #[test]
    fn test_matched_and_missing_skills_are_disjoint() {
        let (mut c, mut p) = strong_pair();
        c.skills.technical = strings(&["Python"]);
        p.requirements.must_have = strings(&["Python", "Go", "Kafka"]);
        p.industry = strings(&["Fintech", "Python"]);
        let rules = score_rules(&c, &p, &RegionTiers::builtin(), &EditDistanceSimilarity::default());
        let result = aggregate(&c, &p, rules, AiLogicScore::default(), reading(0, ConfidenceLevel::Uncertain));
        for m in &result.details.matched_skills {
            assert!(!result
                .details
                .missing_skills
                .iter()
                .any(|x| x.eq_ignore_ascii_case(m)));
        }
        assert!(result.details.missing_skills.contains(&"Kafka".to_string()));
    }
}
