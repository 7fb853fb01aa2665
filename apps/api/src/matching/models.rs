use serde::{Deserialize, Serialize};

use crate::human_reading::models::HumanReadingResult;
use crate::scoring::{
    AI_LOGIC_MAX, EDUCATION_MAX, EXPERIENCE_MAX, HUMAN_READING_MAX, INDUSTRY_MAX, LOCATION_MAX,
    SKILLS_MAX, TOTAL_MAX,
};

/// Per-factor points, each already within its cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills: u32,
    pub experience: u32,
    pub industry: u32,
    pub location: u32,
    pub education: u32,
    pub ai_logic: u32,
    pub human_reading: u32,
}

impl ScoreBreakdown {
    /// Caps every factor, whatever the inputs.
    pub fn capped(self) -> Self {
        Self {
            skills: self.skills.min(SKILLS_MAX),
            experience: self.experience.min(EXPERIENCE_MAX),
            industry: self.industry.min(INDUSTRY_MAX),
            location: self.location.min(LOCATION_MAX),
            education: self.education.min(EDUCATION_MAX),
            ai_logic: self.ai_logic.min(AI_LOGIC_MAX),
            human_reading: self.human_reading.min(HUMAN_READING_MAX),
        }
    }

    /// Sum of the capped factors, clamped to 0–100.
    pub fn total(&self) -> u32 {
        let c = self.capped();
        (c.skills + c.experience + c.industry + c.location + c.education + c.ai_logic + c.human_reading)
            .min(TOTAL_MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    /// Disjoint from `missing_skills`.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_requirements: Vec<String>,
    pub missing_requirements: Vec<String>,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
    pub human_insights: Vec<String>,
    pub ai_logic_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub should_proceed: bool,
    pub confidence: MatchConfidence,
    pub employer_summary: String,
    pub recruiter_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
    pub details: MatchDetails,
    pub explanation: String,
    pub human_reading: HumanReadingResult,
    /// True when the human reading is the substituted neutral default.
    pub human_reading_degraded: bool,
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_of_maximal_breakdown_clamps_to_100() {
        let b = ScoreBreakdown {
            skills: u32::MAX / 8,
            experience: 999,
            industry: 999,
            location: 999,
            education: 999,
            ai_logic: 999,
            human_reading: 999,
        };
        assert_eq!(b.total(), 100);
        assert_eq!(b.capped().skills, SKILLS_MAX);
    }

    #[test]
    fn test_total_of_empty_breakdown_is_zero() {
        assert_eq!(ScoreBreakdown::default().total(), 0);
    }

    #[test]
    fn test_confidence_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MatchConfidence::High).unwrap(), r#""high""#);
    }
}
