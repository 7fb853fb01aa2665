//! Qualitative "recruiter reading" of a candidate.

use serde::{Deserialize, Serialize};

use crate::analysis::lenient::{self, not_specified};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyStatus {
    Completed,
    InProgress,
    DroppedOut,
    NotStudying,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryConfident,
    Confident,
    Uncertain,
    #[default]
    #[serde(other)]
    NeedMoreInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateUnderstanding {
    #[serde(deserialize_with = "lenient::string")]
    pub characterization: String,
    #[serde(deserialize_with = "lenient::string")]
    pub career_path: String,
    #[serde(deserialize_with = "lenient::string")]
    pub motivation_guess: String,
    #[serde(deserialize_with = "lenient::string")]
    pub psychological_profile: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub strengths_from_reading: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub concerns_from_reading: Vec<String>,
}

impl Default for CandidateUnderstanding {
    fn default() -> Self {
        Self {
            characterization: not_specified(),
            career_path: not_specified(),
            motivation_guess: not_specified(),
            psychological_profile: not_specified(),
            strengths_from_reading: Vec::new(),
            concerns_from_reading: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentStatus {
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_employed: bool,
    #[serde(deserialize_with = "lenient::enumeration")]
    pub study_status: StudyStatus,
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_career_gaps: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub gap_explanation: String,
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_in_transition: bool,
    #[serde(deserialize_with = "lenient::enumeration")]
    pub job_hopping_risk: RiskLevel,
}

impl Default for CurrentStatus {
    fn default() -> Self {
        Self {
            is_employed: false,
            study_status: StudyStatus::default(),
            has_career_gaps: false,
            gap_explanation: not_specified(),
            is_in_transition: false,
            job_hopping_risk: RiskLevel::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadingFlags {
    #[serde(deserialize_with = "lenient::string_list")]
    pub green_flags: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub yellow_flags: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub red_flags: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub hidden_signals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobFitAnalysis {
    /// 1–10 when the model provided one.
    #[serde(deserialize_with = "lenient::optional_number")]
    pub fit_score: Option<f64>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub fit_reasons: Vec<String>,
    #[serde(deserialize_with = "lenient::enumeration")]
    pub overqualified_risk: RiskLevel,
    #[serde(deserialize_with = "lenient::enumeration")]
    pub underqualified_risk: RiskLevel,
    #[serde(deserialize_with = "lenient::string")]
    pub culture_fit_guess: String,
    #[serde(deserialize_with = "lenient::string")]
    pub longevity_prediction: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub interview_questions: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub deal_breakers: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub unique_value: String,
}

impl Default for JobFitAnalysis {
    fn default() -> Self {
        Self {
            fit_score: None,
            fit_reasons: Vec::new(),
            overqualified_risk: RiskLevel::default(),
            underqualified_risk: RiskLevel::default(),
            culture_fit_guess: not_specified(),
            longevity_prediction: not_specified(),
            interview_questions: Vec::new(),
            deal_breakers: Vec::new(),
            unique_value: not_specified(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HumanReadingResult {
    #[serde(deserialize_with = "lenient::nested")]
    pub candidate_understanding: CandidateUnderstanding,
    #[serde(deserialize_with = "lenient::nested")]
    pub current_status: CurrentStatus,
    #[serde(deserialize_with = "lenient::nested")]
    pub flags: ReadingFlags,
    #[serde(deserialize_with = "lenient::nested")]
    pub job_fit_analysis: JobFitAnalysis,
    #[serde(deserialize_with = "lenient::string")]
    pub human_summary: String,
    #[serde(deserialize_with = "lenient::string")]
    pub recruiter_recommendation: String,
    #[serde(deserialize_with = "lenient::enumeration")]
    pub confidence_level: ConfidenceLevel,
}

impl Default for HumanReadingResult {
    fn default() -> Self {
        Self {
            candidate_understanding: CandidateUnderstanding::default(),
            current_status: CurrentStatus::default(),
            flags: ReadingFlags::default(),
            job_fit_analysis: JobFitAnalysis::default(),
            human_summary: not_specified(),
            recruiter_recommendation: not_specified(),
            confidence_level: ConfidenceLevel::default(),
        }
    }
}

pub const INSUFFICIENT_ANALYSIS_FLAG: &str = "Insufficient analysis - manual review recommended";

impl HumanReadingResult {
    /// Neutral reading substituted when the external call fails: fit 5, a single
    /// yellow flag, `need_more_info`.
    pub fn fallback() -> Self {
        let mut result = Self::default();
        result.job_fit_analysis.fit_score = Some(5.0);
        result.flags.yellow_flags = vec![INSUFFICIENT_ANALYSIS_FLAG.to_string()];
        result.confidence_level = ConfidenceLevel::NeedMoreInfo;
        result.human_summary =
            "Automated reading could not be completed for this candidate.".to_string();
        result.recruiter_recommendation =
            "Manual review recommended: read the resume before deciding.".to_string();
        result
    }
}
