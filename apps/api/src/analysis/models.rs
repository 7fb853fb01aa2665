//! Structured candidate and position profiles.
//!
//! Field names follow the camelCase schema the analyzer prompts request. Every
//! struct defaults field-by-field, so a partially filled model response still
//! yields a complete profile; `Default` is the "analysis unavailable" profile.

use serde::{Deserialize, Serialize};

use crate::analysis::lenient::{self, not_specified};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
    Management,
    Executive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Secondary,
    PostSecondary,
    Bachelor,
    Master,
    Doctorate,
    #[default]
    #[serde(other)]
    Other,
}

impl EducationLevel {
    /// secondary=1 … doctorate=5; `Other` carries no rank.
    pub fn rank(self) -> u8 {
        match self {
            EducationLevel::Secondary => 1,
            EducationLevel::PostSecondary => 2,
            EducationLevel::Bachelor => 3,
            EducationLevel::Master => 4,
            EducationLevel::Doctorate => 5,
            EducationLevel::Other => 0,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(deserialize_with = "lenient::string")]
    pub city: String,
    /// 0 when unknown.
    #[serde(deserialize_with = "lenient::whole_number")]
    pub age: u32,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: not_specified(),
            phone: not_specified(),
            email: not_specified(),
            city: not_specified(),
            age: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub company: String,
    #[serde(deserialize_with = "lenient::string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub responsibilities: Vec<String>,
}

impl Default for JobEntry {
    fn default() -> Self {
        Self {
            title: not_specified(),
            company: not_specified(),
            duration: not_specified(),
            responsibilities: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkExperience {
    #[serde(deserialize_with = "lenient::number")]
    pub total_years: f64,
    #[serde(deserialize_with = "lenient::nested_list")]
    pub positions: Vec<JobEntry>,
    #[serde(deserialize_with = "lenient::string")]
    pub current_title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_employer: String,
}

impl Default for WorkExperience {
    fn default() -> Self {
        Self {
            total_years: 0.0,
            positions: Vec::new(),
            current_title: not_specified(),
            last_employer: not_specified(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "lenient::enumeration")]
    pub level: EducationLevel,
    #[serde(deserialize_with = "lenient::string_list")]
    pub degrees: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub institutions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateSkills {
    #[serde(deserialize_with = "lenient::string_list")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub professional: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub soft: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateIndustries {
    #[serde(deserialize_with = "lenient::string")]
    pub primary: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub secondary: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub detected: Vec<String>,
}

impl Default for CandidateIndustries {
    fn default() -> Self {
        Self {
            primary: not_specified(),
            secondary: Vec::new(),
            detected: Vec::new(),
        }
    }
}

impl CandidateIndustries {
    /// primary ∪ secondary ∪ detected, placeholders removed.
    pub fn all(&self) -> Vec<&str> {
        std::iter::once(self.primary.as_str())
            .chain(self.secondary.iter().map(String::as_str))
            .chain(self.detected.iter().map(String::as_str))
            .filter(|s| lenient::is_specified(s))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(deserialize_with = "lenient::nested")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "lenient::nested")]
    pub work_experience: WorkExperience,
    #[serde(deserialize_with = "lenient::nested")]
    pub education: Education,
    #[serde(deserialize_with = "lenient::nested")]
    pub skills: CandidateSkills,
    #[serde(deserialize_with = "lenient::nested")]
    pub industries: CandidateIndustries,
    #[serde(deserialize_with = "lenient::string_list")]
    pub hot_keywords: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub summary: String,
    #[serde(deserialize_with = "lenient::enumeration")]
    pub seniority: Seniority,
    #[serde(deserialize_with = "lenient::string_list")]
    pub matched_tags: Vec<String>,
}

impl Default for CandidateProfile {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            work_experience: WorkExperience::default(),
            education: Education::default(),
            skills: CandidateSkills::default(),
            industries: CandidateIndustries::default(),
            hot_keywords: Vec::new(),
            summary: not_specified(),
            seniority: Seniority::default(),
            matched_tags: Vec::new(),
        }
    }
}

impl CandidateProfile {
    /// Condensed multi-line summary quoted in scoring prompts.
    pub fn digest(&self) -> String {
        format!(
            "Current title: {}\nTotal experience: {} years\nSeniority: {:?}\n\
             Education: {:?} ({})\nTechnical skills: {}\nProfessional skills: {}\n\
             Industries: {}\nCity: {}\nSummary: {}",
            self.work_experience.current_title,
            self.work_experience.total_years,
            self.seniority,
            self.education.level,
            join_or_none(&self.education.degrees),
            join_or_none(&self.skills.technical),
            join_or_none(&self.skills.professional),
            join_or_none(&self.industries.all()),
            self.personal_info.city,
            self.summary,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Position profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicInfo {
    #[serde(deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(deserialize_with = "lenient::string")]
    pub employer: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(deserialize_with = "lenient::string")]
    pub department: String,
}

impl Default for BasicInfo {
    fn default() -> Self {
        Self {
            title: not_specified(),
            employer: not_specified(),
            location: not_specified(),
            department: not_specified(),
        }
    }
}

/// Years of experience asked for; 0 means not stated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceRequirement {
    #[serde(deserialize_with = "lenient::number")]
    pub minimum: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub preferred: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Requirements {
    #[serde(deserialize_with = "lenient::string_list")]
    pub must_have: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub nice_to_have: Vec<String>,
    #[serde(deserialize_with = "lenient::nested")]
    pub experience: ExperienceRequirement,
    #[serde(deserialize_with = "lenient::string")]
    pub education: String,
    #[serde(deserialize_with = "lenient::string_list")]
    pub certifications: Vec<String>,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            must_have: Vec::new(),
            nice_to_have: Vec::new(),
            experience: ExperienceRequirement::default(),
            education: not_specified(),
            certifications: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionSkills {
    #[serde(deserialize_with = "lenient::string_list")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub professional: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub soft: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PositionProfile {
    #[serde(deserialize_with = "lenient::nested")]
    pub basic_info: BasicInfo,
    #[serde(deserialize_with = "lenient::nested")]
    pub requirements: Requirements,
    #[serde(deserialize_with = "lenient::nested")]
    pub skills: PositionSkills,
    #[serde(deserialize_with = "lenient::string_list")]
    pub industry: Vec<String>,
    #[serde(deserialize_with = "lenient::enumeration")]
    pub seniority_required: Seniority,
    #[serde(deserialize_with = "lenient::string_list")]
    pub key_requirements: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub matched_tags: Vec<String>,
}

impl PositionProfile {
    /// Condensed multi-line summary quoted in scoring prompts.
    pub fn digest(&self) -> String {
        format!(
            "Title: {} at {}\nLocation: {}\nSeniority required: {:?}\n\
             Experience: minimum {} / preferred {} years\nMust have: {}\n\
             Nice to have: {}\nKey requirements: {}\nEducation: {}\nIndustry: {}",
            self.basic_info.title,
            self.basic_info.employer,
            self.basic_info.location,
            self.seniority_required,
            self.requirements.experience.minimum,
            self.requirements.experience.preferred,
            join_or_none(&self.requirements.must_have),
            join_or_none(&self.requirements.nice_to_have),
            join_or_none(&self.key_requirements),
            self.requirements.education,
            join_or_none(&self.industry),
        )
    }
}

fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}
