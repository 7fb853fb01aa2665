//! Natural-language pieces of a match: strengths, risks, human insights, the
//! explanation text and the employer-facing summary.

use crate::analysis::lenient::is_specified;
use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::human_reading::models::HumanReadingResult;
use crate::matching::aggregator::RuleScores;
use crate::matching::models::ScoreBreakdown;
use crate::scoring::ai_logic::AiLogicScore;
use crate::scoring::education::EducationBasis;
use crate::scoring::location::LocationFit;
use crate::scoring::{
    AI_LOGIC_MAX, EDUCATION_MAX, EXPERIENCE_MAX, HUMAN_READING_MAX, INDUSTRY_MAX, LOCATION_MAX,
    SKILLS_MAX,
};

const TOP_FLAGS: usize = 2;
const TOP_MISSING: usize = 3;

pub fn strengths(rules: &RuleScores, ai: &AiLogicScore, reading: &HumanReadingResult) -> Vec<String> {
    let mut out = Vec::new();

    if rules.skills.score >= 20 {
        out.push(format!(
            "Strong skills match ({} of {} required skills)",
            rules.skills.matched_skills.len(),
            rules.skills.matched_skills.len() + rules.skills.missing_skills.len()
        ));
    }
    if rules.experience.requirement_met {
        out.push(format!(
            "Experience meets the requirement ({})",
            format_years(rules.experience.candidate_years)
        ));
    }
    if rules.industry.score >= 15 {
        out.push("Relevant industry background".to_string());
    }
    if rules.location.score >= 8 && rules.location.fit != LocationFit::UnknownPositionLocation {
        out.push("Convenient location".to_string());
    }
    if rules.education.requirement_met && rules.education.basis != EducationBasis::NoRequirement {
        out.push("Meets the education requirements".to_string());
    }
    if ai.score >= 8 {
        out.push(format!("Career path fits the role: {}", ai.reason));
    }

    out.extend(reading.flags.green_flags.iter().take(TOP_FLAGS).cloned());
    out
}

pub fn risks(rules: &RuleScores, missing_skills: &[String], reading: &HumanReadingResult) -> Vec<String> {
    let mut out = Vec::new();

    if rules.skills.score < 15 && !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills
            .iter()
            .take(TOP_MISSING)
            .map(String::as_str)
            .collect();
        out.push(format!("Missing key skills: {}", top.join(", ")));
    }
    if rules.experience.shortfall_years > 0.0 {
        out.push(format!(
            "Below the required experience by {}",
            format_years(rules.experience.shortfall_years)
        ));
    }
    if rules.location.fit == LocationFit::Distant {
        out.push("Lives far from the workplace".to_string());
    }
    if rules.education.basis == EducationBasis::Degree && !rules.education.requirement_met {
        out.push("Does not hold the required degree".to_string());
    }
    if rules.industry.matched_industries.is_empty() && !rules.industry.missing_industries.is_empty() {
        out.push("No background in the position's industry".to_string());
    }

    out.extend(reading.flags.red_flags.iter().take(TOP_FLAGS).cloned());
    out
}

/// "1 year", "2 years", "1.5 years": one decimal at most.
fn format_years(years: f64) -> String {
    let rounded = (years * 10.0).round() / 10.0;
    if rounded == 1.0 {
        "1 year".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{rounded:.0} years")
    } else {
        format!("{rounded:.1} years")
    }
}

pub fn human_insights(reading: &HumanReadingResult) -> Vec<String> {
    let understanding = &reading.candidate_understanding;
    [&understanding.characterization, &understanding.career_path]
        .into_iter()
        .filter(|s| is_specified(s))
        .cloned()
        .chain(reading.job_fit_analysis.fit_reasons.iter().take(TOP_FLAGS).cloned())
        .collect()
}

pub fn tier_label(total: u32) -> &'static str {
    match total {
        80.. => "excellent match",
        65..=79 => "good match",
        50..=64 => "partial match",
        _ => "weak match",
    }
}

pub fn explanation(
    total: u32,
    breakdown: &ScoreBreakdown,
    ai: &AiLogicScore,
    reading: &HumanReadingResult,
) -> String {
    let mut lines = vec![
        format!("Match score {total}/100 ({}).", tier_label(total)),
        format!(
            "Skills {}/{SKILLS_MAX}, experience {}/{EXPERIENCE_MAX}, industry {}/{INDUSTRY_MAX}, \
             location {}/{LOCATION_MAX}, education {}/{EDUCATION_MAX}, AI logic {}/{AI_LOGIC_MAX}, \
             human reading {}/{HUMAN_READING_MAX}.",
            breakdown.skills,
            breakdown.experience,
            breakdown.industry,
            breakdown.location,
            breakdown.education,
            breakdown.ai_logic,
            breakdown.human_reading,
        ),
        format!("Relevance: {}", ai.reason),
    ];
    if is_specified(&reading.human_summary) {
        lines.push(reading.human_summary.clone());
    }
    lines.join("\n")
}

pub fn employer_summary(total: u32, candidate: &CandidateProfile, position: &PositionProfile) -> String {
    let name = if is_specified(&candidate.personal_info.name) {
        candidate.personal_info.name.as_str()
    } else {
        "The candidate"
    };
    let title = if is_specified(&position.basic_info.title) {
        position.basic_info.title.as_str()
    } else {
        "this position"
    };

    match total {
        80.. => format!(
            "{name} is an excellent match for {title} ({total}/100) and is strongly recommended for an interview."
        ),
        65..=79 => format!("{name} is a good match for {title} ({total}/100); an interview is recommended."),
        50..=64 => format!(
            "{name} is a partial match for {title} ({total}/100); consider whether the gaps are acceptable."
        ),
        _ => format!("{name} does not meet the core requirements of {title} ({total}/100)."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::regions::RegionTiers;
    use crate::scoring::similarity::EditDistanceSimilarity;

    fn rules_for(years: f64, minimum: f64, preferred: f64) -> RuleScores {
        let mut c = CandidateProfile::default();
        c.work_experience.total_years = years;
        let mut p = PositionProfile::default();
        p.requirements.experience.minimum = minimum;
        p.requirements.experience.preferred = preferred;
        crate::matching::aggregator::score_rules(
            &c,
            &p,
            &RegionTiers::builtin(),
            &EditDistanceSimilarity::default(),
        )
    }

    #[test]
    fn test_no_experience_requirement_claims_no_strength() {
        let rules = rules_for(0.0, 0.0, 0.0);
        let out = strengths(&rules, &AiLogicScore::default(), &HumanReadingResult::default());
        assert!(!out.iter().any(|s| s.starts_with("Experience meets")));
    }

    #[test]
    fn test_met_experience_requirement_is_a_strength() {
        let rules = rules_for(4.0, 3.0, 5.0);
        let out = strengths(&rules, &AiLogicScore::default(), &HumanReadingResult::default());
        assert!(out.contains(&"Experience meets the requirement (4 years)".to_string()));
    }

    #[test]
    fn test_shortfall_risk_wording() {
        let reading = HumanReadingResult::default();
        let risks_for = |years| risks(&rules_for(years, 3.0, 0.0), &[], &reading);
        assert!(risks_for(2.0).contains(&"Below the required experience by 1 year".to_string()));
        assert!(risks_for(2.5).contains(&"Below the required experience by 0.5 years".to_string()));
        assert!(risks_for(0.0).contains(&"Below the required experience by 3 years".to_string()));
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(1.0), "1 year");
        assert_eq!(format_years(0.0), "0 years");
        assert_eq!(format_years(2.25), "2.3 years");
        assert_eq!(format_years(1.04), "1 year");
    }

    #[test]
    fn test_tier_label_boundaries() {
        assert_eq!(tier_label(100), "excellent match");
        assert_eq!(tier_label(80), "excellent match");
        assert_eq!(tier_label(79), "good match");
        assert_eq!(tier_label(50), "partial match");
        assert_eq!(tier_label(49), "weak match");
        assert_eq!(tier_label(0), "weak match");
    }

    #[test]
    fn test_employer_summary_uses_fallback_names() {
        let summary = employer_summary(40, &CandidateProfile::default(), &PositionProfile::default());
        assert_eq!(
            summary,
            "The candidate does not meet the core requirements of this position (40/100)."
        );
    }

    #[test]
    fn test_employer_summary_names_candidate_and_title() {
        let mut c = CandidateProfile::default();
        c.personal_info.name = "Dana Levi".to_string();
        let mut p = PositionProfile::default();
        p.basic_info.title = "Backend Engineer".to_string();
        let summary = employer_summary(85, &c, &p);
        assert!(summary.starts_with("Dana Levi is an excellent match for Backend Engineer"));
    }

    #[test]
    fn test_human_insights_skip_placeholders_and_take_two_reasons() {
        let mut reading = HumanReadingResult::default();
        reading.candidate_understanding.characterization = "Careful builder".to_string();
        reading.job_fit_analysis.fit_reasons =
            vec!["same stack".to_string(), "same domain".to_string(), "third".to_string()];
        assert_eq!(
            human_insights(&reading),
            vec!["Careful builder", "same stack", "same domain"]
        );
    }
}
