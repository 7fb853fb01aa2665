//! Pure conversion of a qualitative reading into a 0–15 score. No external calls.
//!
//! Starts at a neutral 7 and moves with fit score, flag counts, confidence,
//! deal breakers, career-gap handling, study status, job-hopping and
//! over/under-qualification risk.

use crate::analysis::lenient::is_specified;
use crate::human_reading::models::{ConfidenceLevel, HumanReadingResult, RiskLevel, StudyStatus};
use crate::scoring::HUMAN_READING_MAX;

/// Score of a reading that says nothing either way; also used for degraded readings.
pub const NEUTRAL_SCORE: u32 = 7;

pub fn human_reading_score(reading: &HumanReadingResult) -> u32 {
    let flags = &reading.flags;
    let fit = &reading.job_fit_analysis;
    let status = &reading.current_status;

    let mut score = NEUTRAL_SCORE as f64;

    if let Some(fit_score) = fit.fit_score {
        score += (fit_score.clamp(1.0, 10.0) - 5.0) * 0.6;
    }

    score += (flags.green_flags.len() as f64 * 0.8).min(4.0);
    score -= (flags.red_flags.len() as f64 * 2.5).min(6.0);
    score -= (flags.yellow_flags.len() as f64 * 0.5).min(2.0);
    score -= flags.hidden_signals.len() as f64 * 0.3;

    score += match reading.confidence_level {
        ConfidenceLevel::VeryConfident => 2.0,
        ConfidenceLevel::Confident => 1.0,
        ConfidenceLevel::Uncertain => -0.5,
        ConfidenceLevel::NeedMoreInfo => -1.5,
    };

    score -= fit.deal_breakers.len() as f64 * 3.0;

    if status.has_career_gaps {
        let explained = is_specified(&status.gap_explanation)
            && status.gap_explanation.trim().chars().count() > 10;
        score -= if explained { 0.5 } else { 2.5 };
    }

    score += match status.study_status {
        StudyStatus::DroppedOut => -2.0,
        StudyStatus::InProgress => 0.5,
        StudyStatus::Completed => 1.0,
        StudyStatus::NotStudying | StudyStatus::Unknown => 0.0,
    };

    score += match status.job_hopping_risk {
        RiskLevel::High => -2.0,
        RiskLevel::Medium => -1.0,
        RiskLevel::Low => 0.5,
        RiskLevel::Unknown => 0.0,
    };

    score -= match fit.overqualified_risk {
        RiskLevel::High => 1.5,
        RiskLevel::Medium => 0.5,
        _ => 0.0,
    };

    score -= match fit.underqualified_risk {
        RiskLevel::High => 2.0,
        RiskLevel::Medium => 1.0,
        _ => 0.0,
    };

    if is_specified(&fit.unique_value) && fit.unique_value.trim().chars().count() > 20 {
        score += 1.0;
    }

    if reading.candidate_understanding.strengths_from_reading.len() >= 4 {
        score += 0.5;
    }

    score.round().clamp(0.0, HUMAN_READING_MAX as f64) as u32
}
