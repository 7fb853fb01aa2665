//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::models::{CandidateProfile, PositionProfile};
use crate::errors::AppError;
use crate::matching::models::MatchResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CandidateProfileResponse {
    pub candidate: CandidateProfile,
}

#[derive(Debug, Serialize)]
pub struct PositionProfileResponse {
    pub position: PositionProfile,
}

#[derive(Debug, Deserialize)]
pub struct MatchTextsRequest {
    pub resume_text: String,
    pub position_text: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchProfilesRequest {
    #[serde(default)]
    pub resume_text: String,
    pub candidate: CandidateProfile,
    pub position: PositionProfile,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub computed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<CandidateProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionProfile>,
    pub result: MatchResult,
}

impl MatchResponse {
    fn new(result: MatchResult) -> Self {
        Self {
            match_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            candidate: None,
            position: None,
            result,
        }
    }
}

fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze/resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<CandidateProfileResponse>, AppError> {
    require_text(&request.text, "text")?;
    let candidate = state.engine.analyze_resume(&request.text).await;
    Ok(Json(CandidateProfileResponse { candidate }))
}

/// POST /api/v1/analyze/position
pub async fn handle_analyze_position(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<PositionProfileResponse>, AppError> {
    require_text(&request.text, "text")?;
    let position = state.engine.analyze_position(&request.text).await;
    Ok(Json(PositionProfileResponse { position }))
}

/// POST /api/v1/matches
///
/// Full pipeline: both analyzers, then every scorer. Returns both profiles
/// alongside the result so callers can store them.
pub async fn handle_match_texts(
    State(state): State<AppState>,
    Json(request): Json<MatchTextsRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    require_text(&request.resume_text, "resume_text")?;
    require_text(&request.position_text, "position_text")?;

    let outcome = state
        .engine
        .match_texts(&request.resume_text, &request.position_text)
        .await;

    let mut response = MatchResponse::new(outcome.result);
    response.candidate = Some(outcome.candidate);
    response.position = Some(outcome.position);
    Ok(Json(response))
}

/// POST /api/v1/matches/profiles
///
/// Scores profiles that were analyzed earlier. `resume_text` is optional;
/// without it the human reading works from the profile alone.
pub async fn handle_match_profiles(
    State(state): State<AppState>,
    Json(request): Json<MatchProfilesRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let result = state
        .engine
        .match_profiles(&request.resume_text, &request.candidate, &request.position)
        .await;
    Ok(Json(MatchResponse::new(result)))
}
