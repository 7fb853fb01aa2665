// Prompt constants for the AI logic scorer.

pub const AI_LOGIC_SYSTEM: &str = "You are a senior technical recruiter. \
    You judge how relevant a candidate is for a position. \
    Answer with exactly two lines and nothing else.";

/// AI logic prompt template. Replace: {candidate_digest}, {position_digest}
pub const AI_LOGIC_PROMPT_TEMPLATE: &str = r#"RELEVANCE ASSESSMENT

CANDIDATE:
{candidate_digest}

POSITION:
{position_digest}

Rate how relevant this candidate is for this position on a scale of 0 to 10,
considering the logic of the career path and not only keyword overlap.

Answer in EXACTLY this format:
SCORE: <integer 0-10>
REASON: <one sentence>"#;
