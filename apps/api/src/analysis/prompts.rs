// Prompt constants for the resume and position analyzers.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for resume analysis — enforces JSON-only output.
pub const RESUME_ANALYSIS_SYSTEM: &str = "You are an experienced recruitment analyst. \
    Extract a structured candidate profile from a resume. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Resume analysis prompt template.
/// Replace: {grounding_instruction}, {vocabulary_instruction}, {keywords}, {resume_text}
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

{vocabulary_instruction}

KNOWN KEYWORDS:
{keywords}

Return a JSON object with this EXACT schema:
{
  "personalInfo": {"name": "", "phone": "", "email": "", "city": "", "age": 0},
  "workExperience": {
    "totalYears": 0,
    "positions": [
      {"title": "", "company": "", "duration": "", "responsibilities": [""]}
    ],
    "currentTitle": "",
    "lastEmployer": ""
  },
  "education": {
    "level": "secondary | post_secondary | bachelor | master | doctorate | other",
    "degrees": [""],
    "institutions": [""]
  },
  "skills": {
    "technical": [""],
    "professional": [""],
    "soft": [""],
    "languages": [""],
    "certifications": [""]
  },
  "industries": {"primary": "", "secondary": [""], "detected": [""]},
  "hotKeywords": [""],
  "summary": "Two sentences describing the candidate",
  "seniority": "junior | mid | senior | management | executive",
  "matchedTags": [""]
}

Rules:
- totalYears is the sum of professional experience in years (a number).
- positions are listed most recent first.
- city is the candidate's place of residence as written in the resume.

RESUME TO ANALYZE:
{resume_text}"#;

/// System prompt for job posting analysis — enforces JSON-only output.
pub const POSITION_ANALYSIS_SYSTEM: &str = "You are an experienced recruitment analyst. \
    Extract the structured requirements of a job posting. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Position analysis prompt template.
/// Replace: {grounding_instruction}, {vocabulary_instruction}, {keywords}, {position_text}
pub const POSITION_ANALYSIS_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

{vocabulary_instruction}

KNOWN KEYWORDS:
{keywords}

Return a JSON object with this EXACT schema:
{
  "basicInfo": {"title": "", "employer": "", "location": "", "department": ""},
  "requirements": {
    "mustHave": [""],
    "niceToHave": [""],
    "experience": {"minimum": 0, "preferred": 0},
    "education": "",
    "certifications": [""]
  },
  "skills": {"technical": [""], "professional": [""], "soft": [""], "languages": [""]},
  "industry": [""],
  "seniorityRequired": "junior | mid | senior | management | executive",
  "keyRequirements": [""],
  "matchedTags": [""]
}

Rules:
- experience.minimum / preferred are years as numbers; 0 when the posting does not say.
- mustHave: explicit must-haves ("required", "must have", minimum years).
- niceToHave: "preferred", "advantage", "bonus", "a plus".
- keyRequirements: the 3-5 requirements that decide the hire.

JOB POSTING TO ANALYZE:
{position_text}"#;
