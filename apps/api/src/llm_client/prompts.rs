// Cross-cutting prompt fragments shared by every call site.
// Each feature keeps its own prompts.rs alongside it.

/// Instruction appended to extraction prompts so the model never fabricates facts.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Extract only facts stated in the provided text. \
    Do NOT infer, interpolate, or invent details. \
    When a field is not supported by the text, use \"not specified\" for strings, \
    [] for lists and 0 for numbers.";

/// Instruction restricting tag fields to the supplied vocabulary.
pub const VOCABULARY_INSTRUCTION: &str = "\
    Tag fields (hotKeywords, matchedTags) may ONLY contain terms copied verbatim from \
    the KNOWN KEYWORDS list below, and only when the term also appears in the text. \
    Never create new tags.";
