//! The judge evaluation prompt.
//!
//! The prompt is fixed: it embeds the narration verbatim, the location
//! facts, a banded rubric, and a strict two-line output format. The
//! framing deliberately narrows the judge to ONE dimension - creativity -
//! so it cannot drift into re-scoring what the deterministic scorers
//! already cover.

use critique_core::Location;

/// Label of the score line the judge must emit.
pub const SCORE_LABEL: &str = "CREATIVITY_SCORE";

/// Label of the feedback line the judge must emit.
pub const FEEDBACK_LABEL: &str = "FEEDBACK";

/// Build the creativity evaluation prompt for one narration.
pub fn creativity_prompt(narration: &str, location: &Location) -> String {
    format!(
        r#"You are an expert evaluator of creative writing, specifically irreverent in-character sci-fi narration.

Evaluate the following narration for CREATIVITY only on a scale of 0-100:

**Narration to evaluate:**
"{narration}"

**Context:**
- Location: {name}
- Type: {kind}
- Dimension: {dimension}

**Creativity Criteria (0-100):**
- Originality: Unique perspective or jokes (not generic)
- Humor Quality: Actually funny, clever wordplay
- Unexpected Elements: Surprising observations or connections
- Entertainment Value: Engaging and memorable

**IMPORTANT:**
- Score 80-100: Exceptional, genuinely creative and hilarious
- Score 60-79: Good, solid creativity with some unique elements
- Score 40-59: Average, somewhat creative but predictable
- Score 20-39: Below average, mostly generic
- Score 0-19: Poor, no creativity or very generic

Respond in this EXACT format:
{score_label}: [number 0-100]
{feedback_label}: [2-3 sentences explaining the score, focusing on what works and what could be improved]"#,
        narration = narration,
        name = location.name,
        kind = location.kind,
        dimension = location.dimension,
        score_label = SCORE_LABEL,
        feedback_label = FEEDBACK_LABEL,
    )
}
