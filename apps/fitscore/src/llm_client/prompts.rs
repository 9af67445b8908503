// All LLM prompt constants for the generative evaluation engine.

/// System prompt for résumé evaluation — enforces JSON-only output.
pub const AI_EVAL_SYSTEM: &str =
    "You are an expert technical recruiter evaluating how well a resume fits \
    a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Evaluation prompt template. Replace `{resume_text}` and `{jd_text}`
/// before sending.
pub const AI_EVAL_PROMPT_TEMPLATE: &str = r#"Evaluate the following resume against the following job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "Score": 72,
  "Verdict": "Good Match",
  "Feedback": "Two to four sentences of concrete, actionable feedback.",
  "Pros": ["Specific strength relevant to this role"],
  "Cons": ["Specific gap relevant to this role"]
}

Rules:
- "Score" is an integer from 0 to 100.
- "Verdict" is exactly one of: "Strong Match", "Good Match", "Fair Match", "Poor Match".
- "Pros" and "Cons" each contain 2 to 5 short strings.
- Judge substance over formatting; ignore layout and typography entirely.

RESUME:
{resume_text}

JOB DESCRIPTION:
{jd_text}"#;
