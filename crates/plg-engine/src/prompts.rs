//! Prompt templates sent to the oracle.

use plg_core::entities::ContextBlock;

/// Render context blocks as `- Role Label: text` lines.
#[must_use]
pub fn format_context(blocks: &[ContextBlock]) -> String {
    blocks
        .iter()
        .map(|block| format!("- {}: {}", block.role_label(), block.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn summary_prompt(context_text: &str) -> String {
    format!(
        r"
Please synthesize the following points into a concise summary of the user's situation.
Focus on the key elements and desired outcome.

Context points:
{context_text}

Summary:
"
    )
}

#[must_use]
pub fn branch_prompt(parent_summary: &str, context_text: &str, max_children: usize) -> String {
    format!(
        r#"
You are a creative strategist and life coach. Your task is to brainstorm the next set of sequential decision points or outcomes that would follow from a previous choice.

**Initial User Context:**
{context_text}

**The user has just made the following decision:**
{parent_summary}

Now, generate exactly {max_children} distinct, realistic, and actionable *next steps* or *consequences* that would logically follow. These should represent the next fork in the road after committing to the previous decision. They should not be variations of the parent decision, but what comes *after*.

For each generated path, provide a brief summary and a structured analysis of its tradeoffs.

Return your response as a single, flat JSON array of objects. Each object must have two keys: "decision" (a string) and "tradeoffs" (a list of strings).
Each tradeoff string must start with either "+" (for a positive tradeoff) or "-" (for a negative tradeoff).

Example format:
[
    {{
        "decision": "First possible path...",
        "tradeoffs": [
            "+ More creative freedom",
            "- Less stable income"
        ]
    }}
]
"#
    )
}

#[must_use]
pub fn tag_prompt(decision_text: &str) -> String {
    format!(
        r#"
You are a strategic analyst and psychologist. Your task is to analyze the following proposed life path or decision and assign it tags for risk, growth potential, and emotional tone.

**Decision to Analyze:**
"{decision_text}"

**Instructions:**
1.  **Risk**: Assess the level of financial, social, or personal risk. Rate it as "Low", "Medium", "High", or "Very High".
2.  **Growth Potential**: Assess the potential for personal or professional growth. Rate it as "Low", "Medium", "High", or "Transformative".
3.  **Emotional Tone**: Describe the primary emotional tone of this path. Use a single descriptive word, such as "Hopeful", "Anxious", or "Pragmatic".

Return your analysis as a single, flat JSON object. Do not include any other text, explanation, or markdown formatting.

Example format:
{{
  "risk": "Medium",
  "growth": "High",
  "emotion": "Ambitious"
}}
"#
    )
}
