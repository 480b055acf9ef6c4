//! Prompt construction for the diagram-modification call.

/// Sentinel the model is instructed to emit when the edit instructions cannot
/// be applied. Checked with [`is_refusal`] before any post-processing runs.
pub const BAD_INSTRUCTIONS: &str = "BAD_INSTRUCTIONS";

/// System prompt for the modification call.
pub const SYSTEM_MODIFY_PROMPT: &str = r#"You are an expert at modifying Mermaid.js flowchart diagrams.

You will receive the current diagram, an explanation of the system it describes, and the user's edit instructions. Apply the instructions to the diagram while keeping everything the instructions do not touch exactly as it is.

Rules:
1. Return ONLY valid Mermaid.js code. No markdown code fences, no commentary.
2. Preserve the existing direction, node ids, subgraph structure, and click events unless the instructions say otherwise.
3. Never attach a class statement to a subgraph id; class statements may only target nodes.
4. If the instructions are unrelated to the diagram, unclear, or cannot be applied, respond with the single token BAD_INSTRUCTIONS instead of a diagram.
"#;

/// Builds the user message for the modification call, one tagged block per
/// value, in a fixed order.
pub fn modify_user_message(instructions: &str, explanation: &str, diagram: &str) -> String {
    format!(
        "<instructions>\n{instructions}\n</instructions>\n\n<explanation>\n{explanation}\n</explanation>\n\n<diagram>\n{diagram}\n</diagram>"
    )
}

/// Whether generated output is a refusal rather than a diagram.
///
/// The sentinel is matched anywhere in the text: models tend to wrap it in
/// fences or prose instead of emitting it alone.
pub fn is_refusal(text: &str) -> bool {
    text.contains(BAD_INSTRUCTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_wraps_values_in_tagged_blocks() {
        let msg = modify_user_message("make A red", "A is the API", "graph TD\nA-->B");
        assert_eq!(
            msg,
            "<instructions>\nmake A red\n</instructions>\n\n<explanation>\nA is the API\n</explanation>\n\n<diagram>\ngraph TD\nA-->B\n</diagram>"
        );
    }

    #[test]
    fn refusal_is_detected_anywhere_in_the_text() {
        assert!(is_refusal("BAD_INSTRUCTIONS"));
        assert!(is_refusal("```\nBAD_INSTRUCTIONS\n```"));
        assert!(is_refusal("Sorry, BAD_INSTRUCTIONS."));
        assert!(!is_refusal("graph TD\nA-->B"));
    }
}
