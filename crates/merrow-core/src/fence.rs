/// Strips markdown code fences from generated output.
///
/// Models wrap diagrams in ` ```mermaid ... ``` ` (with or without the
/// language tag) despite being told not to. Removing the markers and trimming
/// is all Mermaid needs; already-unfenced input passes through unchanged, so
/// the call is idempotent.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```mermaid", "")
        .replace("```", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fence_with_language_tag() {
        let input = "```mermaid\ngraph TD\nA-->B\n```";
        assert_eq!(strip_code_fences(input), "graph TD\nA-->B");
    }

    #[test]
    fn strips_fence_without_language_tag() {
        let input = "```\ngraph TD\nA-->B\n```\n";
        assert_eq!(strip_code_fences(input), "graph TD\nA-->B");
    }

    #[test]
    fn unfenced_input_is_only_trimmed() {
        assert_eq!(strip_code_fences("  graph TD\nA-->B\n"), "graph TD\nA-->B");
    }

    #[test]
    fn is_idempotent() {
        let once = strip_code_fences("```mermaid\ngraph TD\n```");
        assert_eq!(strip_code_fences(&once), once);
    }
}
