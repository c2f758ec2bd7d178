//! Re-usable prompt skeletons for the two documentation operations.
//!
//! Templates ask for Markdown output, which is why successful replies go
//! through the fence stripper in [`crate::llm::protocol`].

use crate::error::{ScribeError, ScribeResult};

fn require_non_empty(value: &str, field: &str) -> ScribeResult<()> {
    if value.trim().is_empty() {
        return Err(ScribeError::Validation {
            reason: format!("{} cannot be empty", field),
        });
    }
    Ok(())
}

/// Instruction template for documenting a single code blob. Rejects
/// empty/whitespace-only input before any network activity happens.
pub fn documentation_prompt(source_code: &str) -> ScribeResult<String> {
    require_non_empty(source_code, "Source code")?;

    Ok(format!(
        "You are a senior technical writer producing reference documentation.

Write complete documentation in Markdown for the source code below. Cover:
- a one-paragraph overview of what the code does,
- every public function, type, and constant, with parameters and return values,
- usage notes and noteworthy edge cases.

Answer with the documentation only, no commentary before or after it.

SOURCE CODE:
{}",
        source_code
    ))
}

/// Instruction template for suggesting a documentation update from two code
/// versions. Both versions are required.
pub fn update_prompt(original_code: &str, updated_code: &str) -> ScribeResult<String> {
    require_non_empty(original_code, "Original code")?;
    require_non_empty(updated_code, "Updated code")?;

    Ok(format!(
        "You are a senior technical writer maintaining existing documentation.

Compare the two versions of the source code below and suggest, in Markdown, how
the documentation should change: which sections are now stale, what must be
added for new behavior, and what can be removed. Quote the relevant code where
it helps.

Answer with the suggested update only, no commentary before or after it.

ORIGINAL VERSION:
{}

UPDATED VERSION:
{}",
        original_code, updated_code
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documentation_prompt_embeds_the_code() {
        let prompt = documentation_prompt("fn answer() -> u32 { 42 }").unwrap();
        assert!(prompt.contains("fn answer() -> u32 { 42 }"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn documentation_prompt_rejects_blank_input() {
        for input in ["", "   ", "\n\t"] {
            assert!(matches!(
                documentation_prompt(input),
                Err(ScribeError::Validation { .. })
            ));
        }
    }

    #[test]
    fn update_prompt_embeds_both_versions() {
        let prompt = update_prompt("fn old() {}", "fn new() {}").unwrap();
        assert!(prompt.contains("fn old() {}"));
        assert!(prompt.contains("fn new() {}"));
        let original_at = prompt.find("fn old() {}").unwrap();
        let updated_at = prompt.find("fn new() {}").unwrap();
        assert!(original_at < updated_at);
    }

    #[test]
    fn update_prompt_rejects_either_side_blank() {
        assert!(matches!(
            update_prompt("", "fn new() {}"),
            Err(ScribeError::Validation { .. })
        ));
        assert!(matches!(
            update_prompt("fn old() {}", "  "),
            Err(ScribeError::Validation { .. })
        ));
    }
}
