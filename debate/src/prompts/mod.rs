//! Prompt construction
//!
//! Role system prompts for the built-in roster, and the turn/vote prompts
//! the engine and participants send to their providers.

mod analyst;
mod critic;
mod supporter;

pub use analyst::ANALYST_PROMPT;
pub use critic::CRITIC_PROMPT;
pub use supporter::SUPPORTER_PROMPT;

use crate::types::Response;

/// Prompt for a participant's turn, built from the entire transcript so far
pub fn turn_prompt(topic: &str, transcript: &[Response]) -> String {
    if transcript.is_empty() {
        return format!("Topic: {}\n\nProvide your initial response:", topic);
    }

    let context = transcript
        .iter()
        .map(Response::transcript_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Topic: {}\n\nPrevious responses:\n{}\n\nYour response:",
        topic, context
    )
}

/// Prompt asking a participant to vote on the debate so far
pub fn vote_prompt(topic: &str, contents: &[String]) -> String {
    let listed = contents
        .iter()
        .map(|c| format!("- {}", c))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Topic: {}\n\nCurrent responses:\n{}\n\n\
         Do you agree with where this debate has landed? \
         Start your answer with one word: agree, disagree, or needs_revision. \
         Then give your reasoning in one or two sentences.",
        topic, listed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_turn_prompt() {
        let prompt = turn_prompt("Is Rust fast?", &[]);
        assert_eq!(prompt, "Topic: Is Rust fast?\n\nProvide your initial response:");
    }

    #[test]
    fn test_turn_prompt_includes_full_history_in_order() {
        let transcript = vec![
            Response::new("a1", "analyst", "Yes"),
            Response::new("a2", "critic", "It depends"),
        ];
        let prompt = turn_prompt("Is Rust fast?", &transcript);

        assert_eq!(
            prompt,
            "Topic: Is Rust fast?\n\nPrevious responses:\n\
             a1 (analyst): Yes\na2 (critic): It depends\n\nYour response:"
        );
    }

    #[test]
    fn test_vote_prompt_lists_contents() {
        let prompt = vote_prompt("t", &["one".to_string(), "two".to_string()]);
        assert!(prompt.contains("- one\n- two"));
        assert!(prompt.contains("needs_revision"));
    }

    #[test]
    fn test_role_prompts_are_distinct() {
        assert_ne!(ANALYST_PROMPT, CRITIC_PROMPT);
        assert_ne!(CRITIC_PROMPT, SUPPORTER_PROMPT);
    }
}
