pub mod base_prompt;
pub mod enhanced_prompt;
pub mod output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::app_state::PromptChainState;

    #[test]
    fn captions_follow_the_call_in_flight() {
        let mut state = PromptChainState::default();
        state.base_prompt = "seed".into();
        state.enhanced_prompt = "enhanced".into();
        state.user_input = "x".into();
        assert_eq!(base_prompt::submit_label(&state), "Enhance Prompt");
        assert_eq!(enhanced_prompt::submit_label(&state), "Generate Output");

        state.begin_enhance().unwrap();
        assert_eq!(base_prompt::submit_label(&state), "Enhancing...");
        assert_eq!(enhanced_prompt::submit_label(&state), "Generate Output");
    }

    #[test]
    fn editor_text_drops_one_trailing_newline() {
        assert_eq!(base_prompt::editor_text(""), "");
        assert_eq!(base_prompt::editor_text("\n"), "");
        assert_eq!(base_prompt::editor_text("a haiku\n"), "a haiku");
        assert_eq!(base_prompt::editor_text("line one\nline two\n\n"), "line one\nline two\n");
        assert_eq!(base_prompt::editor_text("no newline"), "no newline");
    }

    #[test]
    fn generate_caption_while_generating() {
        let mut state = PromptChainState::default();
        state.enhanced_prompt = "enhanced".into();
        state.user_input = "x".into();
        state.begin_generate().unwrap();
        assert_eq!(enhanced_prompt::submit_label(&state), "Generating...");
        assert_eq!(base_prompt::submit_label(&state), "Enhance Prompt");
    }
}
