//! Fixed instruction templates for the two generation calls

/// First call: turn a short seed prompt into a longer one.
pub fn enhance_prompt(base_prompt: &str) -> String {
    format!(
        "Convert this prompt to a more detailed, comprehensive version around 100 words: \"{}\"",
        base_prompt
    )
}

/// Second call: run the enhanced prompt against the user's input.
pub fn generate_output(enhanced_prompt: &str, user_input: &str) -> String {
    format!("Max 100 words output. Prompt: {}\n\nInput: {}", enhanced_prompt, user_input)
}
