pub mod gemini_client;
pub mod generation_service;
pub mod prompts;
