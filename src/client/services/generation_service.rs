use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::client::models::app_state::ChainStage;
use crate::client::models::messages::Message;
use crate::common::error::GenerationError;

/// A hosted text model: one prompt in, one text out.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    fn model_name(&self) -> &str;

    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Performs exactly one generation call and wraps the outcome for the UI loop.
/// No retry: a failure is handed back as-is.
pub async fn run_generation(model: Arc<dyn GenerativeModel>, stage: ChainStage, prompt: String) -> Message {
    info!("[GENERATION] {} call to {} ({} chars)", stage, model.model_name(), prompt.chars().count());
    let result = model.generate_text(&prompt).await.map_err(|e| e.to_string());
    if let Ok(text) = &result {
        debug!("[GENERATION] {} call returned {} chars", stage, text.chars().count());
    }
    Message::GenerationFinished { stage, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        reply: Result<String, ()>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl GenerativeModel for Recording {
        fn model_name(&self) -> &str {
            "recording"
        }

        async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|_| GenerationError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn wraps_success_with_its_stage() {
        let model = Arc::new(Recording { reply: Ok("done".into()), prompts: Mutex::new(vec![]) });
        let msg = run_generation(model.clone(), ChainStage::Generate, "p".into()).await;
        match msg {
            Message::GenerationFinished { stage, result } => {
                assert_eq!(stage, ChainStage::Generate);
                assert_eq!(result, Ok("done".to_string()));
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(*model.prompts.lock().unwrap(), vec!["p".to_string()]);
    }

    #[tokio::test]
    async fn failure_is_stringified_and_not_retried() {
        let model = Arc::new(Recording { reply: Err(()), prompts: Mutex::new(vec![]) });
        let msg = run_generation(model.clone(), ChainStage::Enhance, "p".into()).await;
        assert!(matches!(
            msg,
            Message::GenerationFinished { stage: ChainStage::Enhance, result: Err(ref e) } if e == "model response contained no text"
        ));
        assert_eq!(model.prompts.lock().unwrap().len(), 1);
    }
}
