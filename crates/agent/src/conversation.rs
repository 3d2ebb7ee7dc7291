//! The conversation engine: one question in, one grounded answer out.
//!
//! Each turn sends a system instruction (persona, grounding context and
//! response format) followed by the whole transcript so far. The reasoning
//! segment is removed from the reply before it is stored.

use std::sync::Arc;

use artscope_config::InferenceConfig;
use artscope_core::message::{Message, Transcript};
use artscope_core::provider::{Provider, ProviderRequest};
use tracing::{debug, info, warn};

use crate::reasoning::{REASONING_END, REASONING_START, strip_reasoning};

/// Fixed behaviour instructions for the model.
pub const PERSONA: &str = "You are an expert art historian helping someone explore a museum \
artwork. Answer concisely and in plain language. Ground every claim in the context below and \
cite the research source number when you rely on one. If the context does not support an \
answer, say that you are uncertain instead of guessing. Briefly explain any art-historical \
term you use.";

/// Prefix of the assistant turn recorded when the model call fails.
pub const ERROR_PREFIX: &str = "Error generating response:";

/// The system instruction for one turn.
pub fn system_prompt(context: &str) -> String {
    format!(
        "{PERSONA}\n\n\
         CONTEXT:\n{context}\n\n\
         RESPONSE FORMAT:\n\
         First reason step by step inside {REASONING_START}...{REASONING_END}. \
         After the closing {REASONING_END}, write only the answer for the user."
    )
}

pub struct ConversationEngine {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
}

impl ConversationEngine {
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.7,
        }
    }

    pub fn from_config(provider: Arc<dyn Provider>, config: &InferenceConfig) -> Self {
        Self::new(provider, config.model.clone()).with_temperature(config.temperature)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Used for every later turn; the transcript is left alone.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
        info!(model = %self.model, "Model switched");
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    /// Run one turn and return the assistant text that was appended.
    ///
    /// The user turn is appended first and always stays. A failed model call
    /// appends an assistant turn describing the failure instead of an answer.
    pub async fn submit_turn(
        &self,
        transcript: &mut Transcript,
        context: &str,
        user_message: &str,
    ) -> String {
        transcript.push(Message::user(user_message));

        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(Message::system(system_prompt(context)));
        messages.extend(transcript.messages.iter().cloned());

        let request =
            ProviderRequest::new(self.model.clone(), messages).with_temperature(self.temperature);

        debug!(
            provider = self.provider.name(),
            model = %self.model,
            turns = transcript.len(),
            "Submitting turn"
        );

        let answer = match self.provider.complete(request).await {
            Ok(response) => {
                if let Some(usage) = &response.usage {
                    debug!(total_tokens = usage.total_tokens, "Turn complete");
                }
                strip_reasoning(&response.message.content)
            }
            Err(e) => {
                warn!(error = %e, "Model call failed");
                format!("{ERROR_PREFIX} {e}")
            }
        };

        transcript.push(Message::assistant(answer.clone()));
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::SequentialMockProvider;
    use artscope_core::error::ProviderError;
    use artscope_core::message::Role;

    const CONTEXT: &str = "ARTIST INFORMATION:\nName: Claude Monet";

    fn engine(provider: Arc<SequentialMockProvider>) -> ConversationEngine {
        ConversationEngine::new(provider, "deepseek-r1:1.5b")
    }

    #[test]
    fn system_prompt_embeds_context_and_format() {
        let prompt = system_prompt(CONTEXT);
        assert!(prompt.starts_with(PERSONA));
        assert!(prompt.contains(CONTEXT));
        assert!(prompt.contains("<think>"));
        assert!(prompt.contains("</think>"));
    }

    #[tokio::test]
    async fn answer_has_reasoning_removed() {
        let provider = Arc::new(SequentialMockProvider::single_text(
            "<think>\nLook at the styles field.\n</think>\n\nIt is an Impressionist work.",
        ));
        let engine = engine(provider.clone());
        let mut transcript = Transcript::new();

        let answer = engine
            .submit_turn(&mut transcript, CONTEXT, "What style is this?")
            .await;

        assert_eq!(answer, "It is an Impressionist work.");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages[0].role, Role::User);
        assert_eq!(transcript.messages[0].content, "What style is this?");
        assert_eq!(transcript.messages[1].role, Role::Assistant);
        assert!(!transcript.messages[1].content.contains("think"));
    }

    #[tokio::test]
    async fn reply_without_reasoning_is_trimmed() {
        let provider = Arc::new(SequentialMockProvider::single_text("\n  Painted in 1906.  \n"));
        let mut transcript = Transcript::new();

        let answer = engine(provider)
            .submit_turn(&mut transcript, CONTEXT, "When?")
            .await;
        assert_eq!(answer, "Painted in 1906.");
    }

    #[tokio::test]
    async fn request_carries_system_then_full_history() {
        let provider = Arc::new(SequentialMockProvider::new(vec![
            Ok("First answer.".into()),
            Ok("Second answer.".into()),
        ]));
        let engine = engine(provider.clone()).with_temperature(0.3);
        let mut transcript = Transcript::new();

        engine.submit_turn(&mut transcript, CONTEXT, "Q1").await;
        engine.submit_turn(&mut transcript, CONTEXT, "Q2").await;

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);

        let second = &requests[1];
        assert_eq!(second.model, "deepseek-r1:1.5b");
        assert!((second.temperature - 0.3).abs() < f32::EPSILON);
        let roles: Vec<Role> = second.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert!(second.messages[0].content.contains(CONTEXT));
        assert_eq!(second.messages[3].content, "Q2");
        assert_eq!(transcript.len(), 4);
    }

    #[tokio::test]
    async fn provider_failure_becomes_error_turn() {
        let provider = Arc::new(SequentialMockProvider::failing(ProviderError::Network(
            "connection refused".into(),
        )));
        let mut transcript = Transcript::new();

        let answer = engine(provider)
            .submit_turn(&mut transcript, CONTEXT, "Who painted this?")
            .await;

        assert!(answer.starts_with(ERROR_PREFIX));
        assert!(answer.contains("connection refused"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages[0].content, "Who painted this?");
        assert_eq!(transcript.messages[1].content, answer);
    }

    #[tokio::test]
    async fn set_model_applies_to_next_turn() {
        let provider = Arc::new(SequentialMockProvider::single_text("ok"));
        let mut engine = engine(provider.clone());
        engine.set_model("llama3.2:3b");

        engine
            .submit_turn(&mut Transcript::new(), CONTEXT, "hi")
            .await;

        assert_eq!(engine.model(), "llama3.2:3b");
        assert_eq!(provider.requests()[0].model, "llama3.2:3b");
    }
}
