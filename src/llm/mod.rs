pub mod gemini;
pub mod media;

use anyhow::Result;

pub use gemini::GeminiClient;
pub use media::InlineImage;

/// One user turn sent to the model: the prompt text followed by any images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub text: String,
    pub images: Vec<InlineImage>,
    /// Label used in timing logs.
    pub operation: &'static str,
}

impl ModelRequest {
    pub fn text(text: impl Into<String>, operation: &'static str) -> Self {
        ModelRequest {
            text: text.into(),
            images: Vec::new(),
            operation,
        }
    }

    pub fn with_images(
        text: impl Into<String>,
        operation: &'static str,
        images: Vec<InlineImage>,
    ) -> Self {
        ModelRequest {
            text: text.into(),
            images,
            operation,
        }
    }
}

/// Text-generation backends. Enum dispatch keeps the handlers free of
/// trait objects.
#[derive(Debug)]
pub enum PromptModel {
    Gemini(GeminiClient),
    #[cfg(test)]
    Scripted(scripted::ScriptedModel),
}

impl PromptModel {
    pub fn is_configured(&self) -> bool {
        match self {
            PromptModel::Gemini(client) => client.is_configured(),
            #[cfg(test)]
            PromptModel::Scripted(model) => model.configured,
        }
    }

    pub fn model_name(&self) -> &str {
        match self {
            PromptModel::Gemini(client) => client.model(),
            #[cfg(test)]
            PromptModel::Scripted(_) => "scripted",
        }
    }

    pub async fn generate(&self, request: ModelRequest) -> Result<String> {
        match self {
            PromptModel::Gemini(client) => client.generate(&request).await,
            #[cfg(test)]
            PromptModel::Scripted(model) => model.generate(request),
        }
    }
}

#[cfg(test)]
pub mod scripted {
    use std::collections::VecDeque;

    use anyhow::{anyhow, Result};
    use parking_lot::Mutex;

    use super::ModelRequest;

    /// Replays canned replies in order and records every request.
    #[derive(Debug, Default)]
    pub struct ScriptedModel {
        pub configured: bool,
        replies: Mutex<VecDeque<Result<String, String>>>,
        calls: Mutex<Vec<ModelRequest>>,
    }

    impl ScriptedModel {
        pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
            ScriptedModel {
                configured: true,
                replies: Mutex::new(
                    replies
                        .into_iter()
                        .map(|reply| reply.map(str::to_string).map_err(str::to_string))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn unconfigured() -> Self {
            ScriptedModel::default()
        }

        pub fn calls(&self) -> Vec<ModelRequest> {
            self.calls.lock().clone()
        }

        pub(super) fn generate(&self, request: ModelRequest) -> Result<String> {
            self.calls.lock().push(request);
            match self.replies.lock().pop_front() {
                Some(Ok(text)) => Ok(text),
                Some(Err(message)) => Err(anyhow!(message)),
                None => Err(anyhow!("no scripted reply left")),
            }
        }
    }
}
