use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use thiserror::Error;

const MODEL: &str = "gpt-4o";

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Api(#[from] async_openai::error::OpenAIError),
    #[error("no content in the completion response")]
    EmptyResponse,
}

/// The two text-generation calls the pipeline makes: normalize an extracted
/// question, and produce answer guidance for it. No retry, no caching.
#[async_trait::async_trait]
pub trait QuestionRewriter: Send + Sync {
    async fn rephrase_question(&self, question: &str) -> Result<String, RewriteError>;
    async fn answer_guidance(
        &self,
        question: &str,
        company_name: &str,
    ) -> Result<String, RewriteError>;
}

pub struct OpenaiClient {
    client: Client<OpenAIConfig>,
}

impl OpenaiClient {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        OpenaiClient {
            client: Client::with_config(config),
        }
    }

    async fn complete(&self, prompt: String) -> Result<String, RewriteError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(RewriteError::EmptyResponse)
    }
}

#[async_trait::async_trait]
impl QuestionRewriter for OpenaiClient {
    async fn rephrase_question(&self, question: &str) -> Result<String, RewriteError> {
        let prompt = format!(
            "Rephrase the following interview question/description in a straightforward \
             and concise manner, avoiding unnecessary filler words like 'Certainly', \
             'Sure', and 'Of course' and reply with only the rephrased content: {}",
            question
        );
        self.complete(prompt).await
    }

    async fn answer_guidance(
        &self,
        question: &str,
        company_name: &str,
    ) -> Result<String, RewriteError> {
        let prompt = format!(
            "In one paragraph or less, explain how I can best answer this interview \
             question for {} in a straightforward and concise manner, avoiding \
             unnecessary filler words like 'Certainly', 'Sure', and 'Of course': {}",
            company_name, question
        );
        self.complete(prompt).await
    }
}
