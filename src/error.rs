use thiserror::Error;

/// Pipeline error types
#[derive(Error, Debug)]
pub enum PromptGenError {
    #[error("task description is empty")]
    EmptyTask,

    #[error("topic is empty")]
    EmptyTopic,

    #[error("invalid example count: {0} (must be at least 1)")]
    InvalidExampleCount(usize),

    #[error("no examples to assemble")]
    NoExamples,

    #[error("example generation exhausted {attempts} attempts ({accepted} accepted)")]
    AttemptsExhausted { accepted: usize, attempts: u32 },

    #[error("model backend error: {0}")]
    Model(String),

    #[error("OpenAI API error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PromptGenError>;
