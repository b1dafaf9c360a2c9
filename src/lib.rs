//! # promptgen — automated few-shot prompt construction
//!
//! Drives an LLM to synthesize its own few-shot examples for a task,
//! rejects pairs that echo the prompt's structural delimiters, and
//! assembles the accepted set into a final prompt. A second pipeline
//! iteratively refines a free-form "thought" on a topic by feeding each
//! round's completion back into the next round's prompt.

pub mod error;
pub mod fewshot;
pub mod history;
pub mod model;
pub mod prompts;
pub mod thought;
pub mod types;

// Re-exports
pub use error::{PromptGenError, Result};
pub use fewshot::{example_is_clean, AutoPrompt};
pub use model::{CompletionModel, OpenAiModel, StopSet};
pub use thought::{ConsoleDisplay, SilentDisplay, ThoughtDisplay, ThoughtLoop};
pub use types::{AutoPromptConfig, Example, ModelConfig, ThoughtConfig};
