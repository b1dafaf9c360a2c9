use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single input/output demonstration pair for a task.
///
/// Both fields are raw model output. A pair only enters an assembled
/// prompt after passing the delimiter-echo filter in [`crate::fewshot`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Example {
    pub input: String,
    pub output: String,
}

impl Example {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Configuration for the few-shot auto-prompt pipeline
#[derive(Debug, Clone)]
pub struct AutoPromptConfig {
    /// Number of accepted examples to embed in the final prompt
    pub example_num: usize,
    /// Total generation-attempt budget for one collection.
    ///
    /// Each attempt costs two model calls. The budget bounds the
    /// rejection-retry loop, which would otherwise spin forever on a
    /// model that keeps echoing prompt delimiters.
    pub max_attempts: u32,
}

impl Default for AutoPromptConfig {
    fn default() -> Self {
        Self {
            example_num: 3,
            max_attempts: 30,
        }
    }
}

impl AutoPromptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_example_num(mut self, n: usize) -> Self {
        self.example_num = n;
        self
    }

    pub fn with_max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }
}

/// Configuration for the thought refinement loop
#[derive(Debug, Clone)]
pub struct ThoughtConfig {
    /// Number of refinement rounds
    pub iterations: u32,
    /// Pause before the display is cleared between rounds
    pub delay: Duration,
}

impl Default for ThoughtConfig {
    fn default() -> Self {
        Self {
            iterations: 3,
            delay: Duration::from_secs(3),
        }
    }
}

impl ThoughtConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Configuration for the OpenAI-compatible completion backend
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o".to_string(),
            temperature: 0.0,
            max_tokens: None,
        }
    }
}

impl ModelConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_temperature(mut self, t: f32) -> Self {
        self.temperature = t;
        self
    }

    pub fn with_max_tokens(mut self, n: u32) -> Self {
        self.max_tokens = Some(n);
        self
    }
}
