//! The example-synthesis pipeline: drive a model to produce input/output
//! example pairs for a task, filter out pairs that echo the prompt's
//! structural delimiters, and assemble the accepted set into a final prompt.

use tracing::{debug, info};

use crate::error::{PromptGenError, Result};
use crate::model::{CompletionModel, StopSet};
use crate::prompts::{self, EXAMPLE_INPUT, EXAMPLE_OUTPUT};
use crate::types::{AutoPromptConfig, Example};

/// Accept a candidate pair iff neither field contains a structural delimiter.
///
/// A delimiter echoed into example content would make the boundaries between
/// examples ambiguous in the assembled prompt. Matching is exact, case
/// sensitive substring search at any position.
pub fn example_is_clean(example: &Example) -> bool {
    let fields = [example.input.as_str(), example.output.as_str()];
    fields
        .iter()
        .all(|f| !f.contains(EXAMPLE_INPUT) && !f.contains(EXAMPLE_OUTPUT))
}

/// Few-shot auto-prompt orchestrator
pub struct AutoPrompt<M> {
    config: AutoPromptConfig,
    model: M,
}

impl<M: CompletionModel> AutoPrompt<M> {
    /// Create an orchestrator with the default config
    pub fn new(model: M) -> Self {
        Self::with_config(AutoPromptConfig::default(), model)
    }

    pub fn with_config(config: AutoPromptConfig, model: M) -> Self {
        Self { config, model }
    }

    /// Generate one candidate example pair for the task.
    ///
    /// Two stop-bounded model calls: one for the input half, then the prompt
    /// is extended with an `"Example Output: "` cue and the model is called
    /// again for the output half. The pair is returned unvalidated; filtering
    /// is the collector's concern.
    pub fn generate_example(&self, task: &str) -> Result<Example> {
        let base = prompts::build_generation_prompt(task)?;
        let stop = StopSet::new([EXAMPLE_INPUT, EXAMPLE_OUTPUT]);

        let input = self.model.complete(&base, &stop)?;
        let with_input = format!("{base}{input}\nExample Output: ");
        let output = self.model.complete(&with_input, &stop)?;

        Ok(Example::new(input, output))
    }

    /// Collect exactly `example_num` validated examples.
    ///
    /// Rejected pairs are discarded and generation is retried until the
    /// attempt budget runs out, at which point the partial progress is
    /// reported in the error.
    pub fn collect_examples(&self, task: &str) -> Result<Vec<Example>> {
        if task.is_empty() {
            return Err(PromptGenError::EmptyTask);
        }
        if self.config.example_num < 1 {
            return Err(PromptGenError::InvalidExampleCount(self.config.example_num));
        }

        let mut examples = Vec::with_capacity(self.config.example_num);
        let mut attempts = 0u32;

        while examples.len() != self.config.example_num {
            if attempts >= self.config.max_attempts {
                return Err(PromptGenError::AttemptsExhausted {
                    accepted: examples.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = self.generate_example(task)?;
            if example_is_clean(&candidate) {
                examples.push(candidate);
            } else {
                debug!(attempt = attempts, "rejected example echoing a prompt delimiter");
            }
        }

        Ok(examples)
    }

    /// Collect examples and fold them into the final structured prompt.
    ///
    /// On success the prompt contains exactly `example_num` delimiter-free
    /// examples in generation order.
    pub fn run(&self, task: &str) -> Result<String> {
        let examples = self.collect_examples(task)?;
        info!(count = examples.len(), "assembling prompt from accepted examples");
        prompts::assemble_prompt(task, &examples)
    }
}
