//! The iterative thought pipeline: repeatedly re-prompt a model on a topic,
//! feeding each round's output back as the next round's "last thought".

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::{PromptGenError, Result};
use crate::model::{CompletionModel, StopSet};
use crate::prompts::{self, PARAGRAPH_BREAK};
use crate::types::ThoughtConfig;

/// Display collaborator for the refinement loop.
///
/// The pause-then-clear is a post-round pacing hook, not a concurrency
/// primitive; the loop's state machine never depends on it.
pub trait ThoughtDisplay {
    /// Emit the current thought
    fn show(&mut self, text: &str);

    /// Pause for display pacing, then clear the previously emitted text
    fn pause_and_clear(&mut self, delay: Duration);
}

/// Terminal display: prints thoughts to stdout and clears the screen
/// with an ANSI escape between rounds.
pub struct ConsoleDisplay;

impl ThoughtDisplay for ConsoleDisplay {
    fn show(&mut self, text: &str) {
        println!("{text}\n");
    }

    fn pause_and_clear(&mut self, delay: Duration) {
        thread::sleep(delay);
        print!("\x1B[2J\x1B[1;1H");
        let _ = io::stdout().flush();
    }
}

/// No-op display for embedding the loop without an output surface
pub struct SilentDisplay;

impl ThoughtDisplay for SilentDisplay {
    fn show(&mut self, _text: &str) {}

    fn pause_and_clear(&mut self, _delay: Duration) {}
}

/// Iterative thought-refinement loop
pub struct ThoughtLoop<M, D> {
    config: ThoughtConfig,
    model: M,
    display: D,
}

impl<M: CompletionModel, D: ThoughtDisplay> ThoughtLoop<M, D> {
    /// Create a loop with the default config
    pub fn new(model: M, display: D) -> Self {
        Self::with_config(ThoughtConfig::default(), model, display)
    }

    pub fn with_config(config: ThoughtConfig, model: M, display: D) -> Self {
        Self {
            config,
            model,
            display,
        }
    }

    /// Refine a thought on `topic` over the configured number of rounds.
    ///
    /// State machine: a single `thought` string, initially empty, replaced
    /// (not merged) once per round by the model's output, with generation
    /// halting at the first blank line. The display pauses and clears after
    /// every round except the last. Returns the final round's raw output.
    pub fn refine(&mut self, topic: &str) -> Result<String> {
        if topic.is_empty() {
            return Err(PromptGenError::EmptyTopic);
        }

        let stop = StopSet::new([PARAGRAPH_BREAK]);
        let mut thought = String::new();

        for round in 0..self.config.iterations {
            self.display.show(&thought);

            let prompt = prompts::build_thought_prompt(topic, &thought)?;
            thought = self.model.complete(&prompt, &stop)?;
            debug!(round, len = thought.len(), "thought replaced");

            if round + 1 < self.config.iterations {
                self.display.pause_and_clear(self.config.delay);
            }
        }

        Ok(thought)
    }
}
