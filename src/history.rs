//! Topic-history seed context for the thought pipeline.

use std::fs;
use std::path::Path;

use chrono::Local;

use crate::error::Result;
use crate::prompts;

/// Read the accumulated prior-topic history log.
pub fn load_history(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Build the topic-seed prompt stamped with the current local date and weekday.
///
/// The clock stays out of [`prompts::build_seed_prompt`] so the rendering is
/// testable with fixed dates.
pub fn seed_prompt_now(history: &str) -> String {
    let now = Local::now();
    prompts::build_seed_prompt(
        history,
        &now.format("%d/%m/%Y").to_string(),
        &now.format("%A").to_string(),
    )
}
