//! Fixed template text and pure prompt builders.
//!
//! Every builder is a deterministic function of its arguments. The structural
//! delimiters below double as stop sequences for generation and as forbidden
//! substrings in generated example content.

use crate::error::{PromptGenError, Result};
use crate::types::Example;

/// Structural delimiter opening an example's input section.
pub const EXAMPLE_INPUT: &str = "Example Input:";

/// Structural delimiter opening an example's output section.
pub const EXAMPLE_OUTPUT: &str = "Example Output:";

/// Stop marker for thought refinement: generation halts at the first blank line.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Instructional header for the few-shot example pipeline.
///
/// Kept verbatim from the prompt set this pipeline was tuned with,
/// including its wording quirks.
const FEWSHOT_HEADER: &str = r#"[INST] <<SYS>> You are an individual dedicated to expanding our understanding of the world and pushing the boundaries of human knowledge.
For the task specified below, outline a set of instructions to successfully achieve it.
Based on the task given, the goal is to correctly write a prompt form to generate an answer from an digital agent.
The structure should consist of an example section with input : output pairs to show the correct behaviour.<</SYS>>"#;

/// Instructional header for the thought pipeline.
const THOUGHT_HEADER: &str = r#"[INST] <<SYS>> You are an individual dedicated to expanding our understanding of the world and pushing the boundaries of human knowledge.
For the task specified below, outline a set of instructions to successfully achieve it.
You are an accademic which cares about being precise about what you say and about knowledge.<</SYS>>"#;

/// Build the example-generation prompt for a task.
///
/// Renders the instructional header, the task text and two hard-coded worked
/// examples (multiply, factorial) as anchors for model behaviour, ending with
/// an open `"Example Input:"` continuation cue.
pub fn build_generation_prompt(task: &str) -> Result<String> {
    if task.is_empty() {
        return Err(PromptGenError::EmptyTask);
    }

    Ok(format!(
        r#"{FEWSHOT_HEADER}

Task: Given a 'Description' of a python function, write the code.
Examples

Example Input:
Description: A function which takes two numbers and multiplies them.
Example Output: def multiply(a,b):
    return a*b

Example Input:
Description: A Python function to calculate the factorial of a number.
Example Output: def factorial(n):
    return 1 if n == 0 else n * factorial(n-1)

Task: {task}
Examples
Example Input:"#
    ))
}

/// Fold a task and its accepted examples into the final structured prompt.
///
/// Examples are serialized in collection order, followed by a dangling
/// `"Example Input: "` cue inviting a consumer to continue the pattern.
pub fn assemble_prompt(task: &str, examples: &[Example]) -> Result<String> {
    if task.is_empty() {
        return Err(PromptGenError::EmptyTask);
    }
    if examples.is_empty() {
        return Err(PromptGenError::NoExamples);
    }

    let mut prompt = format!("{FEWSHOT_HEADER}\n\nTask: {task}\nExamples\n");
    for example in examples {
        prompt.push_str(&format!(
            "Example Input: {}\nExample Output:{}\n",
            example.input, example.output
        ));
    }
    prompt.push_str("Example Input: ");

    Ok(prompt)
}

/// Build a thought-refinement prompt from a topic and the previous round's
/// thought. An empty `last_thought` is valid and means "no prior context yet".
pub fn build_thought_prompt(topic: &str, last_thought: &str) -> Result<String> {
    if topic.is_empty() {
        return Err(PromptGenError::EmptyTopic);
    }

    Ok(format!(
        r#"{THOUGHT_HEADER}
Think about the given topic, a previous thought is also provided, use it to dive deeper into the subject.

Topic: {topic}

Last thought: {last_thought}

Thought: "#
    ))
}

/// Build the dated topic-seed prompt from accumulated topic history.
///
/// `date` is expected as `dd/mm/yyyy` and `weekday` as the full weekday name;
/// see [`crate::history::seed_prompt_now`] for the clock-stamped variant.
pub fn build_seed_prompt(history: &str, date: &str, weekday: &str) -> String {
    format!(
        r#"{THOUGHT_HEADER}

Topic examples
{history}
{date} - {weekday} -"#
    )
}
