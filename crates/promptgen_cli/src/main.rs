//! promptgen CLI - drive the few-shot and thought pipelines against an
//! OpenAI-compatible backend.

use clap::{Parser, Subcommand};
use std::time::Duration;

use promptgen::{
    AutoPrompt, AutoPromptConfig, ConsoleDisplay, ModelConfig, OpenAiModel, ThoughtConfig,
    ThoughtLoop,
};

#[derive(Parser, Debug)]
#[command(name = "promptgen")]
#[command(about = "Few-shot prompt construction and thought refinement")]
struct Args {
    /// Model to use
    #[arg(short, long, default_value = "gpt-4o")]
    model: String,

    /// Backend LLM URL (e.g., http://localhost:11434/v1 for Ollama)
    #[arg(short = 'u', long, default_value = "https://api.openai.com/v1")]
    backend_url: String,

    /// Backend API key (optional, uses OPENAI_API_KEY env var if not provided)
    #[arg(short = 'k', long)]
    backend_key: Option<String>,

    /// Temperature for sampling
    #[arg(short, long, default_value = "0.7")]
    temperature: f32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a few-shot prompt for a task
    Autogen {
        /// Task description
        #[arg(long)]
        task: String,

        /// Number of examples to synthesize
        #[arg(short, long, default_value = "3")]
        examples: usize,

        /// Generation attempt budget
        #[arg(long, default_value = "30")]
        max_attempts: u32,
    },
    /// Iteratively refine a thought on a topic
    Think {
        /// Topic to think about
        #[arg(long)]
        topic: String,

        /// Number of refinement rounds
        #[arg(short, long, default_value = "3")]
        iterations: u32,

        /// Seconds to pause before clearing between rounds
        #[arg(short, long, default_value = "3")]
        delay: u64,
    },
}

fn main() {
    let args = Args::parse();

    let config = ModelConfig::new(&args.model).with_temperature(args.temperature);
    let model = match create_model(&args, config) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to create model backend: {}", e);
            eprintln!("Make sure the backend is running");
            std::process::exit(1);
        }
    };

    let result = match args.command {
        Command::Autogen {
            ref task,
            examples,
            max_attempts,
        } => {
            let config = AutoPromptConfig::new()
                .with_example_num(examples)
                .with_max_attempts(max_attempts);
            AutoPrompt::with_config(config, model).run(task)
        }
        Command::Think {
            ref topic,
            iterations,
            delay,
        } => {
            let config = ThoughtConfig::new()
                .with_iterations(iterations)
                .with_delay(Duration::from_secs(delay));
            ThoughtLoop::with_config(config, model, ConsoleDisplay).refine(topic)
        }
    };

    match result {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn create_model(args: &Args, config: ModelConfig) -> promptgen::Result<OpenAiModel> {
    // Resolve API key from args or environment
    let key = args
        .backend_key
        .clone()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok());
    match key {
        Some(key) => OpenAiModel::with_base_url_and_key(config, &args.backend_url, &key),
        None => OpenAiModel::with_base_url(config, &args.backend_url),
    }
}
