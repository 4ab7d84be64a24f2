use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use scour_core::{Config, ResearchRequest, ResearchRunner};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser)]
#[command(name = "scour")]
#[command(about = "Wikipedia research agent with AI-generated summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Research a topic and print a report
    Research {
        /// The topic to research
        #[arg(required = true)]
        topic: Vec<String>,

        /// How many Wikipedia articles to retrieve (1-20)
        #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=20))]
        sources: u8,

        /// Maximum time to spend fetching, in seconds (30-300)
        #[arg(short, long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(30..=300))]
        timeout: u64,

        /// Search depth: 1 = quick, 3 = thorough
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=3))]
        depth: u8,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check that the configured LLM provider keys work
    Validate,
    /// Print the default configuration file
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Markdown,
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Research {
            topic,
            sources,
            timeout,
            depth,
            format,
            output,
        } => {
            let topic = topic.join(" ");
            let runner = ResearchRunner::from_env()?;
            let request = ResearchRequest::new(&topic)
                .with_max_sources(sources as usize)
                .with_timeout_secs(timeout)
                .with_depth(depth as usize);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message(format!("Researching \"{topic}\"..."));
            spinner.enable_steady_tick(Duration::from_millis(120));

            let result = runner.run(&request).await?;
            spinner.finish_and_clear();

            let rendered = match format {
                ReportFormat::Markdown => report::to_markdown(&result),
                ReportFormat::Text => report::to_text(&result),
                ReportFormat::Json => report::to_json(&result)?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("Report written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }
        Commands::Validate => {
            let runner = ResearchRunner::from_env()?;
            let statuses = runner.validate_providers().await;

            if statuses.is_empty() {
                println!("No provider keys configured.");
                println!("Set OPENROUTER_API_KEY or GROQ_API_KEY to enable AI summaries.");
            }
            for (provider, outcome) in statuses {
                match outcome {
                    Ok(()) => println!("{provider}: key OK"),
                    Err(err) => println!("{provider}: validation failed: {err}"),
                }
            }
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
    }

    Ok(())
}
