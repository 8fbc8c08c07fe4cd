mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use inspector_client::{HttpComparisonClient, Inspector};
use inspector_core::submitter::SUBMITTING_LABEL;
use inspector_core::{ComparisonService, InspectorConfig, SubmitState};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inspector")]
#[command(about = "Model Change Inspector - compare two models on two prompts", long_about = None)]
struct Cli {
    /// Comparison service base URL (overrides INSPECTOR_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a new comparison
    Compare {
        /// Model A identifier (e.g. gpt-4)
        #[arg(long)]
        model_a: String,

        /// Prompt sent to model A
        #[arg(long)]
        prompt_a: String,

        /// Model B identifier (e.g. gpt-3.5-turbo)
        #[arg(long)]
        model_b: String,

        /// Prompt sent to model B
        #[arg(long)]
        prompt_b: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// List recent comparisons
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Show one comparison
    Show {
        id: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Show service status
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = InspectorConfig::from_env()?;
    let base_url = cli.api_base.unwrap_or(config.api.base_url);
    let client = HttpComparisonClient::new(&base_url);

    match cli.command {
        Commands::Compare {
            model_a,
            prompt_a,
            model_b,
            prompt_b,
            output,
        } => cmd_compare(client, [model_a, prompt_a, model_b, prompt_b], output).await?,
        Commands::List { output } => cmd_list(client, output).await?,
        Commands::Show { id, output } => cmd_show(client, id, output).await?,
        Commands::Status => cmd_status(client).await,
    }

    Ok(())
}

async fn cmd_compare(
    client: HttpComparisonClient,
    [model_a, prompt_a, model_b, prompt_b]: [String; 4],
    output: OutputFormat,
) -> Result<()> {
    let mut inspector = Inspector::new(client);
    let form = inspector.form_mut();
    form.model_a = model_a;
    form.prompt_a = prompt_a;
    form.model_b = model_b;
    form.prompt_b = prompt_b;

    if !inspector.submitter().can_submit() {
        let missing = inspector
            .submitter()
            .form
            .to_request()
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        anyhow::bail!("{}", missing);
    }

    if output == OutputFormat::Table {
        eprintln!("{}", SUBMITTING_LABEL);
    }

    let state = inspector.submit().await.clone();
    match &state {
        SubmitState::Success(result) => match output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
            OutputFormat::Table => {
                println!();
                print!("{}", render::comparison_detail(result));
                println!();
                println!("Recent Comparisons:");
                print!("{}", render::comparison_table(inspector.history().entries()));
            }
        },
        SubmitState::Error(message) => anyhow::bail!("{}", message),
        other => anyhow::bail!("Comparison did not complete: {:?}", other),
    }

    Ok(())
}

async fn cmd_list(client: HttpComparisonClient, output: OutputFormat) -> Result<()> {
    let comparisons = client.list().await?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparisons)?),
        OutputFormat::Table => {
            println!();
            println!("Recent Comparisons:");
            print!("{}", render::comparison_table(&comparisons));
            println!();
        }
    }
    Ok(())
}

async fn cmd_show(client: HttpComparisonClient, id: i64, output: OutputFormat) -> Result<()> {
    let comparison = client.get(id).await?;
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Table => {
            println!();
            print!("{}", render::comparison_detail(&comparison));
            println!();
        }
    }
    Ok(())
}

async fn cmd_status(client: HttpComparisonClient) {
    println!("System Status:");
    println!("{:-<40}", "");
    println!("  Service: {}", client.base_url());

    match client.ping().await {
        Ok(()) => println!("  Status: connected"),
        Err(e) => println!("  Status: disconnected ({})", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from([
            "inspector",
            "--api-base",
            "http://127.0.0.1:9000",
            "compare",
            "--model-a",
            "gpt-4",
            "--prompt-a",
            "hello",
            "--model-b",
            "gpt-3.5-turbo",
            "--prompt-b",
            "hello",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.api_base.as_deref(), Some("http://127.0.0.1:9000"));
        let Commands::Compare { model_b, output, .. } = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(model_b, "gpt-3.5-turbo");
        assert_eq!(output, OutputFormat::Json);
    }
}
