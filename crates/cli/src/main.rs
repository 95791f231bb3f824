//! Terminal rendition of the motivate client form.

use clap::{Parser, Subcommand};
use motivate_client::render::{render_history, render_state};
use motivate_client::{client_config_from_env_values, ClientConfig, MotivationForm, ProxyClient};
use std::io::{BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "motivate")]
#[command(about = "Turn a word into motivational phrases")]
struct Cli {
    /// Proxy endpoint (default: http://localhost:3000/generate-motivation)
    #[arg(long, env = "MOTIVATE_PROXY_URL", global = true)]
    proxy_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate phrases for one word
    Generate {
        /// The word to be motivated about
        word: String,
        /// Gemini API key
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: String,
    },
    /// Show the most recent history
    History,
    /// Interactive form (default)
    Form {
        /// Gemini API key; prompted for when absent
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("motivate_client=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = client_config_from_env_values(
        cli.proxy_url,
        std::env::var("MOTIVATE_DATASTORE_URL").ok(),
        std::env::var("MOTIVATE_DATASTORE_KEY").ok(),
    )?;

    match cli.command {
        Some(Commands::Generate { word, api_key }) => generate(&cfg, word, api_key).await,
        Some(Commands::History) => {
            let mut form = build_form(&cfg)?;
            if let Err(e) = form.load_history().await {
                eprintln!("Error loading history: {}", e);
                return Ok(ExitCode::FAILURE);
            }
            let history = render_history(&form.state().history);
            if history.is_empty() {
                println!("No history yet.");
            } else {
                print!("{}", history);
            }
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Form { api_key }) => interactive(&cfg, api_key).await,
        None => interactive(&cfg, std::env::var("GEMINI_API_KEY").ok()).await,
    }
}

fn build_form(cfg: &ClientConfig) -> anyhow::Result<MotivationForm> {
    let proxy = ProxyClient::new(cfg.proxy_url(), cfg.proxy_bearer())?;
    let store = cfg.history_store()?;
    Ok(MotivationForm::new(proxy, store))
}

/// Loads history for display; a failure leaves the list empty.
async fn load_history_or_warn(form: &mut MotivationForm) {
    if let Err(e) = form.load_history().await {
        tracing::warn!("could not load history: {}", e);
    }
}

async fn generate(
    cfg: &ClientConfig,
    word: String,
    api_key: String,
) -> anyhow::Result<ExitCode> {
    let mut form = build_form(cfg)?;
    load_history_or_warn(&mut form).await;
    form.state_mut().api_key = api_key;
    form.state_mut().word = word;

    form.submit().await?;
    print!("{}", render_state(form.state()));

    Ok(if form.state().error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Reads one trimmed line; `None` on end of input.
fn prompt(label: &str) -> anyhow::Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

async fn interactive(cfg: &ClientConfig, api_key: Option<String>) -> anyhow::Result<ExitCode> {
    let mut form = build_form(cfg)?;
    load_history_or_warn(&mut form).await;

    println!("Motivational Phrase Generator");
    println!("Get your API key from https://aistudio.google.com/app/apikey\n");

    let api_key = match api_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => key,
        None => match prompt("Gemini API Key: ")? {
            Some(key) => key,
            None => return Ok(ExitCode::SUCCESS),
        },
    };
    form.state_mut().api_key = api_key;

    let history = render_history(&form.state().history);
    if !history.is_empty() {
        println!("{}", history);
    }

    while let Some(word) = prompt("Your Word (empty to quit): ")? {
        if word.is_empty() {
            break;
        }
        form.state_mut().dismiss_error();
        form.state_mut().word = word;

        println!("Generating...");
        if let Err(blocked) = form.submit().await {
            println!("{}", blocked);
            continue;
        }
        println!("{}", render_state(form.state()));
    }

    Ok(ExitCode::SUCCESS)
}
