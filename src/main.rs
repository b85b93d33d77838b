mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod session;
mod ui;
mod view;
mod workers;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{network::API_URL_ENV_VAR, polling};
use crate::environment::Environment;
use crate::session::{SessionOptions, Workers, run_headless_mode, run_tui_mode};
use crate::view::{ConsoleSink, HtmlSnapshot};
use crate::workers::core::WorkerConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Base URL of the sentiment service, e.g. http://localhost:5000
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Milliseconds between refreshes
        #[arg(long, value_name = "MILLIS", value_parser = clap::value_parser!(u64).range(polling::MIN_INTERVAL_MS..))]
        interval_ms: Option<u64>,

        /// Print updates to the console instead of drawing the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Paint the dashboard's own background color
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Analyze a single text and print the result
    Analyze {
        /// Text to analyze
        #[arg(long)]
        text: String,

        /// Base URL of the sentiment service
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Submit a few sample posts so the dashboard has something to show
    Seed {
        /// Base URL of the sentiment service
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Fetch the dashboard once and write it as a static HTML page
    Snapshot {
        /// Where to write the page
        #[arg(long, short, value_name = "PATH", default_value = "dashboard.html")]
        output: PathBuf,

        /// Base URL of the sentiment service
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the configuration file and the service it resolves to
    Show,
    /// Save the sentiment service URL
    SetApiUrl {
        /// Base URL, or "local"
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Delete the configuration file
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            interval_ms,
            headless,
            with_background,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let mut options = session_options(api_url.as_deref(), &config)?;
            if let Some(interval_ms) = interval_ms {
                options.worker_config.poll_interval = Duration::from_millis(interval_ms);
            }
            options.with_background_color |= with_background;

            if headless {
                run_headless_mode(options).await
            } else {
                run_tui_mode(options).await
            }
        }
        Command::Analyze { text, api_url } => {
            let config = Config::load_or_default(&config_path)?;
            let options = session_options(api_url.as_deref(), &config)?;
            let workers = Workers::connect(&options, Arc::new(ConsoleSink::new()));
            workers.submitter.submit_text(&text).await?;
            Ok(())
        }
        Command::Seed { api_url } => {
            let config = Config::load_or_default(&config_path)?;
            let options = session_options(api_url.as_deref(), &config)?;
            seed(&options).await
        }
        Command::Snapshot { output, api_url } => {
            let config = Config::load_or_default(&config_path)?;
            let options = session_options(api_url.as_deref(), &config)?;
            snapshot(&options, &output).await
        }
        Command::Config { command } => run_config_command(command, &config_path),
    }
}

/// Resolves the service and timings: CLI flag, then `SENTIMENT_API_URL`, then
/// the config file, then the local default.
fn session_options(cli_api_url: Option<&str>, config: &Config) -> Result<SessionOptions, Box<dyn Error>> {
    let env_api_url = std::env::var(API_URL_ENV_VAR).ok();
    let environment = Environment::resolve([
        cli_api_url,
        env_api_url.as_deref(),
        config.api_url.as_deref(),
    ])?;

    let poll_interval = config
        .poll_interval()
        .max(Duration::from_millis(polling::MIN_INTERVAL_MS));
    Ok(SessionOptions {
        environment,
        worker_config: WorkerConfig::new(poll_interval),
        request_timeout: config.request_timeout(),
        with_background_color: config.with_background_color,
    })
}

async fn seed(options: &SessionOptions) -> Result<(), Box<dyn Error>> {
    print_cmd_info!(
        "Seeding",
        "Submitting sample posts to {}",
        options.environment.api_url()
    );
    let workers = Workers::connect(options, Arc::new(ConsoleSink::new()));
    let summary = workers
        .seeder(&options.worker_config)
        .seed_samples()
        .await;

    if summary.seeded == 0 {
        return Err(Box::from(format!(
            "No sample posts could be submitted to {}",
            options.environment.api_url()
        )));
    }
    print_cmd_success!(
        "Seeding complete",
        "{} submitted, {} failed",
        summary.seeded,
        summary.failed
    );
    Ok(())
}

async fn snapshot(options: &SessionOptions, output: &Path) -> Result<(), Box<dyn Error>> {
    let html = Arc::new(HtmlSnapshot::new());
    let workers = Workers::connect(options, html.clone());

    let summary = workers.refresher.refresh().await;
    if summary.all_failed() {
        return Err(Box::from(format!(
            "Could not reach the sentiment service at {}",
            options.environment.api_url()
        )));
    }
    if summary.failed > 0 {
        print_cmd_warn!(
            "Partial snapshot",
            "{} of 3 dashboard parts could not be fetched",
            summary.failed
        );
    }

    html.write_to(output)
        .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
    let view = html.view();
    print_cmd_success!(
        "Snapshot written",
        "{} ({} posts, {} total analyzed)",
        output.display(),
        view.feed.len(),
        view.stats.total()
    );
    Ok(())
}

fn run_config_command(command: ConfigCommand, config_path: &Path) -> Result<(), Box<dyn Error>> {
    match command {
        ConfigCommand::Show => {
            let config = Config::load_or_default(config_path)?;
            let options = session_options(None, &config)?;
            println!("Config file: {}", config_path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
            println!("Resolved service: {:?}", options.environment);
            Ok(())
        }
        ConfigCommand::SetApiUrl { url } => {
            let environment: Environment = url.parse()?;
            let mut config = Config::load_or_default(config_path)?;
            config.api_url = match &environment {
                Environment::Local => None,
                Environment::Custom { .. } => Some(environment.api_url()),
            };
            config
                .save(config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!(
                "Configuration saved",
                "Using {} ({})",
                environment.api_url(),
                config_path.display()
            );
            Ok(())
        }
        ConfigCommand::Reset => {
            println!("Resetting configuration...");
            Config::clear(config_path)?;
            print_cmd_success!("Configuration reset", "{}", config_path.display());
            Ok(())
        }
    }
}
