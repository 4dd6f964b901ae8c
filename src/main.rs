use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use colorflip::api;
use colorflip::models::{AppConfig, TranslationRequest};
use colorflip::server;
use colorflip::services::{CamTranslator, IdentityTranslator, TranslationPipeline, Translator};

#[derive(Parser)]
#[command(name = "colorflip")]
#[command(about = "Translate color schemes between light and dark backgrounds")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Translate colors from a file or stdin and print the result
    Translate {
        /// "to_dark" or "to_light"
        #[arg(short, long, default_value = "to_dark")]
        direction: String,

        /// Lightness contrast factor (default from config, else 1.0)
        #[arg(short, long)]
        j_factor: Option<f64>,

        /// Colorfulness factor (default from config, else 1.0)
        #[arg(short, long)]
        m_factor: Option<f64>,

        /// File with one color per line (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// What to print
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pairs)]
        format: OutputFormat,

        /// Skip the perceptual transform (destination = source)
        #[arg(long)]
        identity: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Source and destination side by side
    Pairs,
    /// Destination colors only
    Text,
    /// Integer channels as CSV
    Csv,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "colorflip API",
        description = "Translate color schemes between light and dark backgrounds",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_result, api::handle_translate),
    components(schemas(
        api::TranslateForm,
        api::TranslateRequestBody,
        api::TranslateResponse,
        api::ColorPair,
    )),
    tags(
        (name = "Translation", description = "Color scheme translation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Translate {
            direction,
            j_factor,
            m_factor,
            input,
            format,
            identity,
        }) => run_translate_command(&direction, j_factor, m_factor, input, format, identity),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Translate colors without starting a server
fn run_translate_command(
    direction: &str,
    j_factor: Option<f64>,
    m_factor: Option<f64>,
    input: Option<PathBuf>,
    format: OutputFormat,
    identity: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorflip=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::from_env();

    let colors = match input {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let translator: Arc<dyn Translator> = if identity {
        Arc::new(IdentityTranslator)
    } else {
        Arc::new(CamTranslator)
    };
    let pipeline = TranslationPipeline::new(translator, config.max_colors);

    let request = TranslationRequest::new(
        direction,
        j_factor.unwrap_or(config.j_factor),
        m_factor.unwrap_or(config.m_factor),
        colors,
    )?;
    let output = pipeline.process(&request)?;

    match format {
        OutputFormat::Pairs => {
            for pair in &output.pairs {
                println!("{}\t{}", pair.source, pair.destination);
            }
        }
        OutputFormat::Text => print!("{}", output.dump),
        OutputFormat::Csv => print!("{}", output.csv),
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("colorflip v{VERSION}");
    println!("Translate color schemes between light and dark backgrounds\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config = AppConfig::from_env();
    println!("\nConfiguration:");
    println!("  max_colors = {}", config.max_colors);
    println!("  j_factor   = {}", config.j_factor);
    println!("  m_factor   = {}", config.m_factor);

    println!("\nCommands:");
    println!("  colorflip serve      Start the HTTP server");
    println!("  colorflip translate  Translate colors from a file or stdin");
    println!("\nRun 'colorflip --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorflip=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::from_env();
    tracing::info!(max_colors = config.max_colors, "Configuration ready");

    let state = server::create_app_state(config);

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "colorflip server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
