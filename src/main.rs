use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use signed_spaces::api;
use signed_spaces::models::config::{
    ENV_ACCESS_KEY, ENV_BUCKET, ENV_REGION, ENV_SECRET_KEY,
};
use signed_spaces::server::{build_router, AppState};
use signed_spaces::services::SignedUrl;

#[derive(Parser)]
#[command(name = "signed-spaces")]
#[command(about = "Presigned, expiring download URLs for a private Spaces bucket")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signed Spaces API",
        description = "Short-lived signed download URLs for a private Spaces bucket",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_health, api::handle_sign),
    components(schemas(api::SignRequest, api::HealthResponse, SignedUrl)),
    tags(
        (name = "Signing", description = "Presigned URL issuance"),
        (name = "Health", description = "Masked service status")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signed_spaces=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let state = AppState::from_env();
    match state.configured() {
        Ok(configured) => tracing::info!(
            bucket = %configured.config.bucket,
            region = %configured.config.region,
            access_key = %format!("…{}", configured.config.access_key_suffix()),
            "Credentials loaded"
        ),
        Err(_) => tracing::warn!(
            "Incomplete configuration ({ENV_ACCESS_KEY}/{ENV_SECRET_KEY} unset); \
             every request will be answered with 500"
        ),
    }

    // Build router: start with shared API routes, add production-only routes
    let app = build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "signed-spaces listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let bucket = std::env::var(ENV_BUCKET).ok();
    let region = std::env::var(ENV_REGION).ok();
    let access_key = std::env::var(ENV_ACCESS_KEY).ok();
    let secret_key = std::env::var(ENV_SECRET_KEY).ok();

    println!("signed-spaces v{VERSION}");
    println!("Presigned download URLs for a private Spaces bucket\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  {ENV_BUCKET} = {}",
        bucket.as_deref().unwrap_or("700days (default)")
    );
    println!(
        "  {ENV_REGION} = {}",
        region.as_deref().unwrap_or("ams3 (default)")
    );
    // Credentials are only ever shown masked
    println!(
        "  {ENV_ACCESS_KEY} = {}",
        match access_key.as_deref() {
            Some(key) => {
                let suffix: String = key.chars().skip(key.chars().count().saturating_sub(4)).collect();
                format!("set (…{suffix})")
            }
            None => "(not set)".to_string(),
        }
    );
    println!(
        "  {ENV_SECRET_KEY} = {}",
        if secret_key.is_some() { "set" } else { "(not set)" }
    );

    if access_key.is_none() || secret_key.is_none() {
        println!("\nCredentials incomplete: the server will start but answer 500 everywhere.");
    }

    println!("\nCommands:");
    println!("  signed-spaces serve    Start the HTTP server");
    println!("\nRun 'signed-spaces --help' for more details.");
}
