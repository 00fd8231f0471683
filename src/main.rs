use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use listinghub::config::AppConfig;
use listinghub::error::AppError;
use listinghub::marketplace::{
    catalog_router, write_catalog_csv, CatalogState, FeaturedEngine, JsonFilePersistence,
    PropertyStore,
};
use listinghub::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Listing Hub",
    about = "Serve and inspect the investment property marketplace catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or export the catalog from the command line
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Override the configured catalog storage directory
    #[arg(long)]
    storage_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Print an inventory report with featured rankings and closed deals
    Report(ReportArgs),
    /// Export the catalog to a CSV file
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Override the configured catalog storage directory
    #[arg(long)]
    storage_dir: Option<PathBuf>,
    /// Include the per-band score breakdown for featured listings
    #[arg(long)]
    detailed: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Override the configured catalog storage directory
    #[arg(long)]
    storage_dir: Option<PathBuf>,
    /// Destination file for the CSV export
    #[arg(long, default_value = "catalog.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Catalog {
            command: CatalogCommand::Report(args),
        } => run_catalog_report(args),
        Command::Catalog {
            command: CatalogCommand::Export(args),
        } => run_catalog_export(args),
    }
}

fn open_store(storage_dir: Option<PathBuf>) -> Result<PropertyStore<JsonFilePersistence>, AppError> {
    let config = AppConfig::load()?;
    let root = storage_dir.unwrap_or(config.storage.root);
    Ok(PropertyStore::open(JsonFilePersistence::new(root)))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(storage_dir) = args.storage_dir.take() {
        config.storage.root = storage_dir;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let store = PropertyStore::open(JsonFilePersistence::new(config.storage.root.clone()));
    let catalog_state = Arc::new(CatalogState::new(store));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(catalog_router(catalog_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "listing marketplace ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_catalog_report(args: ReportArgs) -> Result<(), AppError> {
    let store = open_store(args.storage_dir)?;
    let engine = FeaturedEngine::default();

    let available = store.available_properties();
    let closed = store.closed_properties();

    println!("Catalog report");
    println!(
        "{} listing(s): {} available, {} closed",
        store.len(),
        available.len(),
        closed.len()
    );

    let cities = store.cities();
    if !cities.is_empty() {
        println!("Markets with inventory: {}", cities.join(", "));
    }

    let mut featured: Vec<_> = available.iter().filter(|p| p.featured).collect();
    featured.sort_by(|a, b| {
        engine
            .ranking_score(b)
            .partial_cmp(&engine.ranking_score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if featured.is_empty() {
        println!("\nFeatured listings: none");
    } else {
        println!("\nFeatured listings by rank");
        for property in featured {
            let ranking = engine.ranking(property);
            println!(
                "- {:.1} | {} | {} | ${} | ROI {}%",
                ranking.total,
                property.title,
                property.location.city,
                property.price,
                property.roi
            );
            if args.detailed {
                for band in &ranking.bands {
                    println!("    {:>5.1} pts | {:?} | {}", band.points, band.factor, band.notes);
                }
            }
        }
    }

    if closed.is_empty() {
        println!("\nClosed deals: none");
    } else {
        println!("\nClosed deals (most recent first)");
        for property in &closed {
            println!(
                "- {} | {} | closed {}",
                property.title,
                property.status.label(),
                property.closed_sort_key().format("%Y-%m-%d")
            );
        }
    }

    Ok(())
}

fn run_catalog_export(args: ExportArgs) -> Result<(), AppError> {
    let store = open_store(args.storage_dir)?;
    let file = File::create(&args.output)?;
    write_catalog_csv(store.properties(), file)?;
    println!(
        "Exported {} listing(s) to {}",
        store.len(),
        args.output.display()
    );
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
