use anyhow::Result;
use clap::Parser;
use lattice_core::ProviderRegistry;
use lattice_demo::domains::{TodoAnalyticsProvider, TodoListProvider};
use lattice_demo::routes::{session_routes, todo_routes, AppState, DEMO_USER};
use lattice_demo::store::TodoStore;
use lattice_demo::views::{LoginFormView, NewTodoForm, TodoAnalyticsView, TodoListView};
use lattice_web::{serve, Orchestrator, ViewRegistry, WebConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lattice-demo", about = "Todo demo for the lattice view framework")]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => WebConfig::from_file(path)?,
        None => WebConfig::default(),
    };
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let store = Arc::new(TodoStore::with_demo_data(DEMO_USER));

    let providers = ProviderRegistry::builder()
        .register(TodoListProvider::new(store.clone()))?
        .register(TodoAnalyticsProvider::new(store.clone()))?
        .build();

    let views = ViewRegistry::new()
        .register(Arc::new(TodoListView))?
        .register(Arc::new(TodoAnalyticsView))?
        .register(Arc::new(NewTodoForm))?
        .register(Arc::new(LoginFormView))?;

    let mut orchestrator = Orchestrator::new(Arc::new(providers), Arc::new(views));
    if let Some(deadline) = config.load_timeout() {
        orchestrator = orchestrator.with_load_deadline(deadline);
    }

    let state = AppState {
        store,
        orchestrator: Arc::new(orchestrator),
    };

    let app = axum::Router::new()
        .merge(todo_routes(state.clone()))
        .merge(session_routes(state));

    serve(&config, app).await?;
    Ok(())
}
