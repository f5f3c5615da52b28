use std::net::SocketAddr;
use todo_core::{JsonFileStore, Todo, TodoRepository, TodoService};
use todo_server::config::AppConfig;
use todo_server::routes;
use todo_server::state::AppState;
use todo_server::weather::OpenWeatherClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::fmt::format::FmtSpan;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!("Starting todo server");

    let config = AppConfig::from_env()?;
    tracing::info!("Using data directory: {}", config.data.dir.display());
    if config.weather.api_key.is_none() {
        tracing::warn!("OPENWEATHERMAP_API_KEY not set, weather endpoint will serve mock data");
    }

    let store = JsonFileStore::<Todo>::new(config.data.todos_file());
    let repository = TodoRepository::new(Box::new(store));
    let service = TodoService::new(repository);

    let weather = OpenWeatherClient::new(&config.weather);
    let state = AppState::new(service, weather);
    let app = routes::router(&config.server.frontend_url, state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
