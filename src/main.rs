use tokio::{net::TcpListener, signal};
use toy_store::{
    config::load_config, create_app, infrastructure::connect_repository,
    infrastructure::logger::Logger, AppState, ProductService,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = load_config()?;

    Logger::init(&config.logging.level);

    match source {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let repository = connect_repository(&config.database).await.map_err(|e| {
        error!("Failed to initialize storage: {}", e);
        e
    })?;
    let storage = repository.kind();

    let state = AppState {
        product_service: ProductService::new(repository),
    };
    let app = create_app(state, config.server.request_timeout());

    let listener = TcpListener::bind(config.server.socket_addr()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Toy store server running on http://{} ({} storage)", addr, storage);
    info!("📖 API endpoints:");
    info!("   POST   /products      - Create product");
    info!("   GET    /products      - List products");
    info!("   GET    /products/:id  - Get product");
    info!("   PATCH  /products/:id  - Update product");
    info!("   DELETE /products/:id  - Delete product");
    info!("   GET    /health        - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
