mod routes;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let (app, addr) = routes::app()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "kasuwa listening");
    axum::serve(listener, app).await?;
    Ok(())
}
