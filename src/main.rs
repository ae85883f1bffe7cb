use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seoscope=info")),
        )
        .init();

    let addr =
        std::env::var("SEOSCOPE_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    seoscope::server::serve(&addr).await
}
