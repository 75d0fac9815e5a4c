use config::{Args, FundApiConfig};
use server::logging::{self, LoggingConfig};
use server::{app, state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    // Missing .env is fine; deployments configure through real env vars.
    let _ = dotenv::from_filename(&args.env_file);

    let config = FundApiConfig::from_env()?;
    logging::init_with_config(LoggingConfig {
        level: &config.log.level,
        json_format: config.log.json,
        strip_ansi: config.log.strip_ansi,
        write_to_file: config.log.write_to_file,
        write_path: &config.log.write_path,
        write_max_file_size: config.log.write_max_file_size,
        write_max_files: config.log.write_max_files,
    })?;

    let addr = format!("{}:{}", config.http.bind_host, config.http.port);
    let contract = config.chain.contract_address.clone();
    let proxy = config.chain.proxy_url.clone();

    let state = state::AppState::new(config);
    let app = app::create_app(state);

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Fund contract: {}", contract);
    tracing::info!("Chain proxy: {}", proxy);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
