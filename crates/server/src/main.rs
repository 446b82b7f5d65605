use env_logger::Env;
use log::{error, info};
use std::process::ExitCode;
use tokio::net::TcpListener;
use workshop_server::{BIND_ADDR, ServerError, app, utils::shutdown::shutdown_signal};

async fn run() -> Result<(), ServerError> {
    let listener = TcpListener::bind(BIND_ADDR)
        .await
        .map_err(|source| ServerError::Bind {
            addr: BIND_ADDR.to_string(),
            source,
        })?;
    info!("Running axum on http://{BIND_ADDR}");

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Real environment variables win over .env entries
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("server: {err}");
            ExitCode::FAILURE
        }
    }
}
