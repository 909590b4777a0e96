use signup_form::api;
use signup_form::logger::*;
use signup_form::server::*;
use signup_form::settings::*;
use std::fs;
use std::sync::Arc;
use tokio::signal;
use warp::Filter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap();

    let project_settings = parse_settings(cli.settings.as_deref())?;
    info!(?project_settings);
    let logger_config = LogConfig {
        filter: project_settings.log.filter.clone(),
    };
    logger.reload_from_config(&logger_config)?;

    let address: std::net::SocketAddr = project_settings.http.address.parse()?;
    let tls_paths = project_settings.http.tls_paths();
    if let Some((cert_path, key_path)) = tls_paths {
        if !fs::metadata(cert_path)?.is_file() {
            return Err(anyhow::anyhow!(
                "TLS cert is not a regular file: {:?}",
                cert_path
            ));
        }
        if !fs::metadata(key_path)?.is_file() {
            return Err(anyhow::anyhow!(
                "TLS key is not a regular file: {:?}",
                key_path
            ));
        }
    }

    let server = Arc::new(Server::try_new(&project_settings).await?);

    let app = api::routes(server.clone())
        .recover(api::recover_error)
        .with(warp::trace::request());

    let shutdown_signal = async {
        signal::ctrl_c().await.expect("Could not register SIGINT");
    };

    match tls_paths {
        Some((cert_path, key_path)) => {
            let (bound, serving) = warp::serve(app)
                .tls()
                .cert_path(cert_path)
                .key_path(key_path)
                .bind_with_graceful_shutdown(address, shutdown_signal);
            info!("listening on https://{}", bound);
            serving.await;
        }
        None => {
            let (bound, serving) =
                warp::serve(app).bind_with_graceful_shutdown(address, shutdown_signal);
            info!("listening on http://{}", bound);
            serving.await;
        }
    }

    let shutdown_timeout = std::time::Duration::from_secs(10);
    match tokio::time::timeout(shutdown_timeout, server.shutdown()).await {
        Ok(_) => tracing::info!("server shutdown successfully"),
        Err(_) => tracing::error!("server shutdown timed out"),
    }

    Ok(())
}
