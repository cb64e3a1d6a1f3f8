use anyhow::Context;
use clap::Parser;
use receipt_points::utils::error::ErrorSeverity;
use receipt_points::utils::{logger, validation::Validate};
use receipt_points::{
    build_router, AppState, CliConfig, ConfigProvider, InMemoryStore, ReceiptStore, TomlConfig,
};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // The config file is loaded before logging starts so its [logging]
    // section can shape the subscriber.
    let file_config = config.config.as_deref().map(load_config_or_exit);

    let verbose = file_config
        .as_ref()
        .and_then(|c| c.verbose())
        .unwrap_or(config.verbose);
    let log_json = file_config
        .as_ref()
        .and_then(|c| c.log_json())
        .unwrap_or(config.log_json);
    logger::init_logger(verbose, log_json);

    tracing::info!("Starting receipt-points service");
    if verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if file_config.is_none() {
        if let Err(e) = config.validate() {
            tracing::error!(
                "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(e.severity()));
        }
    }

    let provider: &dyn ConfigProvider = match &file_config {
        Some(file) => file,
        None => &config,
    };

    let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryStore::new());
    let app = build_router(AppState::new(store));

    let addr = provider.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("📡 Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited with an error")?;

    tracing::info!("✅ Server stopped cleanly");
    Ok(())
}

fn load_config_or_exit(path: &Path) -> TomlConfig {
    match TomlConfig::from_file(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(e.severity()));
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
