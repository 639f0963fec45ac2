//! Shelf application library
//!
//! Hosts the books module and the bootstrap shared by the `shelf-app` binary
//! and the `shelf` CLI.

pub mod modules;

use anyhow::Context;
use shelf_kernel::{InitCtx, ModuleRegistry, Settings};

/// Build a registry holding every application module
pub fn registry(settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings);
    registry
}

/// Run the service until a shutdown signal arrives
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    tracing::info!(
        env = ?settings.environment,
        address = %settings.server.bind_address(),
        "shelf bootstrap starting"
    );

    let registry = registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_modules(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_modules(&ctx)
        .await
        .context("module startup failed")?;

    tracing::info!("shelf bootstrap complete");

    let served = shelf_http::start_server(&registry, &settings).await;

    registry
        .stop_modules()
        .await
        .context("module shutdown failed")?;

    served
}
