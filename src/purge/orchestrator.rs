use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::config::PurgeConfig;
use crate::purge::remover;
use crate::purge::selector::select;
use crate::runtime::{ContainerRuntime, ResourceKind};

/// Run one purge cycle: list, select, remove, strictly one resource at a
/// time. In swarm mode expired services are torn down first, in full, before
/// any container is touched, so container removal never races a service's
/// own container management.
///
/// A listing failure aborts the cycle immediately; per-resource removal
/// failures are contained inside the remover and never do.
pub async fn purge<R: ContainerRuntime + ?Sized>(runtime: &R, config: &PurgeConfig) -> Result<()> {
    info!("purging expired docker resources");
    let now = Utc::now();

    if config.swarm {
        let services = runtime
            .list_services()
            .await
            .context("failed to list services")?;
        let expired = select(
            services,
            ResourceKind::Service,
            config.age_threshold,
            &config.filter,
            now,
        );
        info!(count = expired.len(), "expired services selected");
        for handle in &expired {
            remover::remove(runtime, handle).await;
        }
    }

    let containers = runtime
        .list_containers()
        .await
        .context("failed to list containers")?;
    let expired = select(
        containers,
        ResourceKind::Container,
        config.age_threshold,
        &config.filter,
        now,
    );
    info!(count = expired.len(), "expired containers selected");
    for handle in &expired {
        remover::remove(runtime, handle).await;
    }

    Ok(())
}
